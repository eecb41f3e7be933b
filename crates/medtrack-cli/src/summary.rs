//! Terminal rendering of dashboards, lists and the plan card.

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use medtrack_core::{Dashboard, SubscriptionState};
use medtrack_model::{DoctorVisit, Medication, TRIAL_DAYS};

const PROGRESS_WIDTH: usize = 14;

/// Sidebar status widget: plan name plus remaining trial days.
pub fn subscription_banner(state: &SubscriptionState) -> String {
    if state.is_premium() {
        return "Premium Plan · Active".to_string();
    }
    format!(
        "Free Trial · {} days left {}",
        state.days_left,
        trial_progress(state.days_left)
    )
}

fn trial_progress(days_left: u32) -> String {
    let days = usize::try_from(days_left).unwrap_or(usize::MAX);
    let trial = TRIAL_DAYS as usize;
    let filled = days.min(trial) * PROGRESS_WIDTH / trial;
    format!(
        "[{}{}]",
        "#".repeat(filled),
        ".".repeat(PROGRESS_WIDTH - filled)
    )
}

pub fn render_dashboard(dashboard: &Dashboard<'_>, state: &SubscriptionState) -> String {
    let mut out = String::new();
    out.push_str(&subscription_banner(state));
    out.push_str("\n\n");

    let mut stats = Table::new();
    stats.set_header(vec![header_cell("Total Medications"), header_cell("Upcoming Visits")]);
    apply_table_style(&mut stats);
    stats.add_row(vec![
        Cell::new(dashboard.total_medications).add_attribute(Attribute::Bold),
        Cell::new(dashboard.upcoming_count()).add_attribute(Attribute::Bold),
    ]);
    out.push_str(&stats.to_string());

    out.push_str("\n\nLow Stock Alerts\n");
    if dashboard.low_stock.is_empty() {
        out.push_str("Everything looks good!");
    } else {
        let mut table = Table::new();
        table.set_header(vec![header_cell("Medication"), header_cell("Left")]);
        apply_table_style(&mut table);
        align_column(&mut table, 1, CellAlignment::Right);
        for med in &dashboard.low_stock {
            table.add_row(vec![
                Cell::new(&med.name),
                Cell::new(format!("{} left", med.stock)).fg(Color::Red),
            ]);
        }
        out.push_str(&table.to_string());
    }

    out.push_str("\n\nUpcoming Visits\n");
    if dashboard.upcoming_visits.is_empty() {
        out.push_str("No upcoming visits scheduled.");
    } else {
        out.push_str(&render_visits(&dashboard.upcoming_visits));
    }
    out
}

pub fn render_medications(medications: &[Medication]) -> String {
    if medications.is_empty() {
        return "No medications added yet.".to_string();
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("ID"),
        header_cell("Name"),
        header_cell("Dosage"),
        header_cell("Frequency"),
        header_cell("Next Dose"),
        header_cell("Stock"),
        header_cell("Notes"),
    ]);
    apply_list_table_style(&mut table);
    align_column(&mut table, 5, CellAlignment::Right);
    for med in medications {
        table.add_row(vec![
            dim_cell(med.id),
            Cell::new(&med.name).add_attribute(Attribute::Bold),
            Cell::new(&med.dosage),
            Cell::new(med.frequency),
            Cell::new(&med.time),
            stock_cell(med),
            text_cell(&med.notes),
        ]);
    }
    table.to_string()
}

pub fn render_visits(visits: &[&DoctorVisit]) -> String {
    if visits.is_empty() {
        return "No visits scheduled.".to_string();
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("ID"),
        header_cell("Date"),
        header_cell("Time"),
        header_cell("Doctor"),
        header_cell("Specialty"),
        header_cell("Location"),
        header_cell("Reason"),
    ]);
    apply_list_table_style(&mut table);
    for visit in visits {
        let date = visit
            .calendar_date()
            .map(|d| d.format("%b %d, %Y").to_string())
            .unwrap_or_else(|| "-".to_string());
        table.add_row(vec![
            dim_cell(visit.id),
            Cell::new(date).fg(Color::Blue),
            text_cell(&visit.time),
            Cell::new(&visit.doctor_name).add_attribute(Attribute::Bold),
            text_cell(&visit.specialty),
            Cell::new(visit.location_label()),
            Cell::new(visit.reason_label()),
        ]);
    }
    table.to_string()
}

/// Settings screen subscription card.
pub fn render_plan(state: &SubscriptionState) -> String {
    let mut lines = vec![
        format!("Plan: {}", state.status.plan_label()),
        format!("Status: {}", state.status),
    ];
    if state.is_premium() {
        lines.push("You have full access to all premium features.".to_string());
    } else {
        lines.push("You are currently on the basic free tier.".to_string());
        lines.push(format!("Trial days left: {}", state.days_left));
        lines.push("Upgrade to Premium for €2.50 / month: `medtrack plan upgrade`".to_string());
    }
    lines.join("\n")
}

fn stock_cell(med: &Medication) -> Cell {
    let cell = Cell::new(format!("{} pills left", med.stock));
    if med.is_low_stock() {
        cell.fg(Color::Red).add_attribute(Attribute::Bold)
    } else {
        cell.fg(Color::Green)
    }
}

fn text_cell(value: &str) -> Cell {
    if value.is_empty() {
        dim_cell("-")
    } else {
        Cell::new(value)
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_list_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(160);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
