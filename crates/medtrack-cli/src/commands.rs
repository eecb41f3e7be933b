//! Command dispatch for the `medtrack` binary.

use anyhow::{Error, Result, bail};
use medtrack_core::{
    Clock, Dashboard, MedicationBook, SubscriptionManager, TrackerError, VisitBook,
    reset_user_data,
};
use medtrack_model::{MedicationDraft, Notice, VisitDraft};
use medtrack_persistence::KeyValueStore;
use tracing::{debug, info};

use crate::cli::{Command, MedCommand, PlanCommand, VisitCommand};
use crate::logging::redact_value;
use crate::settings::Settings;
use crate::summary::{render_dashboard, render_medications, render_plan, render_visits};

/// Everything a command needs, built once in `main`.
pub struct AppContext<'a> {
    pub store: &'a dyn KeyValueStore,
    pub clock: &'a dyn Clock,
    pub subscription: &'a SubscriptionManager<'a>,
    pub settings: &'a Settings,
}

impl AppContext<'_> {
    fn medications(&self) -> MedicationBook<'_> {
        MedicationBook::new(self.store, self.clock)
    }

    fn visits(&self) -> VisitBook<'_> {
        VisitBook::new(self.store, self.clock)
    }
}

pub fn run(ctx: &AppContext<'_>, command: Command) -> Result<()> {
    match command {
        Command::Dashboard => run_dashboard(ctx),
        Command::Med(command) => run_medication(ctx, command),
        Command::Visit(command) => run_visit(ctx, command),
        Command::Plan(command) => run_plan(ctx, command),
        Command::Reset { yes } => run_reset(ctx, yes),
    }
}

/// Lines written to stderr for a failed command.
///
/// Rejected actions show their notice, plus a hint when storage failed.
/// Anything else shows the full error chain.
pub fn error_report(error: &Error) -> Vec<String> {
    let Some(rejected) = error.downcast_ref::<TrackerError>() else {
        return vec![format!("error: {error:#}")];
    };
    let mut lines = vec![format!("error: {}", rejected.notice())];
    if let TrackerError::Persistence(cause) = rejected
        && let Some(hint) = cause.suggestion()
    {
        lines.push(format!("hint: {hint}"));
    }
    lines
}

fn print_notice(notice: &Notice) {
    println!("{notice}");
}

fn run_dashboard(ctx: &AppContext<'_>) -> Result<()> {
    let medications = ctx.medications().list();
    let visits = ctx.visits().list();
    let dashboard = Dashboard::build(&medications, &visits, ctx.clock.today());
    debug!(
        medications = dashboard.total_medications,
        upcoming = dashboard.upcoming_count(),
        low_stock = dashboard.low_stock.len(),
        "dashboard built"
    );
    println!("{}", render_dashboard(&dashboard, &ctx.subscription.state()));
    Ok(())
}

fn run_medication(ctx: &AppContext<'_>, command: MedCommand) -> Result<()> {
    let book = ctx.medications();
    let outcome = match command {
        MedCommand::List => {
            println!("{}", render_medications(&book.list()));
            return Ok(());
        }
        MedCommand::Add(fields) => book.add(fields.apply(MedicationDraft::default()))?,
        MedCommand::Edit { id, fields } => {
            let draft = fields.apply(book.get(id)?.to_draft());
            book.update(id, draft)?
        }
        MedCommand::Remove { id } => book.delete(id)?,
        MedCommand::Take { id } => book.take(id)?,
    };
    debug!(
        id = outcome.value.id,
        name = redact_value(&outcome.value.name),
        "medication command applied"
    );
    print_notice(&outcome.notice);
    Ok(())
}

fn run_visit(ctx: &AppContext<'_>, command: VisitCommand) -> Result<()> {
    let book = ctx.visits();
    let outcome = match command {
        VisitCommand::List => {
            let visits = book.sorted();
            let refs: Vec<_> = visits.iter().collect();
            println!("{}", render_visits(&refs));
            return Ok(());
        }
        VisitCommand::Add(fields) => book.schedule(fields.apply(VisitDraft::default()))?,
        VisitCommand::Edit { id, fields } => {
            let draft = fields.apply(book.get(id)?.to_draft());
            book.update(id, draft)?
        }
        VisitCommand::Remove { id } => book.delete(id)?,
    };
    debug!(
        id = outcome.value.id,
        doctor = redact_value(&outcome.value.doctor_name),
        "visit command applied"
    );
    print_notice(&outcome.notice);
    Ok(())
}

fn run_plan(ctx: &AppContext<'_>, command: PlanCommand) -> Result<()> {
    match command {
        PlanCommand::Status => {
            println!("{}", render_plan(&ctx.subscription.state()));
        }
        PlanCommand::Upgrade => {
            println!("Processing...");
            let outcome = ctx
                .subscription
                .upgrade_after(ctx.settings.payment_delay())?;
            print_notice(&outcome.notice);
        }
        PlanCommand::Cancel { yes } => {
            if !yes {
                bail!("cancelling requires --yes");
            }
            let outcome = ctx.subscription.cancel()?;
            print_notice(&outcome.notice);
        }
    }
    Ok(())
}

fn run_reset(ctx: &AppContext<'_>, yes: bool) -> Result<()> {
    if !yes {
        bail!(
            "this deletes ALL medications and visits and cannot be undone; pass --yes to confirm"
        );
    }
    reset_user_data(ctx.store)?;
    info!("user data reset");
    println!("All medications and visits deleted.");
    Ok(())
}
