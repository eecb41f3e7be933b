//! Rendering of dashboard and plan output.

use chrono::{Duration, NaiveDate};
use medtrack_cli::summary::{render_dashboard, render_medications, render_plan, subscription_banner};
use medtrack_core::{Dashboard, FixedClock, SubscriptionManager};
use medtrack_model::{DoctorVisit, Frequency, Medication, VisitDraft};
use medtrack_persistence::MemoryStore;

fn med(id: i64, name: &str, stock: u32) -> Medication {
    Medication {
        id,
        name: name.to_string(),
        dosage: "5mg".to_string(),
        frequency: Frequency::Daily,
        time: "09:00".to_string(),
        stock,
        notes: String::new(),
    }
}

fn visit(id: i64, doctor: &str, date: &str) -> DoctorVisit {
    DoctorVisit::from_draft(
        id,
        VisitDraft {
            doctor_name: doctor.to_string(),
            date: date.to_string(),
            ..VisitDraft::default()
        },
    )
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
}

#[test]
fn empty_dashboard_messages() {
    let store = MemoryStore::new();
    let clock = FixedClock::at_date(today());
    let subscription = SubscriptionManager::new(&store, &clock);
    let state = subscription.ensure_initialized().unwrap();

    let dashboard = Dashboard::build(&[], &[], today());
    let out = render_dashboard(&dashboard, &state);

    assert!(out.contains("Free Trial · 7 days left"));
    assert!(out.contains("Everything looks good!"));
    assert!(out.contains("No upcoming visits scheduled."));
}

#[test]
fn dashboard_lists_alerts_and_visits() {
    let store = MemoryStore::new();
    let clock = FixedClock::at_date(today());
    let subscription = SubscriptionManager::new(&store, &clock);
    subscription.ensure_initialized().unwrap();
    let state = subscription.upgrade().unwrap().value;

    let meds = vec![med(1, "Metformin", 2), med(2, "Lisinopril", 40)];
    let visits = vec![visit(3, "Dr. Rivera", "2024-01-05")];
    let dashboard = Dashboard::build(&meds, &visits, today());
    let out = render_dashboard(&dashboard, &state);

    assert!(out.contains("Premium Plan · Active"));
    assert!(out.contains("Metformin"));
    assert!(!out.contains("Lisinopril"));
    assert!(out.contains("Dr. Rivera"));
    assert!(out.contains("No location set"));
}

#[test]
fn banner_counts_down() {
    let store = MemoryStore::new();
    let clock = FixedClock::at_date(today());
    let subscription = SubscriptionManager::new(&store, &clock);
    subscription.ensure_initialized().unwrap();

    clock.advance(Duration::days(5));
    assert!(subscription_banner(&subscription.state()).contains("2 days left"));

    subscription.upgrade().unwrap();
    clock.advance(Duration::days(5));
    let cancelled = subscription.cancel().unwrap().value;
    assert_eq!(cancelled.days_left, 2);
    assert!(subscription_banner(&cancelled).starts_with("Free Trial"));
    assert!(render_plan(&cancelled).contains("Status: cancelled"));
}

#[test]
fn medication_list_empty_state() {
    assert_eq!(render_medications(&[]), "No medications added yet.");
    let out = render_medications(&[med(1, "Aspirin", 12)]);
    assert!(out.contains("12 pills left"));
}
