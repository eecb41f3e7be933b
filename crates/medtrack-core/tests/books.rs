//! Integration tests for the record books and data reset on a file store.

use std::cell::Cell;

use chrono::NaiveDate;
use medtrack_core::{
    Clock, Dashboard, MedicationBook, SubscriptionManager, TrackerError, VisitBook,
    reset_user_data,
};
use medtrack_model::{Frequency, MedicationDraft, ModelError, SubscriptionStatus, VisitDraft};
use medtrack_persistence::JsonFileStore;
use tempfile::tempdir;

/// Clock pinned to 2024-01-01 that tests step forward by hand.
struct TestClock {
    millis: Cell<i64>,
}

impl TestClock {
    fn advance(&self, by: chrono::Duration) {
        self.millis.set(self.millis.get() + by.num_milliseconds());
    }
}

impl Clock for TestClock {
    fn now_millis(&self) -> i64 {
        self.millis.get()
    }

    fn today(&self) -> NaiveDate {
        chrono::DateTime::<chrono::Utc>::from_timestamp_millis(self.millis.get())
            .unwrap()
            .date_naive()
    }
}

fn clock() -> TestClock {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    TestClock {
        millis: Cell::new(start.and_time(chrono::NaiveTime::MIN).and_utc().timestamp_millis()),
    }
}

fn med_draft(name: &str, stock: u32) -> MedicationDraft {
    MedicationDraft {
        name: name.to_string(),
        dosage: "500mg".to_string(),
        frequency: Frequency::TwiceDaily,
        stock,
        ..MedicationDraft::default()
    }
}

fn visit_draft(doctor: &str, date: &str) -> VisitDraft {
    VisitDraft {
        doctor_name: doctor.to_string(),
        date: date.to_string(),
        ..VisitDraft::default()
    }
}

#[test]
fn take_until_out_of_stock() {
    let dir = tempdir().unwrap();
    let store = JsonFileStore::new(dir.path());
    let clock = clock();
    let book = MedicationBook::new(&store, &clock);

    let added = book.add(med_draft("Amoxicillin", 1)).unwrap();
    let id = added.value.id;
    assert_eq!(id, clock.now_millis());

    let taken = book.take(id).unwrap();
    assert_eq!(taken.value.stock, 0);
    assert!(taken.notice.is_success());
    assert_eq!(
        taken.notice.message,
        "Took Amoxicillin. Stock remaining: 0"
    );

    let err = book.take(id).unwrap_err();
    assert!(matches!(err, TrackerError::OutOfStock { .. }));
    assert_eq!(err.notice().message, "Out of stock!");
    assert_eq!(book.get(id).unwrap().stock, 0);
}

#[test]
fn invalid_drafts_are_not_saved() {
    let dir = tempdir().unwrap();
    let store = JsonFileStore::new(dir.path());
    let clock = clock();
    let meds = MedicationBook::new(&store, &clock);
    let visits = VisitBook::new(&store, &clock);

    let err = meds.add(med_draft("", 3)).unwrap_err();
    assert!(matches!(
        err,
        TrackerError::Validation(ModelError::MissingRequiredFields { .. })
    ));
    assert_eq!(err.user_message(), "Please fill in required fields");
    assert!(meds.list().is_empty());

    assert!(visits.schedule(visit_draft("Dr. Smith", "")).is_err());
    assert!(visits.list().is_empty());
}

#[test]
fn ids_stay_unique_within_one_instant() {
    let dir = tempdir().unwrap();
    let store = JsonFileStore::new(dir.path());
    let clock = clock();
    let book = MedicationBook::new(&store, &clock);

    let first = book.add(med_draft("A", 1)).unwrap().value.id;
    let second = book.add(med_draft("B", 1)).unwrap().value.id;
    assert_ne!(first, second);
}

#[test]
fn edit_and_delete_medication() {
    let dir = tempdir().unwrap();
    let store = JsonFileStore::new(dir.path());
    let clock = clock();
    let book = MedicationBook::new(&store, &clock);
    let id = book.add(med_draft("Aspirin", 20)).unwrap().value.id;

    let mut draft = book.get(id).unwrap().to_draft();
    draft.dosage = "81mg".to_string();
    let updated = book.update(id, draft).unwrap();
    assert_eq!(updated.value.dosage, "81mg");
    assert_eq!(updated.notice.message, "Medication updated successfully");

    let removed = book.delete(id).unwrap();
    assert_eq!(removed.notice.message, "Medication removed");
    assert!(matches!(
        book.delete(id),
        Err(TrackerError::MedicationNotFound(_))
    ));
}

#[test]
fn visits_sorted_and_dashboard() {
    let dir = tempdir().unwrap();
    let store = JsonFileStore::new(dir.path());
    let clock = clock();
    let visits = VisitBook::new(&store, &clock);
    let meds = MedicationBook::new(&store, &clock);

    visits.schedule(visit_draft("Dr. Late", "2024-01-10")).unwrap();
    clock.advance(chrono::Duration::milliseconds(1));
    visits.schedule(visit_draft("Dr. Early", "2024-01-05")).unwrap();
    clock.advance(chrono::Duration::milliseconds(1));
    visits.schedule(visit_draft("Dr. Past", "2023-01-01")).unwrap();
    meds.add(med_draft("Low", 2)).unwrap();

    let sorted: Vec<String> = visits.sorted().into_iter().map(|v| v.date).collect();
    assert_eq!(sorted, vec!["2023-01-01", "2024-01-05", "2024-01-10"]);

    let all_meds = meds.list();
    let all_visits = visits.list();
    let dashboard = Dashboard::build(&all_meds, &all_visits, clock.today());
    assert_eq!(dashboard.total_medications, 1);
    assert_eq!(dashboard.upcoming_count(), 2);
    assert_eq!(dashboard.upcoming_visits[0].doctor_name, "Dr. Early");
    assert_eq!(dashboard.low_stock.len(), 1);
}

#[test]
fn reset_keeps_subscription() {
    let dir = tempdir().unwrap();
    let store = JsonFileStore::new(dir.path());
    let clock = clock();
    let subscription = SubscriptionManager::new(&store, &clock);
    subscription.ensure_initialized().unwrap();
    subscription.upgrade().unwrap();
    MedicationBook::new(&store, &clock)
        .add(med_draft("Aspirin", 20))
        .unwrap();
    VisitBook::new(&store, &clock)
        .schedule(visit_draft("Dr. Smith", "2024-02-01"))
        .unwrap();

    reset_user_data(&store).unwrap();

    assert!(MedicationBook::new(&store, &clock).list().is_empty());
    assert!(VisitBook::new(&store, &clock).list().is_empty());
    assert_eq!(subscription.state().status, SubscriptionStatus::Premium);
}
