//! Integration tests for typed snapshots on the file store.

use medtrack_model::{
    DoctorVisit, Frequency, Medication, SubscriptionRecord, SubscriptionStatus,
};
use medtrack_persistence::{JsonFileStore, KeyValueStore, keys, load_or_default, save};
use tempfile::tempdir;

fn medication(id: i64, name: &str, stock: u32) -> Medication {
    Medication {
        id,
        name: name.to_string(),
        dosage: "10mg".to_string(),
        frequency: Frequency::Weekly,
        time: "08:15".to_string(),
        stock,
        notes: String::new(),
    }
}

#[test]
fn medications_round_trip() {
    let dir = tempdir().unwrap();
    let store = JsonFileStore::new(dir.path());
    let meds = vec![medication(1, "Lisinopril", 30), medication(2, "Metformin", 2)];

    save(&store, keys::MEDICATIONS, &meds).unwrap();
    let loaded: Vec<Medication> = load_or_default(&store, keys::MEDICATIONS);

    assert_eq!(loaded, meds);
}

#[test]
fn reopened_store_sees_last_snapshot() {
    let dir = tempdir().unwrap();
    save(
        &JsonFileStore::new(dir.path()),
        keys::MEDICATIONS,
        &vec![medication(1, "Lisinopril", 30)],
    )
    .unwrap();
    save(
        &JsonFileStore::new(dir.path()),
        keys::MEDICATIONS,
        &vec![medication(2, "Metformin", 2)],
    )
    .unwrap();

    let loaded: Vec<Medication> =
        load_or_default(&JsonFileStore::new(dir.path()), keys::MEDICATIONS);
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].id, 2);
}

#[test]
fn corrupt_documents_fall_back_to_defaults() {
    let dir = tempdir().unwrap();
    let store = JsonFileStore::new(dir.path());
    store.write(keys::DOCTOR_VISITS, "[{\"id\": \"oops\"").unwrap();
    store.write(keys::SUBSCRIPTION, "42").unwrap();

    let visits: Vec<DoctorVisit> = load_or_default(&store, keys::DOCTOR_VISITS);
    let subscription: SubscriptionRecord = load_or_default(&store, keys::SUBSCRIPTION);

    assert!(visits.is_empty());
    assert_eq!(subscription.start_date, None);
    assert_eq!(subscription.status, SubscriptionStatus::Trial);
}
