//! Medication list: add, edit, remove, take.

use medtrack_model::{Medication, MedicationDraft, RecordId};
use medtrack_persistence::{KeyValueStore, keys, load_or_default, save};
use tracing::{info, warn};

use crate::allocate_id;
use crate::clock::Clock;
use crate::error::{Result, TrackerError};
use crate::outcome::ActionOutcome;

/// Read-modify-write access to the stored medication list.
pub struct MedicationBook<'a> {
    store: &'a dyn KeyValueStore,
    clock: &'a dyn Clock,
}

impl<'a> MedicationBook<'a> {
    pub fn new(store: &'a dyn KeyValueStore, clock: &'a dyn Clock) -> Self {
        Self { store, clock }
    }

    pub fn list(&self) -> Vec<Medication> {
        load_or_default(self.store, keys::MEDICATIONS)
    }

    pub fn get(&self, id: RecordId) -> Result<Medication> {
        self.list()
            .into_iter()
            .find(|m| m.id == id)
            .ok_or(TrackerError::MedicationNotFound(id))
    }

    fn persist(&self, medications: &[Medication]) -> Result<()> {
        save(self.store, keys::MEDICATIONS, medications)?;
        Ok(())
    }

    pub fn add(&self, draft: MedicationDraft) -> Result<ActionOutcome<Medication>> {
        draft.validate()?;
        let mut medications = self.list();
        let id = allocate_id(self.clock.now_millis(), |id| {
            medications.iter().any(|m| m.id == id)
        });
        let medication = Medication::from_draft(id, draft);
        medications.push(medication.clone());
        self.persist(&medications)?;
        info!(id, total = medications.len(), "medication added");
        Ok(ActionOutcome::new(medication, "Medication added successfully"))
    }

    /// Replace every editable field of medication `id`.
    pub fn update(&self, id: RecordId, draft: MedicationDraft) -> Result<ActionOutcome<Medication>> {
        draft.validate()?;
        let mut medications = self.list();
        let slot = medications
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or(TrackerError::MedicationNotFound(id))?;
        *slot = Medication::from_draft(id, draft);
        let updated = slot.clone();
        self.persist(&medications)?;
        info!(id, "medication updated");
        Ok(ActionOutcome::new(updated, "Medication updated successfully"))
    }

    pub fn delete(&self, id: RecordId) -> Result<ActionOutcome<Medication>> {
        let mut medications = self.list();
        let index = medications
            .iter()
            .position(|m| m.id == id)
            .ok_or(TrackerError::MedicationNotFound(id))?;
        let removed = medications.remove(index);
        self.persist(&medications)?;
        info!(id, total = medications.len(), "medication removed");
        Ok(ActionOutcome::new(removed, "Medication removed"))
    }

    /// Record one dose taken. Rejected without any write when the stock is
    /// already zero.
    pub fn take(&self, id: RecordId) -> Result<ActionOutcome<Medication>> {
        let mut medications = self.list();
        let medication = medications
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or(TrackerError::MedicationNotFound(id))?;
        if !medication.take_dose() {
            warn!(id, "dose rejected, out of stock");
            return Err(TrackerError::OutOfStock {
                id,
                name: medication.name.clone(),
            });
        }
        let taken = medication.clone();
        self.persist(&medications)?;
        info!(id, stock = taken.stock, "dose taken");
        let message = format!("Took {}. Stock remaining: {}", taken.name, taken.stock);
        Ok(ActionOutcome::new(taken, message))
    }
}
