//! Doctor visit list: schedule, edit, cancel.

use medtrack_model::{DoctorVisit, RecordId, VisitDraft};
use medtrack_persistence::{KeyValueStore, keys, load_or_default, save};
use tracing::info;

use crate::allocate_id;
use crate::clock::Clock;
use crate::error::{Result, TrackerError};
use crate::outcome::ActionOutcome;
use crate::views;

/// Read-modify-write access to the stored visit list.
pub struct VisitBook<'a> {
    store: &'a dyn KeyValueStore,
    clock: &'a dyn Clock,
}

impl<'a> VisitBook<'a> {
    pub fn new(store: &'a dyn KeyValueStore, clock: &'a dyn Clock) -> Self {
        Self { store, clock }
    }

    /// Visits in stored order.
    pub fn list(&self) -> Vec<DoctorVisit> {
        load_or_default(self.store, keys::DOCTOR_VISITS)
    }

    /// Every visit, past ones included, earliest first.
    pub fn sorted(&self) -> Vec<DoctorVisit> {
        let visits = self.list();
        views::sorted_visits(&visits).into_iter().cloned().collect()
    }

    pub fn get(&self, id: RecordId) -> Result<DoctorVisit> {
        self.list()
            .into_iter()
            .find(|v| v.id == id)
            .ok_or(TrackerError::VisitNotFound(id))
    }

    fn persist(&self, visits: &[DoctorVisit]) -> Result<()> {
        save(self.store, keys::DOCTOR_VISITS, visits)?;
        Ok(())
    }

    pub fn schedule(&self, draft: VisitDraft) -> Result<ActionOutcome<DoctorVisit>> {
        draft.validate()?;
        let mut visits = self.list();
        let id = allocate_id(self.clock.now_millis(), |id| visits.iter().any(|v| v.id == id));
        let visit = DoctorVisit::from_draft(id, draft);
        visits.push(visit.clone());
        self.persist(&visits)?;
        info!(id, total = visits.len(), "visit scheduled");
        Ok(ActionOutcome::new(visit, "Visit scheduled successfully"))
    }

    pub fn update(&self, id: RecordId, draft: VisitDraft) -> Result<ActionOutcome<DoctorVisit>> {
        draft.validate()?;
        let mut visits = self.list();
        let slot = visits
            .iter_mut()
            .find(|v| v.id == id)
            .ok_or(TrackerError::VisitNotFound(id))?;
        *slot = DoctorVisit::from_draft(id, draft);
        let updated = slot.clone();
        self.persist(&visits)?;
        info!(id, "visit updated");
        Ok(ActionOutcome::new(updated, "Visit updated successfully"))
    }

    pub fn delete(&self, id: RecordId) -> Result<ActionOutcome<DoctorVisit>> {
        let mut visits = self.list();
        let index = visits
            .iter()
            .position(|v| v.id == id)
            .ok_or(TrackerError::VisitNotFound(id))?;
        let removed = visits.remove(index);
        self.persist(&visits)?;
        info!(id, total = visits.len(), "visit cancelled");
        Ok(ActionOutcome::new(removed, "Visit cancelled"))
    }
}
