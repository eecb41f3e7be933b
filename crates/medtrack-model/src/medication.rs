//! Medication records.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::RecordId;
use crate::enums::Frequency;
use crate::error::{ModelError, Result};

/// Medications with fewer doses than this are flagged as low stock.
pub const LOW_STOCK_THRESHOLD: u32 = 5;

/// Dose time pre-filled on a new medication form.
pub const DEFAULT_DOSE_TIME: &str = "09:00";

/// A medication as entered on the form, before it has an id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MedicationDraft {
    pub name: String,
    pub dosage: String,
    pub frequency: Frequency,
    pub time: String,
    pub stock: u32,
    pub notes: String,
}

impl Default for MedicationDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            dosage: String::new(),
            frequency: Frequency::Daily,
            time: DEFAULT_DOSE_TIME.to_string(),
            stock: 0,
            notes: String::new(),
        }
    }
}

impl MedicationDraft {
    /// Check required fields (name, dosage) and the dose time format.
    pub fn validate(&self) -> Result<()> {
        let mut missing = Vec::new();
        if self.name.trim().is_empty() {
            missing.push("name");
        }
        if self.dosage.trim().is_empty() {
            missing.push("dosage");
        }
        if !missing.is_empty() {
            return Err(ModelError::MissingRequiredFields {
                record: "medication",
                fields: missing,
            });
        }
        validate_time(&self.time)
    }
}

/// A stored medication.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Medication {
    pub id: RecordId,
    pub name: String,
    pub dosage: String,
    pub frequency: Frequency,
    pub time: String,
    pub stock: u32,
    #[serde(default)]
    pub notes: String,
}

impl Medication {
    pub fn from_draft(id: RecordId, draft: MedicationDraft) -> Self {
        Self {
            id,
            name: draft.name,
            dosage: draft.dosage,
            frequency: draft.frequency,
            time: draft.time,
            stock: draft.stock,
            notes: draft.notes,
        }
    }

    /// The editable fields of this record, for re-validation on edit.
    pub fn to_draft(&self) -> MedicationDraft {
        MedicationDraft {
            name: self.name.clone(),
            dosage: self.dosage.clone(),
            frequency: self.frequency,
            time: self.time.clone(),
            stock: self.stock,
            notes: self.notes.clone(),
        }
    }

    pub fn is_low_stock(&self) -> bool {
        self.stock < LOW_STOCK_THRESHOLD
    }

    /// Remove one dose. Returns `false` and leaves the stock at zero when
    /// nothing is left.
    pub fn take_dose(&mut self) -> bool {
        match self.stock.checked_sub(1) {
            Some(remaining) => {
                self.stock = remaining;
                true
            }
            None => false,
        }
    }
}

/// Empty is accepted (the time field is optional); anything else must be HH:MM.
pub(crate) fn validate_time(time: &str) -> Result<()> {
    if time.is_empty() || NaiveTime::parse_from_str(time, "%H:%M").is_ok() {
        Ok(())
    } else {
        Err(ModelError::InvalidTime(time.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str, dosage: &str) -> MedicationDraft {
        MedicationDraft {
            name: name.to_string(),
            dosage: dosage.to_string(),
            ..MedicationDraft::default()
        }
    }

    #[test]
    fn default_draft_matches_form() {
        let draft = MedicationDraft::default();
        assert_eq!(draft.frequency, Frequency::Daily);
        assert_eq!(draft.time, "09:00");
        assert_eq!(draft.stock, 0);
    }

    #[test]
    fn validate_requires_name_and_dosage() {
        assert!(draft("Amoxicillin", "500mg").validate().is_ok());

        let err = draft("", "  ").validate().unwrap_err();
        assert_eq!(
            err,
            ModelError::MissingRequiredFields {
                record: "medication",
                fields: vec!["name", "dosage"],
            }
        );
        assert_eq!(err.user_message(), "Please fill in required fields");
    }

    #[test]
    fn validate_rejects_bad_time() {
        let mut d = draft("Aspirin", "100mg");
        d.time = "9am".to_string();
        assert_eq!(
            d.validate(),
            Err(ModelError::InvalidTime("9am".to_string()))
        );
        d.time = String::new();
        assert!(d.validate().is_ok());
    }

    #[test]
    fn take_dose_floors_at_zero() {
        let mut med = Medication::from_draft(1, draft("Aspirin", "100mg"));
        med.stock = 1;
        assert!(med.take_dose());
        assert_eq!(med.stock, 0);
        assert!(!med.take_dose());
        assert_eq!(med.stock, 0);
    }

    #[test]
    fn low_stock_boundary() {
        let mut med = Medication::from_draft(1, draft("Aspirin", "100mg"));
        med.stock = 5;
        assert!(!med.is_low_stock());
        med.stock = 4;
        assert!(med.is_low_stock());
    }
}
