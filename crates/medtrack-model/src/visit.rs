//! Doctor visit records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::RecordId;
use crate::error::{ModelError, Result};
use crate::medication::validate_time;

/// Shown in place of an empty location.
pub const NO_LOCATION_LABEL: &str = "No location set";
/// Shown in place of an empty reason.
pub const DEFAULT_REASON_LABEL: &str = "Routine Checkup";

/// A visit as entered on the form, before it has an id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VisitDraft {
    pub doctor_name: String,
    pub specialty: String,
    pub location: String,
    pub date: String,
    pub time: String,
    pub reason: String,
    pub notes: String,
}

impl VisitDraft {
    /// Doctor name and date are required; the date must be a real
    /// calendar day and the time, when given, HH:MM.
    pub fn validate(&self) -> Result<()> {
        let mut missing = Vec::new();
        if self.doctor_name.trim().is_empty() {
            missing.push("doctorName");
        }
        if self.date.trim().is_empty() {
            missing.push("date");
        }
        if !missing.is_empty() {
            return Err(ModelError::MissingRequiredFields {
                record: "visit",
                fields: missing,
            });
        }
        if parse_calendar_date(&self.date).is_none() {
            return Err(ModelError::InvalidDate(self.date.clone()));
        }
        validate_time(&self.time)
    }
}

/// A stored doctor visit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DoctorVisit {
    pub id: RecordId,
    pub doctor_name: String,
    #[serde(default)]
    pub specialty: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub reason: String,
    #[serde(default)]
    pub notes: String,
}

impl DoctorVisit {
    pub fn from_draft(id: RecordId, draft: VisitDraft) -> Self {
        Self {
            id,
            doctor_name: draft.doctor_name,
            specialty: draft.specialty,
            location: draft.location,
            date: draft.date,
            time: draft.time,
            reason: draft.reason,
            notes: draft.notes,
        }
    }

    pub fn to_draft(&self) -> VisitDraft {
        VisitDraft {
            doctor_name: self.doctor_name.clone(),
            specialty: self.specialty.clone(),
            location: self.location.clone(),
            date: self.date.clone(),
            time: self.time.clone(),
            reason: self.reason.clone(),
            notes: self.notes.clone(),
        }
    }

    /// The visit day, or `None` when the date is empty or malformed.
    pub fn calendar_date(&self) -> Option<NaiveDate> {
        parse_calendar_date(&self.date)
    }

    pub fn location_label(&self) -> &str {
        if self.location.is_empty() {
            NO_LOCATION_LABEL
        } else {
            &self.location
        }
    }

    pub fn reason_label(&self) -> &str {
        if self.reason.is_empty() {
            DEFAULT_REASON_LABEL
        } else {
            &self.reason
        }
    }
}

/// Build a calendar date from the year, month and day components of a
/// `YYYY-MM-DD` string. No time zone is involved, so the day never shifts.
pub fn parse_calendar_date(value: &str) -> Option<NaiveDate> {
    let mut parts = value.trim().split('-');
    let year = parts.next()?.parse::<i32>().ok()?;
    let month = parts.next()?.parse::<u32>().ok()?;
    let day = parts.next()?.parse::<u32>().ok()?;
    if parts.next().is_some() {
        return None;
    }
    NaiveDate::from_ymd_opt(year, month, day)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_calendar_date_components() {
        assert_eq!(
            parse_calendar_date("2024-01-05"),
            NaiveDate::from_ymd_opt(2024, 1, 5)
        );
        assert_eq!(parse_calendar_date(""), None);
        assert_eq!(parse_calendar_date("2024-02-30"), None);
        assert_eq!(parse_calendar_date("2024-01-05T10:00:00Z"), None);
        assert_eq!(parse_calendar_date("2024-01"), None);
    }

    #[test]
    fn validate_requires_doctor_and_date() {
        let draft = VisitDraft::default();
        assert_eq!(
            draft.validate(),
            Err(ModelError::MissingRequiredFields {
                record: "visit",
                fields: vec!["doctorName", "date"],
            })
        );

        let draft = VisitDraft {
            doctor_name: "Dr. Smith".to_string(),
            date: "next tuesday".to_string(),
            ..VisitDraft::default()
        };
        assert_eq!(
            draft.validate(),
            Err(ModelError::InvalidDate("next tuesday".to_string()))
        );
    }

    #[test]
    fn display_fallbacks() {
        let visit = DoctorVisit::from_draft(
            7,
            VisitDraft {
                doctor_name: "Dr. Smith".to_string(),
                date: "2024-01-05".to_string(),
                ..VisitDraft::default()
            },
        );
        assert_eq!(visit.location_label(), "No location set");
        assert_eq!(visit.reason_label(), "Routine Checkup");
    }
}
