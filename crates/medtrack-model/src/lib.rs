//! Record types for the MedTrack health tracker.
//!
//! Everything here is plain data: medications, doctor visits, the
//! subscription record, and the notices shown to the user after an action.
//! Field names serialize in camelCase to match the persisted layout.

pub mod enums;
pub mod error;
pub mod medication;
pub mod notice;
pub mod subscription;
pub mod visit;

pub use enums::{Frequency, SubscriptionStatus};
pub use error::{ModelError, Result};
pub use medication::{LOW_STOCK_THRESHOLD, Medication, MedicationDraft};
pub use notice::{Notice, NoticeKind};
pub use subscription::{SubscriptionRecord, TRIAL_DAYS};
pub use visit::{DoctorVisit, VisitDraft, parse_calendar_date};

/// Record identifier: the creation timestamp in epoch milliseconds.
pub type RecordId = i64;
