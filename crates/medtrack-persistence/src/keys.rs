//! Storage keys for each persisted collection.

pub const SUBSCRIPTION: &str = "subscription";
pub const MEDICATIONS: &str = "medications";
pub const DOCTOR_VISITS: &str = "doctorVisits";

/// Keys cleared by a data reset. The subscription is kept.
pub const USER_DATA: [&str; 2] = [MEDICATIONS, DOCTOR_VISITS];
