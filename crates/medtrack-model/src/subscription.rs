//! The persisted subscription record.

use serde::{Deserialize, Serialize};

use crate::enums::SubscriptionStatus;

/// Length of the trial window.
pub const TRIAL_DAYS: i64 = 7;

/// `startDate` is epoch milliseconds, `null` until the first startup
/// initializes it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionRecord {
    #[serde(default)]
    pub start_date: Option<i64>,
    #[serde(default)]
    pub status: SubscriptionStatus,
}

impl SubscriptionRecord {
    pub fn is_premium(&self) -> bool {
        self.status == SubscriptionStatus::Premium
    }
}
