//! Enumerations stored as strings in the persisted records.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// How often a medication is taken.
///
/// Serialized with its display label, so `TwiceDaily` is stored as
/// `"Twice Daily"`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Frequency {
    #[default]
    Daily,
    #[serde(rename = "Twice Daily")]
    TwiceDaily,
    Weekly,
    #[serde(rename = "As Needed")]
    AsNeeded,
}

impl Frequency {
    /// Returns the label as it is displayed and stored.
    pub fn as_str(&self) -> &'static str {
        match self {
            Frequency::Daily => "Daily",
            Frequency::TwiceDaily => "Twice Daily",
            Frequency::Weekly => "Weekly",
            Frequency::AsNeeded => "As Needed",
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Frequency {
    type Err = ModelError;

    /// Case-insensitive; spaces, dashes and underscores are interchangeable.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .collect::<String>()
            .to_uppercase();

        match normalized.as_str() {
            "DAILY" => Ok(Frequency::Daily),
            "TWICEDAILY" => Ok(Frequency::TwiceDaily),
            "WEEKLY" => Ok(Frequency::Weekly),
            "ASNEEDED" => Ok(Frequency::AsNeeded),
            _ => Err(ModelError::UnknownVariant {
                kind: "frequency",
                value: s.to_string(),
            }),
        }
    }
}

/// Subscription status. Only `Premium` changes what the UI shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionStatus {
    #[default]
    Trial,
    Premium,
    Cancelled,
}

impl SubscriptionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubscriptionStatus::Trial => "trial",
            SubscriptionStatus::Premium => "premium",
            SubscriptionStatus::Cancelled => "cancelled",
        }
    }

    /// Plan name shown on the settings screen.
    pub fn plan_label(&self) -> &'static str {
        match self {
            SubscriptionStatus::Premium => "Premium Plan",
            SubscriptionStatus::Trial | SubscriptionStatus::Cancelled => "Free Plan",
        }
    }
}

impl fmt::Display for SubscriptionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
