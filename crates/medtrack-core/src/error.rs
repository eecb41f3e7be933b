use medtrack_model::{ModelError, Notice, RecordId, SubscriptionStatus};
use medtrack_persistence::PersistenceError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("validation failed: {0}")]
    Validation(#[from] ModelError),
    #[error("medication {id} is out of stock")]
    OutOfStock { id: RecordId, name: String },
    #[error("no medication with id {0}")]
    MedicationNotFound(RecordId),
    #[error("no visit with id {0}")]
    VisitNotFound(RecordId),
    #[error("cannot cancel a {0} subscription")]
    NotPremium(SubscriptionStatus),
    #[error(transparent)]
    Persistence(#[from] PersistenceError),
}

impl TrackerError {
    /// Message shown to the user when the action is rejected.
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation(e) => e.user_message(),
            Self::OutOfStock { .. } => "Out of stock!".to_string(),
            Self::MedicationNotFound(id) => format!("No medication found with id {id}"),
            Self::VisitNotFound(id) => format!("No visit found with id {id}"),
            Self::NotPremium(_) => "Only a premium plan can be cancelled".to_string(),
            Self::Persistence(e) => e.user_message(),
        }
    }

    /// Failure notice printed by the CLI for a rejected action.
    pub fn notice(&self) -> Notice {
        Notice::error(self.user_message())
    }
}

pub type Result<T> = std::result::Result<T, TrackerError>;
