use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("{record} is missing required fields: {}", .fields.join(", "))]
    MissingRequiredFields {
        record: &'static str,
        fields: Vec<&'static str>,
    },
    #[error("invalid time '{0}', expected HH:MM")]
    InvalidTime(String),
    #[error("invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),
    #[error("unknown {kind} '{value}'")]
    UnknownVariant { kind: &'static str, value: String },
}

impl ModelError {
    /// Message shown to the user when a form is rejected.
    pub fn user_message(&self) -> String {
        match self {
            Self::MissingRequiredFields { .. } => "Please fill in required fields".to_string(),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ModelError>;
