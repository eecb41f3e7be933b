use medtrack_model::Notice;

/// Result of a successful action: the affected value and the notice to show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionOutcome<T> {
    pub value: T,
    pub notice: Notice,
}

impl<T> ActionOutcome<T> {
    pub fn new(value: T, message: impl Into<String>) -> Self {
        Self {
            value,
            notice: Notice::success(message),
        }
    }
}
