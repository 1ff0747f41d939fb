use thiserror::Error;

/// Errors surfaced by store and registry operations. Every failing operation
/// leaves the underlying state untouched, so callers that pre-validate (the
/// UI disables its controls on bad input) may ignore the result.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum StoreError {
    #[error("Empty content")]
    EmptyContent,

    #[error("Unknown conversation: {0}")]
    UnknownConversation(i64),

    #[error("No recipients selected")]
    NoRecipients,
}

pub type Result<T> = std::result::Result<T, StoreError>;
