//! Crate error type.
//!
//! ERROR HANDLING
//! ==============
//! Missing elements are never errors; callers see `None` and skip the step.
//! `PageError` only covers browser calls that can actually throw, and event
//! callbacks log it at `warn` rather than surfacing it to the user.

#[derive(Debug, thiserror::Error)]
pub enum PageError {
    #[error("dom operation failed: {0}")]
    Dom(String),
    #[error("storage unavailable: {0}")]
    Storage(String),
    #[error("invalid page config: {0}")]
    Config(#[from] serde_json::Error),
}
