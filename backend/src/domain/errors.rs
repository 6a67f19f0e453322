//! Error taxonomy for goal store operations.
//!
//! Every failure leaves the store unchanged and is recoverable by the
//! calling layer:
//! - `Validation` — input failed a field constraint; the caller re-prompts.
//! - `NotFound` — the referenced id no longer exists; the caller should
//!   refresh its view.
//! - `InvalidTransition` — the requested lifecycle move is not legal from
//!   the goal's current stage; the caller should refresh state rather than
//!   retry.
//! - `Storage` — the repository itself failed.

use crate::domain::models::goal::GoalValidationError;

#[derive(Debug, thiserror::Error)]
pub enum GoalError {
    #[error(transparent)]
    Validation(#[from] GoalValidationError),

    #[error("No goal found with id {id}")]
    NotFound { id: String },

    #[error("Cannot {action} goal {id}: it is {actual}, but {action} requires a {expected} goal")]
    InvalidTransition {
        id: String,
        action: &'static str,
        expected: &'static str,
        actual: &'static str,
    },

    #[error("Goal storage error: {0}")]
    Storage(#[from] anyhow::Error),
}
