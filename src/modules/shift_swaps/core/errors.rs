use crate::modules::shift_swaps::adapters::outbound::roster_store::StoreError;
use thiserror::Error;

/// Errors reported by the swap use cases.
///
/// Everything except `Store` is a caller-facing outcome with a readable message. `Store` wraps
/// backend failures, including constraint violations, and aborts the enclosing transaction.
#[derive(Debug, Error)]
pub enum SwapError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    InvalidState(String),

    #[error("{0}")]
    Forbidden(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl SwapError {
    pub fn already_processed() -> Self {
        SwapError::InvalidState("swap request has already been processed".into())
    }

    pub fn request_not_found() -> Self {
        SwapError::NotFound("swap request not found".into())
    }

    pub fn schedules_gone() -> Self {
        SwapError::NotFound("related schedules no longer exist".into())
    }
}
