use crate::modules::shift_swaps::core::errors::SwapError;
use crate::modules::shift_swaps::core::swap_request::SwapRequest;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("only admins and supervisors can reject swap requests")]
    NotApprover,

    #[error("swap request not found")]
    RequestNotFound,

    #[error("swap request has already been processed")]
    AlreadyProcessed,
}

impl From<DecideError> for SwapError {
    fn from(reason: DecideError) -> Self {
        match reason {
            DecideError::NotApprover => SwapError::Forbidden(reason.to_string()),
            DecideError::RequestNotFound => SwapError::request_not_found(),
            DecideError::AlreadyProcessed => SwapError::already_processed(),
        }
    }
}

#[derive(Debug)]
pub enum Decision {
    Accepted { swap: SwapRequest },
    Rejected { reason: DecideError },
}
