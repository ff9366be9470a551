use crate::modules::shift_swaps::core::errors::SwapError;
use crate::modules::shift_swaps::core::swap_request::NewSwapRequest;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("employee and schedule identifiers must be positive")]
    InvalidIdentifier,

    #[error("cannot swap a shift with yourself")]
    SelfSwap,

    #[error("your schedule was not found")]
    RequesterScheduleNotFound,

    #[error("target schedule was not found")]
    TargetScheduleNotFound,
}

impl From<DecideError> for SwapError {
    fn from(reason: DecideError) -> Self {
        match reason {
            DecideError::InvalidIdentifier | DecideError::SelfSwap => {
                SwapError::Validation(reason.to_string())
            }
            DecideError::RequesterScheduleNotFound | DecideError::TargetScheduleNotFound => {
                SwapError::NotFound(reason.to_string())
            }
        }
    }
}

#[derive(Debug)]
pub enum Decision {
    Accepted { request: NewSwapRequest },
    Rejected { reason: DecideError },
}
