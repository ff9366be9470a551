use crate::modules::shift_swaps::core::errors::SwapError;
use crate::modules::shift_swaps::core::schedule::ScheduleEntry;
use crate::modules::shift_swaps::core::swap_request::SwapRequest;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("only admins and supervisors can approve swap requests")]
    NotApprover,

    #[error("swap request not found")]
    RequestNotFound,

    #[error("swap request has already been processed")]
    AlreadyProcessed,

    #[error("related schedules no longer exist")]
    SchedulesGone,

    #[error("cannot swap a shift with yourself")]
    SelfSwap,
}

impl From<DecideError> for SwapError {
    fn from(reason: DecideError) -> Self {
        match reason {
            DecideError::NotApprover => SwapError::Forbidden(reason.to_string()),
            DecideError::RequestNotFound => SwapError::request_not_found(),
            DecideError::AlreadyProcessed => SwapError::already_processed(),
            DecideError::SchedulesGone => SwapError::schedules_gone(),
            DecideError::SelfSwap => SwapError::Validation(reason.to_string()),
        }
    }
}

/// On acceptance the request is pending and both entries still belong to their parties.
#[derive(Debug)]
pub enum Decision {
    Accepted {
        swap: SwapRequest,
        requester_entry: ScheduleEntry,
        target_entry: ScheduleEntry,
    },
    Rejected {
        reason: DecideError,
    },
}
