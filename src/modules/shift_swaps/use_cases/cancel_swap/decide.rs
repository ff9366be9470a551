use crate::modules::shift_swaps::core::swap_request::SwapRequest;
use crate::modules::shift_swaps::use_cases::cancel_swap::command::CancelSwap;
use crate::modules::shift_swaps::use_cases::cancel_swap::decision::{DecideError, Decision};

pub fn decide_cancel(command: &CancelSwap, swap: Option<SwapRequest>) -> Decision {
    let reason = match swap {
        None => DecideError::RequestNotFound,
        Some(swap) if swap.requester_id != command.caller.id => DecideError::NotRequester,
        Some(swap) if swap.status.is_terminal() => DecideError::AlreadyProcessed,
        Some(swap) => return Decision::Accepted { swap },
    };
    Decision::Rejected { reason }
}
