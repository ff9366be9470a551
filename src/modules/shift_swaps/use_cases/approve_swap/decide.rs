use crate::modules::shift_swaps::core::schedule::ScheduleEntry;
use crate::modules::shift_swaps::core::swap_request::{SwapRequest, SwapStatus};
use crate::modules::shift_swaps::use_cases::approve_swap::command::ApproveSwap;
use crate::modules::shift_swaps::use_cases::approve_swap::decision::{DecideError, Decision};

pub fn decide_approve(
    command: &ApproveSwap,
    swap: Option<SwapRequest>,
    requester_entry: Option<ScheduleEntry>,
    target_entry: Option<ScheduleEntry>,
) -> Decision {
    let reason = if !command.approver.role.is_approver() {
        DecideError::NotApprover
    } else {
        match (swap, requester_entry, target_entry) {
            (None, _, _) => DecideError::RequestNotFound,
            (Some(swap), _, _) if swap.status != SwapStatus::Pending => {
                DecideError::AlreadyProcessed
            }
            (Some(swap), _, _) if swap.requester_id == swap.target_id => DecideError::SelfSwap,
            (Some(swap), Some(requester_entry), Some(target_entry))
                if requester_entry.employee_id == swap.requester_id
                    && target_entry.employee_id == swap.target_id =>
            {
                return Decision::Accepted {
                    swap,
                    requester_entry,
                    target_entry,
                };
            }
            _ => DecideError::SchedulesGone,
        }
    };
    Decision::Rejected { reason }
}
