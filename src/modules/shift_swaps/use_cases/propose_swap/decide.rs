use crate::modules::shift_swaps::core::schedule::ScheduleEntry;
use crate::modules::shift_swaps::core::swap_request::NewSwapRequest;
use crate::modules::shift_swaps::use_cases::propose_swap::command::ProposeSwap;
use crate::modules::shift_swaps::use_cases::propose_swap::decision::{DecideError, Decision};

/// `requester_entry` and `target_entry` are the rows found under the two schedule ids, if any.
/// A row owned by someone other than the claimed party counts as not found.
pub fn decide_propose(
    command: ProposeSwap,
    requester_entry: Option<&ScheduleEntry>,
    target_entry: Option<&ScheduleEntry>,
) -> Decision {
    let identifiers = [
        command.requester_id,
        command.target_id,
        command.requester_schedule_id,
        command.target_schedule_id,
    ];
    if identifiers.iter().any(|id| *id <= 0) {
        return Decision::Rejected {
            reason: DecideError::InvalidIdentifier,
        };
    }
    if command.requester_id == command.target_id {
        return Decision::Rejected {
            reason: DecideError::SelfSwap,
        };
    }
    if !requester_entry.is_some_and(|e| e.employee_id == command.requester_id) {
        return Decision::Rejected {
            reason: DecideError::RequesterScheduleNotFound,
        };
    }
    if !target_entry.is_some_and(|e| e.employee_id == command.target_id) {
        return Decision::Rejected {
            reason: DecideError::TargetScheduleNotFound,
        };
    }

    Decision::Accepted {
        request: NewSwapRequest {
            requester_id: command.requester_id,
            requester_schedule_id: command.requester_schedule_id,
            target_id: command.target_id,
            target_schedule_id: command.target_schedule_id,
            reason: command.reason.trim().to_string(),
            created_at: command.created_at,
        },
    }
}
