use crate::modules::shift_swaps::core::swap_request::SwapRequest;
use crate::modules::shift_swaps::use_cases::reject_swap::command::RejectSwap;
use crate::modules::shift_swaps::use_cases::reject_swap::decision::{DecideError, Decision};

/// Only pending requests can be rejected, the same guard approval applies.
pub fn decide_reject(command: &RejectSwap, swap: Option<SwapRequest>) -> Decision {
    if !command.approver.role.is_approver() {
        return Decision::Rejected {
            reason: DecideError::NotApprover,
        };
    }
    match swap {
        None => Decision::Rejected {
            reason: DecideError::RequestNotFound,
        },
        Some(swap) if swap.status.is_terminal() => Decision::Rejected {
            reason: DecideError::AlreadyProcessed,
        },
        Some(swap) => Decision::Accepted { swap },
    }
}

#[cfg(test)]
mod reject_swap_decide_tests {
    use super::*;
    use crate::modules::shift_swaps::core::swap_request::SwapStatus;
    use crate::shared::core::primitives::{Caller, Role};
    use crate::tests::fixtures::commands::reject_as_supervisor;
    use crate::tests::fixtures::roster::{A_SCHEDULE, B_SCHEDULE, EMPLOYEE_A, EMPLOYEE_B, at};
    use rstest::{fixture, rstest};

    #[fixture]
    fn pending() -> SwapRequest {
        SwapRequest {
            id: 1,
            requester_id: EMPLOYEE_A,
            requester_schedule_id: A_SCHEDULE,
            target_id: EMPLOYEE_B,
            target_schedule_id: B_SCHEDULE,
            reason: String::new(),
            status: SwapStatus::Pending,
            approved_by: None,
            approved_at: None,
            created_at: at(0),
        }
    }

    fn reason_of(decision: Decision) -> Option<DecideError> {
        match decision {
            Decision::Accepted { .. } => None,
            Decision::Rejected { reason } => Some(reason),
        }
    }

    #[rstest]
    fn it_should_accept_a_pending_request(pending: SwapRequest) {
        let decision = decide_reject(&reject_as_supervisor(1, 0), Some(pending));
        assert_eq!(reason_of(decision), None);
    }

    #[rstest]
    fn it_should_refuse_staff_even_on_their_own_request(pending: SwapRequest) {
        let mut command = reject_as_supervisor(1, 0);
        command.approver = Caller::new(EMPLOYEE_A, Role::Staff);
        let decision = decide_reject(&command, Some(pending));
        assert_eq!(reason_of(decision), Some(DecideError::NotApprover));
    }

    #[rstest]
    fn it_should_refuse_a_missing_request() {
        let decision = decide_reject(&reject_as_supervisor(1, 0), None);
        assert_eq!(reason_of(decision), Some(DecideError::RequestNotFound));
    }

    #[rstest]
    #[case(SwapStatus::Approved)]
    #[case(SwapStatus::Rejected)]
    #[case(SwapStatus::Cancelled)]
    fn it_should_refuse_a_processed_request(mut pending: SwapRequest, #[case] status: SwapStatus) {
        pending.status = status;
        let decision = decide_reject(&reject_as_supervisor(1, 0), Some(pending));
        assert_eq!(reason_of(decision), Some(DecideError::AlreadyProcessed));
    }
}
