// Shared command fixtures.
// The default proposal is read from `json/propose_swap.json`: employee 10 offers schedule 501
// to employee 20 for schedule 502.

use crate::modules::shift_swaps::use_cases::approve_swap::command::ApproveSwap;
use crate::modules::shift_swaps::use_cases::cancel_swap::command::CancelSwap;
use crate::modules::shift_swaps::use_cases::propose_swap::command::ProposeSwap;
use crate::modules::shift_swaps::use_cases::reject_swap::command::RejectSwap;
use crate::shared::core::primitives::{Caller, EmployeeId, Role, ScheduleId, SwapRequestId};
use crate::tests::fixtures::roster::{SUPERVISOR, at};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::fs;

#[derive(Debug, Clone, Deserialize)]
pub struct ProposeSwapDto {
    pub requester_id: EmployeeId,
    pub target_id: EmployeeId,
    pub requester_schedule_id: ScheduleId,
    pub target_schedule_id: ScheduleId,
    pub reason: String,
}

pub struct ProposeSwapBuilder {
    inner: ProposeSwap,
}

impl Default for ProposeSwapBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl ProposeSwapBuilder {
    pub fn new() -> Self {
        let json_str = fs::read_to_string("./src/tests/fixtures/json/propose_swap.json").unwrap();
        let dto: ProposeSwapDto = serde_json::from_str(&json_str).unwrap();

        Self {
            inner: ProposeSwap {
                requester_id: dto.requester_id,
                target_id: dto.target_id,
                requester_schedule_id: dto.requester_schedule_id,
                target_schedule_id: dto.target_schedule_id,
                reason: dto.reason,
                created_at: at(1_000),
            },
        }
    }

    pub fn requester_id(mut self, v: EmployeeId) -> Self {
        self.inner.requester_id = v;
        self
    }

    pub fn target_id(mut self, v: EmployeeId) -> Self {
        self.inner.target_id = v;
        self
    }

    pub fn requester_schedule_id(mut self, v: ScheduleId) -> Self {
        self.inner.requester_schedule_id = v;
        self
    }

    pub fn target_schedule_id(mut self, v: ScheduleId) -> Self {
        self.inner.target_schedule_id = v;
        self
    }

    pub fn reason(mut self, v: impl Into<String>) -> Self {
        self.inner.reason = v.into();
        self
    }

    pub fn created_at(mut self, v: DateTime<Utc>) -> Self {
        self.inner.created_at = v;
        self
    }

    pub fn build(self) -> ProposeSwap {
        self.inner
    }
}

pub fn supervisor() -> Caller {
    Caller::new(SUPERVISOR, Role::Supervisor)
}

pub fn approve_as_supervisor(swap_id: SwapRequestId, ms: i64) -> ApproveSwap {
    ApproveSwap {
        swap_id,
        approver: supervisor(),
        decided_at: at(ms),
    }
}

pub fn reject_as_supervisor(swap_id: SwapRequestId, ms: i64) -> RejectSwap {
    RejectSwap {
        swap_id,
        approver: supervisor(),
        decided_at: at(ms),
    }
}

pub fn cancel_as(employee_id: EmployeeId, swap_id: SwapRequestId, ms: i64) -> CancelSwap {
    CancelSwap {
        swap_id,
        caller: Caller::new(employee_id, Role::Staff),
        decided_at: at(ms),
    }
}
