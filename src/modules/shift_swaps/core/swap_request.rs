// Swap requests as recorded in the ledger.
//
// Lifecycle
// - Created `pending`. Moves exactly once to `approved`, `rejected` or `cancelled`.
// - Terminal requests are never mutated again.

use crate::shared::core::primitives::{EmployeeId, ScheduleId, SwapRequestId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SwapStatus {
    Pending,
    Approved,
    Rejected,
    Cancelled,
}

impl SwapStatus {
    pub fn is_terminal(self) -> bool {
        !matches!(self, SwapStatus::Pending)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SwapStatus::Pending => "pending",
            SwapStatus::Approved => "approved",
            SwapStatus::Rejected => "rejected",
            SwapStatus::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for SwapStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown swap status: {0}")]
pub struct UnknownSwapStatus(pub String);

impl FromStr for SwapStatus {
    type Err = UnknownSwapStatus;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "pending" => Ok(SwapStatus::Pending),
            "approved" => Ok(SwapStatus::Approved),
            "rejected" => Ok(SwapStatus::Rejected),
            "cancelled" => Ok(SwapStatus::Cancelled),
            _ => Err(UnknownSwapStatus(raw.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwapRequest {
    pub id: SwapRequestId,
    pub requester_id: EmployeeId,
    pub requester_schedule_id: ScheduleId,
    pub target_id: EmployeeId,
    pub target_schedule_id: ScheduleId,
    pub reason: String,
    pub status: SwapStatus,
    /// Who moved the request out of `pending` (approver, rejecter or cancelling requester).
    pub approved_by: Option<EmployeeId>,
    pub approved_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl SwapRequest {
    pub fn involves(&self, employee_id: EmployeeId) -> bool {
        self.requester_id == employee_id || self.target_id == employee_id
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSwapRequest {
    pub requester_id: EmployeeId,
    pub requester_schedule_id: ScheduleId,
    pub target_id: EmployeeId,
    pub target_schedule_id: ScheduleId,
    pub reason: String,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod swap_request_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("pending", SwapStatus::Pending)]
    #[case("APPROVED", SwapStatus::Approved)]
    #[case(" rejected ", SwapStatus::Rejected)]
    #[case("cancelled", SwapStatus::Cancelled)]
    fn it_should_parse_the_status(#[case] raw: &str, #[case] expected: SwapStatus) {
        assert_eq!(raw.parse::<SwapStatus>(), Ok(expected));
    }

    #[rstest]
    fn it_should_refuse_an_unknown_status() {
        assert!("done".parse::<SwapStatus>().is_err());
    }

    #[rstest]
    fn only_pending_is_not_terminal() {
        assert!(!SwapStatus::Pending.is_terminal());
        assert!(SwapStatus::Approved.is_terminal());
        assert!(SwapStatus::Rejected.is_terminal());
        assert!(SwapStatus::Cancelled.is_terminal());
    }
}
