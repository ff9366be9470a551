use crate::shared::core::primitives::{EmployeeId, ScheduleId};
use chrono::{DateTime, Utc};

/// The requester offers `requester_schedule_id` in exchange for `target_schedule_id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProposeSwap {
    pub requester_id: EmployeeId,
    pub target_id: EmployeeId,
    pub requester_schedule_id: ScheduleId,
    pub target_schedule_id: ScheduleId,
    pub reason: String,
    pub created_at: DateTime<Utc>,
}
