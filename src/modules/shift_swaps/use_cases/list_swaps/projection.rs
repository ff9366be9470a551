use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use crate::modules::shift_swaps::core::schedule::ScheduleEntry;
use crate::modules::shift_swaps::core::swap_request::{SwapRequest, SwapStatus};
use crate::shared::core::primitives::{EmployeeId, ScheduleId, ShiftId, SwapRequestId};

/// A swap request joined with the current date and shift of both schedules it references.
/// The schedule fields are empty when the row has since been deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SwapView {
    pub id: SwapRequestId,
    pub requester_id: EmployeeId,
    pub requester_schedule_id: ScheduleId,
    pub requester_date: Option<NaiveDate>,
    pub requester_shift_id: Option<ShiftId>,
    pub target_id: EmployeeId,
    pub target_schedule_id: ScheduleId,
    pub target_date: Option<NaiveDate>,
    pub target_shift_id: Option<ShiftId>,
    pub reason: String,
    pub status: SwapStatus,
    pub approved_by: Option<EmployeeId>,
    pub approved_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl SwapView {
    pub fn enriched(
        swap: SwapRequest,
        requester_entry: Option<&ScheduleEntry>,
        target_entry: Option<&ScheduleEntry>,
    ) -> Self {
        let mut view = SwapView::from(swap);
        view.requester_date = requester_entry.map(|e| e.date);
        view.requester_shift_id = requester_entry.and_then(|e| e.payload.shift_id);
        view.target_date = target_entry.map(|e| e.date);
        view.target_shift_id = target_entry.and_then(|e| e.payload.shift_id);
        view
    }
}

impl From<SwapRequest> for SwapView {
    fn from(swap: SwapRequest) -> Self {
        Self {
            id: swap.id,
            requester_id: swap.requester_id,
            requester_schedule_id: swap.requester_schedule_id,
            requester_date: None,
            requester_shift_id: None,
            target_id: swap.target_id,
            target_schedule_id: swap.target_schedule_id,
            target_date: None,
            target_shift_id: None,
            reason: swap.reason,
            status: swap.status,
            approved_by: swap.approved_by,
            approved_at: swap.approved_at,
            created_at: swap.created_at,
        }
    }
}
