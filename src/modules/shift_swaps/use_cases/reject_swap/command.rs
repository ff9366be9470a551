use crate::shared::core::primitives::{Caller, SwapRequestId};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RejectSwap {
    pub swap_id: SwapRequestId,
    pub approver: Caller,
    pub decided_at: DateTime<Utc>,
}
