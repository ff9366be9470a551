use crate::shared::core::primitives::{Caller, SwapRequestId};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CancelSwap {
    pub swap_id: SwapRequestId,
    pub caller: Caller,
    pub decided_at: DateTime<Utc>,
}
