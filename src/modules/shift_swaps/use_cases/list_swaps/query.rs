use crate::modules::shift_swaps::core::swap_request::SwapStatus;
use crate::shared::core::primitives::Caller;

/// Staff see the requests they take part in, in any status; approvers see every request.
/// `status` narrows the approver list only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListSwaps {
    pub caller: Caller,
    pub status: Option<SwapStatus>,
}
