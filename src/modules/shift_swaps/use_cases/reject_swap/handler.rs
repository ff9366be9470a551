use crate::modules::shift_swaps::adapters::outbound::roster_store::{
    RosterStore, RosterTransaction, SwapLedger,
};
use crate::modules::shift_swaps::core::errors::SwapError;
use crate::modules::shift_swaps::core::swap_request::{SwapRequest, SwapStatus};
use crate::modules::shift_swaps::use_cases::reject_swap::command::RejectSwap;
use crate::modules::shift_swaps::use_cases::reject_swap::decide::decide_reject;
use crate::modules::shift_swaps::use_cases::reject_swap::decision::Decision;
use std::sync::Arc;

pub struct RejectSwapHandler<TStore>
where
    TStore: RosterStore,
{
    store: Arc<TStore>,
}

impl<TStore> RejectSwapHandler<TStore>
where
    TStore: RosterStore,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    /// Closes the request as rejected. Schedules are left untouched.
    pub async fn handle(&self, command: RejectSwap) -> Result<SwapRequest, SwapError> {
        let mut tx = self.store.begin().await?;
        let swap = tx.find_swap_for_update(command.swap_id).await?;

        let swap = match decide_reject(&command, swap) {
            Decision::Accepted { swap } => swap,
            Decision::Rejected { reason } => return Err(reason.into()),
        };

        tx.update_swap_status(
            swap.id,
            SwapStatus::Rejected,
            command.approver.id,
            command.decided_at,
        )
        .await?;
        tx.commit().await?;

        tracing::info!(
            swap_id = swap.id,
            approver_id = command.approver.id,
            "swap request rejected"
        );

        Ok(SwapRequest {
            status: SwapStatus::Rejected,
            approved_by: Some(command.approver.id),
            approved_at: Some(command.decided_at),
            ..swap
        })
    }
}
