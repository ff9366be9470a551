use crate::modules::shift_swaps::adapters::outbound::roster_store::{
    RosterStore, RosterTransaction, SwapLedger,
};
use crate::modules::shift_swaps::core::errors::SwapError;
use crate::modules::shift_swaps::core::swap_request::{SwapRequest, SwapStatus};
use crate::modules::shift_swaps::use_cases::cancel_swap::command::CancelSwap;
use crate::modules::shift_swaps::use_cases::cancel_swap::decide::decide_cancel;
use crate::modules::shift_swaps::use_cases::cancel_swap::decision::Decision;
use std::sync::Arc;

pub struct CancelSwapHandler<TStore>
where
    TStore: RosterStore,
{
    store: Arc<TStore>,
}

impl<TStore> CancelSwapHandler<TStore>
where
    TStore: RosterStore,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, command: CancelSwap) -> Result<SwapRequest, SwapError> {
        let mut tx = self.store.begin().await?;
        let swap = tx.find_swap_for_update(command.swap_id).await?;

        let swap = match decide_cancel(&command, swap) {
            Decision::Accepted { swap } => swap,
            Decision::Rejected { reason } => return Err(reason.into()),
        };

        tx.update_swap_status(
            swap.id,
            SwapStatus::Cancelled,
            command.caller.id,
            command.decided_at,
        )
        .await?;
        tx.commit().await?;

        tracing::info!(swap_id = swap.id, "swap request cancelled by requester");

        Ok(SwapRequest {
            status: SwapStatus::Cancelled,
            approved_by: Some(command.caller.id),
            approved_at: Some(command.decided_at),
            ..swap
        })
    }
}
