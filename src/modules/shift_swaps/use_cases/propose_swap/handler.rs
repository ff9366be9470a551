use crate::modules::shift_swaps::adapters::outbound::roster_store::{
    RosterStore, RosterTransaction, ScheduleStore, SwapLedger,
};
use crate::modules::shift_swaps::core::errors::SwapError;
use crate::modules::shift_swaps::core::swap_request::SwapRequest;
use crate::modules::shift_swaps::use_cases::propose_swap::command::ProposeSwap;
use crate::modules::shift_swaps::use_cases::propose_swap::decide::decide_propose;
use crate::modules::shift_swaps::use_cases::propose_swap::decision::Decision;
use std::sync::Arc;

pub struct ProposeSwapHandler<TStore>
where
    TStore: RosterStore,
{
    store: Arc<TStore>,
}

impl<TStore> ProposeSwapHandler<TStore>
where
    TStore: RosterStore,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    /// Records a pending swap request. No schedule row is touched.
    pub async fn handle(&self, command: ProposeSwap) -> Result<SwapRequest, SwapError> {
        let mut tx = self.store.begin().await?;
        let requester_entry = tx
            .find_schedule_by_id(command.requester_schedule_id)
            .await?;
        let target_entry = tx.find_schedule_by_id(command.target_schedule_id).await?;

        match decide_propose(command, requester_entry.as_ref(), target_entry.as_ref()) {
            Decision::Accepted { request } => {
                let created = tx.insert_swap(request).await?;
                tx.commit().await?;
                tracing::info!(
                    swap_id = created.id,
                    requester_id = created.requester_id,
                    target_id = created.target_id,
                    "swap request proposed"
                );
                Ok(created)
            }
            Decision::Rejected { reason } => Err(reason.into()),
        }
    }
}
