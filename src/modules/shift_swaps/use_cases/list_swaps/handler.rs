use crate::modules::shift_swaps::adapters::outbound::roster_store::{
    RosterStore, ScheduleStore, SwapLedger,
};
use crate::modules::shift_swaps::core::errors::SwapError;
use crate::modules::shift_swaps::use_cases::list_swaps::projection::SwapView;
use crate::modules::shift_swaps::use_cases::list_swaps::query::ListSwaps;
use std::sync::Arc;

pub struct ListSwapsHandler<TStore>
where
    TStore: RosterStore,
{
    store: Arc<TStore>,
}

impl<TStore> ListSwapsHandler<TStore>
where
    TStore: RosterStore,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    /// Read-only: the transaction is dropped without committing.
    pub async fn handle(&self, query: ListSwaps) -> Result<Vec<SwapView>, SwapError> {
        let mut tx = self.store.begin().await?;

        let swaps = if query.caller.role.is_approver() {
            tx.list_swaps_by_status(query.status).await?
        } else {
            tx.list_swaps_for_employee(query.caller.id).await?
        };

        let mut views = Vec::with_capacity(swaps.len());
        for swap in swaps {
            let requester_entry = tx.find_schedule_by_id(swap.requester_schedule_id).await?;
            let target_entry = tx.find_schedule_by_id(swap.target_schedule_id).await?;
            views.push(SwapView::enriched(
                swap,
                requester_entry.as_ref(),
                target_entry.as_ref(),
            ));
        }
        Ok(views)
    }
}
