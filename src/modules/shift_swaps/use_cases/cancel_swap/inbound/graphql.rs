use async_graphql::{Context, Object, Result as GqlResult};
use chrono::Utc;

use crate::modules::shift_swaps::use_cases::cancel_swap::command::CancelSwap;
use crate::modules::shift_swaps::use_cases::list_swaps::inbound::graphql::GqlSwap;
use crate::shared::core::primitives::Caller;
use crate::shell::graphql::swap_error;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct CancelSwapMutation;

#[Object]
impl CancelSwapMutation {
    async fn cancel_swap(&self, context: &Context<'_>, id: i64) -> GqlResult<GqlSwap> {
        let state = context.data_unchecked::<AppState>();
        let caller = *context.data::<Caller>()?;

        let cancelled = state
            .cancel_handler
            .handle(CancelSwap {
                swap_id: id,
                caller,
                decided_at: Utc::now(),
            })
            .await
            .map_err(swap_error)?;

        Ok(cancelled.into())
    }
}
