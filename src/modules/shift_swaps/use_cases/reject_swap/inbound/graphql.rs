use async_graphql::{Context, Object, Result as GqlResult};
use chrono::Utc;

use crate::modules::shift_swaps::use_cases::list_swaps::inbound::graphql::GqlSwap;
use crate::modules::shift_swaps::use_cases::reject_swap::command::RejectSwap;
use crate::shared::core::primitives::Caller;
use crate::shell::graphql::swap_error;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct RejectSwapMutation;

#[Object]
impl RejectSwapMutation {
    async fn reject_swap(&self, context: &Context<'_>, id: i64) -> GqlResult<GqlSwap> {
        let state = context.data_unchecked::<AppState>();
        let approver = *context.data::<Caller>()?;

        let rejected = state
            .reject_handler
            .handle(RejectSwap {
                swap_id: id,
                approver,
                decided_at: Utc::now(),
            })
            .await
            .map_err(swap_error)?;

        Ok(rejected.into())
    }
}
