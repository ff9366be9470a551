use async_graphql::{Context, Object, Result as GqlResult};
use chrono::Utc;

use crate::modules::shift_swaps::use_cases::approve_swap::command::ApproveSwap;
use crate::modules::shift_swaps::use_cases::list_swaps::inbound::graphql::GqlSwap;
use crate::shared::core::primitives::Caller;
use crate::shell::graphql::swap_error;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct ApproveSwapMutation;

#[Object]
impl ApproveSwapMutation {
    async fn approve_swap(&self, context: &Context<'_>, id: i64) -> GqlResult<GqlSwap> {
        let state = context.data_unchecked::<AppState>();
        let approver = *context.data::<Caller>()?;

        let approved = state
            .approve_handler
            .handle(ApproveSwap {
                swap_id: id,
                approver,
                decided_at: Utc::now(),
            })
            .await
            .map_err(swap_error)?;

        Ok(approved.into())
    }
}
