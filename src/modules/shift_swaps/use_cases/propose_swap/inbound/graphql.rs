use async_graphql::{Context, Object, Result as GqlResult};
use chrono::Utc;

use crate::modules::shift_swaps::use_cases::list_swaps::inbound::graphql::GqlSwap;
use crate::modules::shift_swaps::use_cases::propose_swap::command::ProposeSwap;
use crate::shared::core::primitives::Caller;
use crate::shell::graphql::swap_error;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct ProposeSwapMutation;

#[Object]
impl ProposeSwapMutation {
    async fn propose_swap(
        &self,
        context: &Context<'_>,
        target_user_id: i64,
        my_schedule_id: i64,
        target_schedule_id: i64,
        reason: Option<String>,
    ) -> GqlResult<GqlSwap> {
        let state = context.data_unchecked::<AppState>();
        let caller = context.data::<Caller>()?;

        let command = ProposeSwap {
            requester_id: caller.id,
            target_id: target_user_id,
            requester_schedule_id: my_schedule_id,
            target_schedule_id,
            reason: reason.unwrap_or_default(),
            created_at: Utc::now(),
        };

        let created = state
            .propose_handler
            .handle(command)
            .await
            .map_err(swap_error)?;

        Ok(created.into())
    }
}
