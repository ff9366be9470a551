use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::shift_swaps::core::swap_request::{SwapRequest, SwapStatus};
use crate::modules::shift_swaps::use_cases::list_swaps::projection::SwapView;
use crate::modules::shift_swaps::use_cases::list_swaps::query::ListSwaps;
use crate::shared::core::primitives::Caller;
use crate::shell::graphql::swap_error;
use crate::shell::state::AppState;

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlSwap {
    pub id: i64,
    pub requester_id: i64,
    pub requester_schedule_id: i64,
    pub requester_date: Option<String>,
    pub requester_shift_id: Option<i64>,
    pub target_id: i64,
    pub target_schedule_id: i64,
    pub target_date: Option<String>,
    pub target_shift_id: Option<i64>,
    pub reason: String,
    pub status: String,
    pub approved_by: Option<i64>,
    pub approved_at: Option<String>,
    pub created_at: String,
}

impl From<SwapView> for GqlSwap {
    fn from(v: SwapView) -> Self {
        Self {
            id: v.id,
            requester_id: v.requester_id,
            requester_schedule_id: v.requester_schedule_id,
            requester_date: v.requester_date.map(|d| d.to_string()),
            requester_shift_id: v.requester_shift_id,
            target_id: v.target_id,
            target_schedule_id: v.target_schedule_id,
            target_date: v.target_date.map(|d| d.to_string()),
            target_shift_id: v.target_shift_id,
            reason: v.reason,
            status: v.status.to_string(),
            approved_by: v.approved_by,
            approved_at: v.approved_at.map(|t| t.to_rfc3339()),
            created_at: v.created_at.to_rfc3339(),
        }
    }
}

impl From<SwapRequest> for GqlSwap {
    fn from(swap: SwapRequest) -> Self {
        SwapView::from(swap).into()
    }
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn swaps(&self, context: &Context<'_>, status: Option<String>) -> GqlResult<Vec<GqlSwap>> {
        let state = context.data_unchecked::<AppState>();
        let caller = *context.data::<Caller>()?;
        let status = status
            .as_deref()
            .map(str::parse::<SwapStatus>)
            .transpose()
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;

        let views = state
            .list_handler
            .handle(ListSwaps { caller, status })
            .await
            .map_err(swap_error)?;
        Ok(views.into_iter().map(Into::into).collect())
    }
}
