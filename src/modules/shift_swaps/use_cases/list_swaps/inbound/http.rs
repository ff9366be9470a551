use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::shift_swaps::core::swap_request::SwapStatus;
use crate::modules::shift_swaps::use_cases::list_swaps::query::ListSwaps;
use crate::shared::core::primitives::Caller;
use crate::shell::response::{ApiResponse, failure};
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct ListSwapsParams {
    pub status: Option<String>,
}

pub async fn handle(
    State(state): State<AppState>,
    caller: Caller,
    Query(params): Query<ListSwapsParams>,
) -> impl IntoResponse {
    let status = match params.status.as_deref().map(str::parse::<SwapStatus>) {
        None => None,
        Some(Ok(status)) => Some(status),
        Some(Err(e)) => return failure(StatusCode::BAD_REQUEST, e.to_string()),
    };

    match state.list_handler.handle(ListSwaps { caller, status }).await {
        Ok(views) => Json(ApiResponse::ok(views)).into_response(),
        Err(error) => error.into_response(),
    }
}
