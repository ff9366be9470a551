use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::Utc;

use crate::modules::shift_swaps::use_cases::reject_swap::command::RejectSwap;
use crate::shared::core::primitives::{Caller, SwapRequestId};
use crate::shell::response::{ApiResponse, failure};
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    caller: Caller,
    swap_id: Result<Path<SwapRequestId>, PathRejection>,
) -> impl IntoResponse {
    let Ok(Path(swap_id)) = swap_id else {
        return failure(StatusCode::BAD_REQUEST, "invalid swap request id");
    };

    let command = RejectSwap {
        swap_id,
        approver: caller,
        decided_at: Utc::now(),
    };

    match state.reject_handler.handle(command).await {
        Ok(rejected) => {
            Json(ApiResponse::ok_with_message(rejected, "swap request rejected")).into_response()
        }
        Err(error) => error.into_response(),
    }
}
