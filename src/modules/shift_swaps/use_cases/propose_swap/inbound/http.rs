use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use chrono::Utc;
use serde::Deserialize;

use crate::modules::shift_swaps::core::errors::SwapError;
use crate::modules::shift_swaps::use_cases::propose_swap::command::ProposeSwap;
use crate::shared::core::primitives::{Caller, EmployeeId, ScheduleId};
use crate::shell::response::{ApiResponse, failure};
use crate::shell::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProposeSwapBody {
    pub target_user_id: EmployeeId,
    pub my_schedule_id: ScheduleId,
    pub target_schedule_id: ScheduleId,
    #[serde(default)]
    pub reason: Option<String>,
}

pub async fn handle(
    State(state): State<AppState>,
    caller: Caller,
    body: Result<Json<ProposeSwapBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(JsonRejection::JsonDataError(rejection)) => {
            return SwapError::Validation(rejection.body_text()).into_response();
        }
        Err(rejection) => return failure(StatusCode::UNPROCESSABLE_ENTITY, rejection.body_text()),
    };

    let command = ProposeSwap {
        requester_id: caller.id,
        target_id: body.target_user_id,
        requester_schedule_id: body.my_schedule_id,
        target_schedule_id: body.target_schedule_id,
        reason: body.reason.unwrap_or_default(),
        created_at: Utc::now(),
    };

    match state.propose_handler.handle(command).await {
        Ok(created) => (
            StatusCode::CREATED,
            Json(ApiResponse::ok_with_message(
                created,
                "swap request submitted",
            )),
        )
            .into_response(),
        Err(error) => error.into_response(),
    }
}
