// JSON envelope shared by every HTTP endpoint: `{ "success": bool, "data"?: T, "message"?: string }`.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::modules::shift_swaps::core::errors::SwapError;

pub const STORE_FAILURE_MESSAGE: &str = "internal error, the request was not applied";

#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
        }
    }

    pub fn ok_with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: Some(message.into()),
        }
    }
}

pub fn failure(status: StatusCode, message: impl Into<String>) -> Response {
    let body: ApiResponse<()> = ApiResponse {
        success: false,
        data: None,
        message: Some(message.into()),
    };
    (status, Json(body)).into_response()
}

impl IntoResponse for SwapError {
    fn into_response(self) -> Response {
        let status = match &self {
            SwapError::Validation(_) => StatusCode::BAD_REQUEST,
            SwapError::NotFound(_) => StatusCode::NOT_FOUND,
            SwapError::InvalidState(_) => StatusCode::CONFLICT,
            SwapError::Forbidden(_) => StatusCode::FORBIDDEN,
            SwapError::Store(error) => {
                tracing::error!(%error, "roster store failure");
                return failure(StatusCode::INTERNAL_SERVER_ERROR, STORE_FAILURE_MESSAGE);
            }
        };
        failure(status, self.to_string())
    }
}
