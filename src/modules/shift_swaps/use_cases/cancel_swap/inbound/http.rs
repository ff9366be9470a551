use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::Utc;

use crate::modules::shift_swaps::use_cases::cancel_swap::command::CancelSwap;
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

    let command = CancelSwap {
        swap_id,
        caller,
        decided_at: Utc::now(),
    };

    match state.cancel_handler.handle(command).await {
        Ok(cancelled) => {
            Json(ApiResponse::ok_with_message(cancelled, "swap request cancelled")).into_response()
        }
        Err(error) => error.into_response(),
    }
}

#[cfg(test)]
mod cancel_swap_http_inbound_tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        routing::put,
    };
    use rstest::rstest;
    use std::sync::Arc;
    use tower::ServiceExt;

    use crate::modules::shift_swaps::adapters::outbound::roster_store_in_memory::InMemoryRosterStore;
    use crate::shell::state::AppState;
    use crate::tests::fixtures::commands::ProposeSwapBuilder;
    use crate::tests::fixtures::roster::seeded_store;

    use super::handle;

    #[rstest]
    #[case("10", StatusCode::OK)]
    #[case("20", StatusCode::FORBIDDEN)]
    #[tokio::test]
    async fn it_should_cancel_for_the_requester_only(
        seeded_store: InMemoryRosterStore,
        #[case] user_id: &str,
        #[case] expected: StatusCode,
    ) {
        let state = AppState::new(Arc::new(seeded_store));
        state
            .propose_handler
            .handle(ProposeSwapBuilder::new().build())
            .await
            .unwrap();
        let app = Router::new()
            .route("/api/swaps/{id}/cancel", put(handle))
            .with_state(state);

        let response = app
            .oneshot(
                Request::put("/api/swaps/1/cancel")
                    .header("x-user-id", user_id)
                    .header("x-user-role", "staff")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), expected);
    }
}
