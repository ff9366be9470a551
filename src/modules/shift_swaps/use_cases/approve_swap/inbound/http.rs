use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::Utc;

use crate::modules::shift_swaps::use_cases::approve_swap::command::ApproveSwap;
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

    let command = ApproveSwap {
        swap_id,
        approver: caller,
        decided_at: Utc::now(),
    };

    match state.approve_handler.handle(command).await {
        Ok(approved) => Json(ApiResponse::ok_with_message(
            approved,
            "swap request approved and schedules updated",
        ))
        .into_response(),
        Err(error) => error.into_response(),
    }
}

#[cfg(test)]
mod approve_swap_http_inbound_tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        routing::put,
    };
    use http_body_util::BodyExt;
    use rstest::rstest;
    use std::sync::Arc;
    use tower::ServiceExt;

    use crate::modules::shift_swaps::adapters::outbound::roster_store_in_memory::InMemoryRosterStore;
    use crate::shell::state::AppState;
    use crate::tests::fixtures::commands::ProposeSwapBuilder;
    use crate::tests::fixtures::roster::seeded_store;

    use super::handle;

    async fn app_with_pending_request(store: InMemoryRosterStore) -> Router {
        let state = AppState::new(Arc::new(store));
        state
            .propose_handler
            .handle(ProposeSwapBuilder::new().build())
            .await
            .unwrap();
        Router::new()
            .route("/api/swaps/{id}/approve", put(handle))
            .with_state(state)
    }

    fn approve(uri: &str, role: &str) -> Request<Body> {
        Request::put(uri)
            .header("x-user-id", "90")
            .header("x-user-role", role)
            .body(Body::empty())
            .unwrap()
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_return_200_with_the_approved_request(seeded_store: InMemoryRosterStore) {
        let app = app_with_pending_request(seeded_store).await;

        let response = app
            .oneshot(approve("/api/swaps/1/approve", "supervisor"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["data"]["status"], "approved");
        assert_eq!(json["data"]["approvedBy"], 90);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_return_409_when_already_processed(seeded_store: InMemoryRosterStore) {
        let app = app_with_pending_request(seeded_store).await;
        app.clone()
            .oneshot(approve("/api/swaps/1/approve", "admin"))
            .await
            .unwrap();

        let response = app
            .oneshot(approve("/api/swaps/1/approve", "admin"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[rstest]
    #[case("/api/swaps/1/approve", "staff", StatusCode::FORBIDDEN)]
    #[case("/api/swaps/77/approve", "admin", StatusCode::NOT_FOUND)]
    #[case("/api/swaps/abc/approve", "admin", StatusCode::BAD_REQUEST)]
    #[tokio::test]
    async fn it_should_map_failures_to_status_codes(
        seeded_store: InMemoryRosterStore,
        #[case] uri: &str,
        #[case] role: &str,
        #[case] expected: StatusCode,
    ) {
        let app = app_with_pending_request(seeded_store).await;

        let response = app.oneshot(approve(uri, role)).await.unwrap();

        assert_eq!(response.status(), expected);
    }
}
