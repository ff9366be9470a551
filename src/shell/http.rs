use axum::{
    Extension, Json, Router,
    response::IntoResponse,
    routing::{get, put},
};
use serde::Serialize;
use tower_http::trace::TraceLayer;

use crate::modules::shift_swaps::use_cases::approve_swap::inbound::http as approve_http;
use crate::modules::shift_swaps::use_cases::cancel_swap::inbound::http as cancel_http;
use crate::modules::shift_swaps::use_cases::list_swaps::inbound::http as list_http;
use crate::modules::shift_swaps::use_cases::propose_swap::inbound::http as propose_http;
use crate::modules::shift_swaps::use_cases::reject_swap::inbound::http as reject_http;
use crate::shell::graphql::{build_schema, graphiql, graphql_handler};
use crate::shell::response::ApiResponse;
use crate::shell::state::AppState;

#[derive(Serialize)]
struct Health {
    status: &'static str,
}

async fn health() -> impl IntoResponse {
    Json(ApiResponse::ok_with_message(
        Health { status: "ok" },
        "CSSD roster API is running",
    ))
}

pub fn router(state: AppState) -> Router {
    let schema = build_schema(state.clone());
    Router::new()
        .route("/health", get(health))
        .route("/api/ping", get(health))
        .route(
            "/api/swaps",
            get(list_http::handle).post(propose_http::handle),
        )
        .route("/api/swaps/{id}/approve", put(approve_http::handle))
        .route("/api/swaps/{id}/reject", put(reject_http::handle))
        .route("/api/swaps/{id}/cancel", put(cancel_http::handle))
        .route("/gql", get(graphiql).post(graphql_handler))
        .layer(Extension(schema))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
