use async_graphql::{EmptySubscription, MergedObject, Schema, http::GraphiQLSource};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{Extension, response::Html};

pub use crate::modules::shift_swaps::use_cases::list_swaps::inbound::graphql::QueryRoot;
use crate::modules::shift_swaps::use_cases::approve_swap::inbound::graphql::ApproveSwapMutation;
use crate::modules::shift_swaps::use_cases::cancel_swap::inbound::graphql::CancelSwapMutation;
use crate::modules::shift_swaps::use_cases::propose_swap::inbound::graphql::ProposeSwapMutation;
use crate::modules::shift_swaps::use_cases::reject_swap::inbound::graphql::RejectSwapMutation;
use crate::modules::shift_swaps::core::errors::SwapError;
use crate::shared::core::primitives::Caller;
use crate::shell::response::STORE_FAILURE_MESSAGE;
pub use crate::shell::state::AppState;

/// Store failures are logged here and reach the client only as a generic message.
pub fn swap_error(error: SwapError) -> async_graphql::Error {
    match error {
        SwapError::Store(error) => {
            tracing::error!(%error, "roster store failure");
            async_graphql::Error::new(STORE_FAILURE_MESSAGE)
        }
        other => async_graphql::Error::new(other.to_string()),
    }
}

#[derive(MergedObject, Default)]
pub struct MutationRoot(
    ProposeSwapMutation,
    ApproveSwapMutation,
    RejectSwapMutation,
    CancelSwapMutation,
);

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(state: AppState) -> AppSchema {
    Schema::build(QueryRoot, MutationRoot::default(), EmptySubscription)
        .data(state)
        .finish()
}

/// Every operation runs on behalf of the identified caller.
pub async fn graphql_handler(
    Extension(schema): Extension<AppSchema>,
    caller: Caller,
    req: GraphQLRequest,
) -> GraphQLResponse {
    schema.execute(req.into_inner().data(caller)).await.into()
}

pub async fn graphiql() -> Html<String> {
    Html(GraphiQLSource::build().endpoint("/gql").finish())
}
