// Composition root.
//
// Responsibilities
// - Read configuration from the environment.
// - Build the roster store and wire it into the use case handlers.
// - Expose the handlers over HTTP (JSON envelope) and GraphQL.

pub mod caller;
pub mod config;
pub mod graphql;
pub mod http;
pub mod response;
pub mod state;
