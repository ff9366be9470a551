// Caller identity as forwarded by the authenticating gateway.
//
// The gateway sets `x-user-id` (integer) and `x-user-role` (admin | supervisor | staff).
// Requests without a usable identity are refused with 401.

use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::shared::core::primitives::{Caller, EmployeeId, Role};
use crate::shell::response::failure;

pub const USER_ID_HEADER: &str = "x-user-id";
pub const USER_ROLE_HEADER: &str = "x-user-role";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CallerRejection {
    #[error("missing {0} header")]
    Missing(&'static str),

    #[error("invalid {0} header")]
    Invalid(&'static str),
}

impl IntoResponse for CallerRejection {
    fn into_response(self) -> Response {
        failure(StatusCode::UNAUTHORIZED, self.to_string())
    }
}

fn header<'a>(parts: &'a Parts, name: &'static str) -> Result<&'a str, CallerRejection> {
    let value = parts
        .headers
        .get(name)
        .ok_or(CallerRejection::Missing(name))?;
    value.to_str().map_err(|_| CallerRejection::Invalid(name))
}

impl<S> FromRequestParts<S> for Caller
where
    S: Send + Sync,
{
    type Rejection = CallerRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let id: EmployeeId = header(parts, USER_ID_HEADER)?
            .trim()
            .parse()
            .map_err(|_| CallerRejection::Invalid(USER_ID_HEADER))?;
        if id <= 0 {
            return Err(CallerRejection::Invalid(USER_ID_HEADER));
        }
        let role: Role = header(parts, USER_ROLE_HEADER)?
            .parse()
            .map_err(|_| CallerRejection::Invalid(USER_ROLE_HEADER))?;
        Ok(Caller::new(id, role))
    }
}
