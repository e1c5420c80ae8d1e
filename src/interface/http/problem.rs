use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::domain::errors::DomainError;

pub type ApiResult<T> = Result<T, ApiError>;

/// Transport-facing failure: an HTTP status plus the
/// `{"reason", "stackDepth"}` body the clients of this API expect.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    reason: String,
    stack_depth: usize,
}

impl ApiError {
    pub fn from_domain(error: DomainError) -> Self {
        let status = match &error {
            DomainError::CustomerIdMissing
            | DomainError::ContactTypeInvalid(_)
            | DomainError::EmailAlreadyOwned(_)
            | DomainError::PhoneAlreadyOwned(_) => StatusCode::BAD_REQUEST,
            DomainError::CustomerNotFound(_)
            | DomainError::CustomerByNameNotFound(_)
            | DomainError::EmailNotFound(_)
            | DomainError::PhoneNotFound(_) => StatusCode::NOT_FOUND,
            DomainError::Storage(_) => StatusCode::CONFLICT,
        };

        Self {
            status,
            reason: error.to_string(),
            stack_depth: source_chain_depth(&error),
        }
    }
}

#[derive(Debug, Serialize)]
struct FailureBody {
    reason: String,
    #[serde(rename = "stackDepth")]
    stack_depth: usize,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = FailureBody {
            reason: self.reason,
            stack_depth: self.stack_depth,
        };
        (self.status, Json(body)).into_response()
    }
}

fn source_chain_depth(error: &(dyn std::error::Error + 'static)) -> usize {
    std::iter::successors(Some(error), |current| current.source()).count()
}
