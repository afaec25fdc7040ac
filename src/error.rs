//! HTTP error mapping

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use crate::domain::value_objects::ValidationError;
use crate::models::ErrorResponse;
use crate::ports::inbound::UseCaseError;

/// Error returned by request handlers
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    UseCase(#[from] UseCaseError),
    #[error("bad request: {0}")]
    BadRequest(String),
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self::UseCase(UseCaseError::Validation(err))
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl ApiError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            Self::BadRequest(_) => (StatusCode::BAD_REQUEST, "bad_request"),
            Self::UseCase(UseCaseError::Validation(_)) => (StatusCode::BAD_REQUEST, "validation_error"),
            Self::UseCase(UseCaseError::Conflict(_)) => (StatusCode::CONFLICT, "conflict"),
            Self::UseCase(UseCaseError::NotFound(_)) => (StatusCode::NOT_FOUND, "not_found"),
            Self::UseCase(UseCaseError::Repository(_)) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "internal_error")
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        let message = match &self {
            Self::UseCase(UseCaseError::Repository(_)) => "internal storage error".to_string(),
            other => other.to_string(),
        };
        (status, Json(ErrorResponse { code: code.into(), message })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::EmailError;
    use crate::ports::outbound::RepositoryError;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (ApiError::BadRequest("clientId is required".into()), StatusCode::BAD_REQUEST),
            (ValidationError::Email(EmailError::Empty).into(), StatusCode::BAD_REQUEST),
            (UseCaseError::Conflict("taken".into()).into(), StatusCode::CONFLICT),
            (UseCaseError::NotFound("client 1".into()).into(), StatusCode::NOT_FOUND),
            (
                UseCaseError::Repository(RepositoryError::Storage("down".into())).into(),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, expected) in cases {
            assert_eq!(error.into_response().status(), expected);
        }
    }
}
