//! API error types and handling.

use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use vista::VistaError;

/// API error type.
#[derive(Debug)]
pub enum ApiError {
    /// No dataset loaded.
    NotFound(String),
    /// Malformed request body or query string.
    BadRequest(String),
    /// Request body over the upload limit.
    PayloadTooLarge(String),
    /// Error from the vista library.
    Vista(VistaError),
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "bad_request", msg),
            ApiError::PayloadTooLarge(msg) => (StatusCode::PAYLOAD_TOO_LARGE, "too_large", msg),
            ApiError::Vista(e @ VistaError::InvalidState(_)) => {
                (StatusCode::CONFLICT, "stale_analysis", e.to_string())
            }
            ApiError::Vista(e @ VistaError::Io { .. }) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "internal", e.to_string())
            }
            ApiError::Vista(e) => (StatusCode::BAD_REQUEST, "invalid_dataset", e.to_string()),
        };

        if status.is_server_error() {
            tracing::error!(%message, "request failed");
        }

        (
            status,
            Json(ErrorResponse {
                error: error.to_string(),
                message,
            }),
        )
            .into_response()
    }
}

impl From<VistaError> for ApiError {
    fn from(err: VistaError) -> Self {
        ApiError::Vista(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            ApiError::PayloadTooLarge(rejection.body_text())
        } else {
            ApiError::BadRequest(rejection.body_text())
        }
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::NotFound(msg) => write!(f, "Not found: {}", msg),
            ApiError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            ApiError::PayloadTooLarge(msg) => write!(f, "Payload too large: {}", msg),
            ApiError::Vista(e) => write!(f, "Vista error: {}", e),
        }
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    fn status_of(err: ApiError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn test_stale_analysis_is_conflict() {
        let err = ApiError::Vista(VistaError::InvalidState(
            "Analysis is stale. Re-run profiling.".to_string(),
        ));
        assert_eq!(status_of(err), StatusCode::CONFLICT);
    }

    #[test]
    fn test_vista_error_statuses() {
        let schema = VistaError::Schema {
            row: 1,
            message: "unknown column".to_string(),
        };
        assert_eq!(status_of(schema.into()), StatusCode::BAD_REQUEST);

        let config = VistaError::Config("bad".to_string());
        assert_eq!(status_of(config.into()), StatusCode::BAD_REQUEST);

        let io = VistaError::Io {
            path: "data.json".into(),
            source: io::Error::other("disk"),
        };
        assert_eq!(status_of(io.into()), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_request_errors() {
        assert_eq!(
            status_of(ApiError::NotFound("no dataset".to_string())),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_of(ApiError::PayloadTooLarge("too big".to_string())),
            StatusCode::PAYLOAD_TOO_LARGE
        );
    }
}
