//! HTTP-boundary error type and its envelope mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::error::IdearioError;

/// Errors surfaced by the HTTP handlers, each with a fixed status mapping.
#[derive(Debug)]
pub enum ApiError {
    /// 400: missing/empty required fields, or a missing/invalid id.
    InvalidInput(String),
    /// 404: no idea with the requested id.
    NotFound(String),
    /// 500: unexpected failure. `detail` only leaves the process when the
    /// server runs in debug mode; callers decide what to put here.
    Internal { detail: Option<String> },
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            ApiError::InvalidInput(message) | ApiError::NotFound(message) => {
                json!({ "success": false, "message": message })
            }
            ApiError::Internal { detail } => json!({
                "success": false,
                "message": "Error interno del servidor",
                "error": detail.unwrap_or_else(|| "Algo salió mal".to_string()),
            }),
        };

        (status, Json(body)).into_response()
    }
}

impl From<IdearioError> for ApiError {
    fn from(err: IdearioError) -> Self {
        match err {
            IdearioError::InvalidInput(message) => ApiError::InvalidInput(message),
            IdearioError::NotFound(_) => ApiError::NotFound("Idea no encontrada".to_string()),
            _ => ApiError::Internal { detail: None },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ApiError::InvalidInput("x".to_string()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::NotFound("x".to_string()).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::Internal { detail: None }.status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_from_domain_error() {
        let err: ApiError = IdearioError::NotFound(42).into();
        assert!(matches!(err, ApiError::NotFound(_)));

        let err: ApiError = IdearioError::InvalidInput("falta el título".to_string()).into();
        match err {
            ApiError::InvalidInput(message) => assert_eq!(message, "falta el título"),
            other => panic!("expected InvalidInput, got {:?}", other),
        }
    }
}
