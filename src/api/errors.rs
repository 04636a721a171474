use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::error::WorkflowError;

/// API-specific error wrapper that converts WorkflowError into HTTP
/// responses.
impl IntoResponse for WorkflowError {
    fn into_response(self) -> Response {
        let status = match &self {
            WorkflowError::InvalidTransition { .. } => StatusCode::CONFLICT,
            WorkflowError::MissingRequiredRemarks => StatusCode::BAD_REQUEST,
            WorkflowError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            WorkflowError::DocumentLocked(_) => StatusCode::LOCKED,
            WorkflowError::Forbidden(_) => StatusCode::FORBIDDEN,
            WorkflowError::NotFound(_) => StatusCode::NOT_FOUND,
            WorkflowError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            WorkflowError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = serde_json::json!({
            "error": self.to_string()
        });

        (status, axum::Json(body)).into_response()
    }
}
