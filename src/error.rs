use thiserror::Error;
use uuid::Uuid;

use crate::auth::gate::WorkflowAction;
use crate::workflow::status::DocumentStatus;

/// Application-wide error types.
///
/// Every failure is detected synchronously and leaves the document
/// unchanged; retrying without a status change fails identically.
#[derive(Debug, Error)]
pub enum WorkflowError {
    #[error("operation {operation} is not valid while the document is {from}")]
    InvalidTransition {
        operation: WorkflowAction,
        from: DocumentStatus,
    },

    #[error("rejection requires remarks")]
    MissingRequiredRemarks,

    #[error("document is locked in status {0}")]
    DocumentLocked(DocumentStatus),

    #[error("forbidden: {0}")]
    Forbidden(String),

    #[error("document not found: {0}")]
    NotFound(Uuid),

    #[error("authentication required: {0}")]
    Unauthorized(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("store error: {0}")]
    Store(String),
}

/// Helper conversion from anyhow::Error
impl From<anyhow::Error> for WorkflowError {
    fn from(err: anyhow::Error) -> Self {
        WorkflowError::Store(err.to_string())
    }
}
