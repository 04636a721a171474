use std::sync::Arc;

use crate::workflow::engine::WorkflowEngine;

/// Shared application state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<WorkflowEngine>,
}
