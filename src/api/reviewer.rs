use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;
use uuid::Uuid;

use crate::auth::models::AuthenticatedUser;
use crate::error::WorkflowError;
use crate::state::AppState;
use crate::store::models::Document;
use crate::workflow::engine::ReviewerDecision;

/// Decision endpoints carry remarks as a query parameter, matching the
/// clients this API serves.
#[derive(Debug, Deserialize)]
pub struct RemarksQuery {
    #[serde(default)]
    pub remarks: Option<String>,
}

/// `GET /api/reviewer/documents/pending` — first-come-first-served worklist.
pub async fn pending(
    State(state): State<AppState>,
    actor: AuthenticatedUser,
) -> Result<Json<Vec<Document>>, WorkflowError> {
    Ok(Json(state.engine.reviewer_pending(&actor).await?))
}

/// `GET /api/reviewer/documents/reviewed` — decided documents, newest first.
pub async fn reviewed(
    State(state): State<AppState>,
    actor: AuthenticatedUser,
) -> Result<Json<Vec<Document>>, WorkflowError> {
    Ok(Json(state.engine.reviewer_history(&actor).await?))
}

/// `GET /api/reviewer/documents/{id}`
pub async fn get_document(
    State(state): State<AppState>,
    actor: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> Result<Json<Document>, WorkflowError> {
    Ok(Json(state.engine.get_document(&actor, id).await?))
}

/// `PUT /api/reviewer/documents/{id}/approve?remarks=`
pub async fn approve(
    State(state): State<AppState>,
    actor: AuthenticatedUser,
    Path(id): Path<Uuid>,
    Query(query): Query<RemarksQuery>,
) -> Result<Json<Document>, WorkflowError> {
    let doc = state
        .engine
        .reviewer_decide(&actor, id, ReviewerDecision::Approve, query.remarks)
        .await?;
    Ok(Json(doc))
}

/// `PUT /api/reviewer/documents/{id}/reject?remarks=` — remarks required.
pub async fn reject(
    State(state): State<AppState>,
    actor: AuthenticatedUser,
    Path(id): Path<Uuid>,
    Query(query): Query<RemarksQuery>,
) -> Result<Json<Document>, WorkflowError> {
    let doc = state
        .engine
        .reviewer_decide(&actor, id, ReviewerDecision::Reject, query.remarks)
        .await?;
    Ok(Json(doc))
}
