use axum::extract::{Path, Query, State};
use axum::Json;
use uuid::Uuid;

use crate::api::reviewer::RemarksQuery;
use crate::auth::models::AuthenticatedUser;
use crate::error::WorkflowError;
use crate::state::AppState;
use crate::store::models::Document;
use crate::workflow::engine::ApproverDecision;

/// `GET /api/approver/documents/pending` — reviewer-approved documents,
/// oldest created first.
pub async fn pending(
    State(state): State<AppState>,
    actor: AuthenticatedUser,
) -> Result<Json<Vec<Document>>, WorkflowError> {
    Ok(Json(state.engine.approver_pending(&actor).await?))
}

/// `GET /api/approver/documents/finalized` — dispositioned documents,
/// newest first.
pub async fn finalized(
    State(state): State<AppState>,
    actor: AuthenticatedUser,
) -> Result<Json<Vec<Document>>, WorkflowError> {
    Ok(Json(state.engine.approver_processed(&actor).await?))
}

/// `GET /api/approver/documents/{id}`
pub async fn get_document(
    State(state): State<AppState>,
    actor: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> Result<Json<Document>, WorkflowError> {
    Ok(Json(state.engine.get_document(&actor, id).await?))
}

/// `PUT /api/approver/documents/{id}/finalize?remarks=`
pub async fn finalize(
    State(state): State<AppState>,
    actor: AuthenticatedUser,
    Path(id): Path<Uuid>,
    Query(query): Query<RemarksQuery>,
) -> Result<Json<Document>, WorkflowError> {
    let doc = state
        .engine
        .approver_decide(&actor, id, ApproverDecision::Finalize, query.remarks)
        .await?;
    Ok(Json(doc))
}

/// `PUT /api/approver/documents/{id}/archive?remarks=`
pub async fn archive(
    State(state): State<AppState>,
    actor: AuthenticatedUser,
    Path(id): Path<Uuid>,
    Query(query): Query<RemarksQuery>,
) -> Result<Json<Document>, WorkflowError> {
    let doc = state
        .engine
        .approver_decide(&actor, id, ApproverDecision::Archive, query.remarks)
        .await?;
    Ok(Json(doc))
}

/// `PUT /api/approver/documents/{id}/reject?remarks=` — remarks required.
pub async fn reject(
    State(state): State<AppState>,
    actor: AuthenticatedUser,
    Path(id): Path<Uuid>,
    Query(query): Query<RemarksQuery>,
) -> Result<Json<Document>, WorkflowError> {
    let doc = state
        .engine
        .approver_decide(&actor, id, ApproverDecision::Reject, query.remarks)
        .await?;
    Ok(Json(doc))
}
