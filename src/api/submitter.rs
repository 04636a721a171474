use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;
use uuid::Uuid;

use crate::auth::models::AuthenticatedUser;
use crate::error::WorkflowError;
use crate::state::AppState;
use crate::store::models::Document;
use crate::workflow::engine::{DocumentEdit, NewDocument};
use crate::workflow::status::DocumentStatus;
use crate::workflow::views::{ListFilter, SortOrder, StatusSummary};

/// Query string for the submitter's document list.
#[derive(Debug, Deserialize, Default)]
pub struct ListQuery {
    pub status: Option<String>,
    pub search: Option<String>,
    pub sort: Option<String>,
}

impl ListQuery {
    fn into_filter(self) -> Result<ListFilter, WorkflowError> {
        let status = match self.status.as_deref() {
            None | Some("all") | Some("") => None,
            Some(s) => Some(DocumentStatus::from_str_ci(s).ok_or_else(|| {
                WorkflowError::InvalidInput(format!("unknown status filter: {s}"))
            })?),
        };
        let sort = match self.sort.as_deref() {
            None | Some("") => SortOrder::default(),
            Some(s) => SortOrder::from_str_ci(s)
                .ok_or_else(|| WorkflowError::InvalidInput(format!("unknown sort order: {s}")))?,
        };
        Ok(ListFilter {
            status,
            search: self.search.filter(|s| !s.is_empty()),
            sort,
        })
    }
}

/// Request body for document creation.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDocumentRequest {
    pub title: String,
    pub file_ref: String,
    #[serde(default)]
    pub file_name: Option<String>,
    #[serde(default)]
    pub file_type: Option<String>,
    #[serde(default)]
    pub remarks: Option<String>,
    /// `draft` to save without submitting; defaults to `submitted`.
    #[serde(default)]
    pub status: Option<String>,
}

/// Request body for editing an editable document.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDocumentRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub file_ref: Option<String>,
    #[serde(default)]
    pub file_name: Option<String>,
    #[serde(default)]
    pub file_type: Option<String>,
    #[serde(default)]
    pub remarks: Option<String>,
    /// `draft` to keep editing, `submitted` to resubmit for review.
    /// Omitting the field saves the document as a draft; resubmission
    /// must be asked for explicitly.
    #[serde(default)]
    pub status: Option<String>,
}

/// Interpret the `status` field of a create/update request as the draft flag.
fn as_draft(status: Option<&str>) -> Result<bool, WorkflowError> {
    match status {
        None => Ok(false),
        Some(s) => match DocumentStatus::from_str_ci(s).map(DocumentStatus::normalized) {
            Some(DocumentStatus::Draft) => Ok(true),
            Some(DocumentStatus::Submitted) => Ok(false),
            _ => Err(WorkflowError::InvalidInput(format!(
                "status must be draft or submitted, got {s}"
            ))),
        },
    }
}

/// `GET /api/submitter/documents` — the acting submitter's documents.
pub async fn list_documents(
    State(state): State<AppState>,
    actor: AuthenticatedUser,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<Document>>, WorkflowError> {
    let filter = query.into_filter()?;
    let docs = state.engine.submitter_documents(&actor, &filter).await?;
    Ok(Json(docs))
}

/// `GET /api/submitter/documents/summary` — per-status counts.
pub async fn summary(
    State(state): State<AppState>,
    actor: AuthenticatedUser,
) -> Result<Json<StatusSummary>, WorkflowError> {
    Ok(Json(state.engine.submitter_summary(&actor).await?))
}

/// `POST /api/submitter/documents` — create a document as draft or submitted.
pub async fn create_document(
    State(state): State<AppState>,
    actor: AuthenticatedUser,
    Json(req): Json<CreateDocumentRequest>,
) -> Result<Json<Document>, WorkflowError> {
    let draft = as_draft(req.status.as_deref())?;
    let input = NewDocument {
        title: req.title,
        file_ref: req.file_ref,
        file_name: req.file_name,
        file_type: req.file_type,
        remarks: req.remarks,
    };
    let doc = state.engine.create_document(&actor, input, draft).await?;
    Ok(Json(doc))
}

/// `GET /api/submitter/documents/{id}`
pub async fn get_document(
    State(state): State<AppState>,
    actor: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> Result<Json<Document>, WorkflowError> {
    Ok(Json(state.engine.get_document(&actor, id).await?))
}

/// `PUT /api/submitter/documents/{id}` — edit and save as draft or resubmit.
pub async fn update_document(
    State(state): State<AppState>,
    actor: AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateDocumentRequest>,
) -> Result<Json<Document>, WorkflowError> {
    let resubmit = match req.status.as_deref() {
        None => false,
        Some(s) => !as_draft(Some(s))?,
    };
    let edit = DocumentEdit {
        title: req.title,
        file_ref: req.file_ref,
        file_name: req.file_name,
        file_type: req.file_type,
        remarks: req.remarks,
    };
    let doc = state.engine.edit_document(&actor, id, edit, resubmit).await?;
    Ok(Json(doc))
}
