use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::auth::gate::{authorize, WorkflowAction};
use crate::auth::models::{AuthenticatedUser, Role};
use crate::error::WorkflowError;
use crate::store::models::Document;
use crate::store::DocumentStore;
use crate::workflow::status::DocumentStatus;
use crate::workflow::views::{self, ListFilter, StatusSummary};

/// Input for document creation.
#[derive(Debug, Clone)]
pub struct NewDocument {
    pub title: String,
    pub file_ref: String,
    pub file_name: Option<String>,
    pub file_type: Option<String>,
    pub remarks: Option<String>,
}

/// Partial update applied by the owner while the document is editable.
#[derive(Debug, Clone, Default)]
pub struct DocumentEdit {
    pub title: Option<String>,
    pub file_ref: Option<String>,
    pub file_name: Option<String>,
    pub file_type: Option<String>,
    pub remarks: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewerDecision {
    Approve,
    Reject,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApproverDecision {
    Finalize,
    Archive,
    Reject,
}

/// Validates and applies document lifecycle transitions.
///
/// Every mutation on a given document runs as a single atomic
/// read-modify-write under an exclusive per-id lock: validate against the
/// transition table and capability matrix, then commit, or fail leaving the
/// stored document untouched. Operations on different ids never block each
/// other, and snapshot reads (queue views, gets) never take these locks.
pub struct WorkflowEngine {
    store: Arc<dyn DocumentStore>,
    locks: Mutex<HashMap<Uuid, Arc<Mutex<()>>>>,
}

impl WorkflowEngine {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            store,
            locks: Mutex::new(HashMap::new()),
        }
    }

    /// Fetch (lazily creating) the exclusive lock for a document id.
    ///
    /// The table guard is dropped before the per-document lock is taken, so
    /// a held document lock never blocks lookups for other ids.
    async fn lock_for(&self, id: Uuid) -> Arc<Mutex<()>> {
        let mut table = self.locks.lock().await;
        table
            .entry(id)
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }

    /// Drop the table entry for `id` unless another task still holds a
    /// clone of the lock.
    ///
    /// Clones are only handed out under the table guard, so the strong
    /// count cannot grow while we inspect it: two refs means ours plus the
    /// table's, and the entry is safe to remove.
    async fn evict_if_unused(&self, id: Uuid, lock: &Arc<Mutex<()>>) {
        let mut table = self.locks.lock().await;
        if Arc::strong_count(lock) <= 2 {
            table.remove(&id);
        }
    }

    /// Take the exclusive lock for `id` and load the document under it.
    ///
    /// Unknown ids fail with `NotFound` and leave no trace in the lock
    /// table, so probing random ids cannot grow it.
    async fn lock_document(
        &self,
        id: Uuid,
    ) -> Result<(tokio::sync::OwnedMutexGuard<()>, Document), WorkflowError> {
        let lock = self.lock_for(id).await;
        let guard = Arc::clone(&lock).lock_owned().await;
        match self.store.find(id).await {
            Ok(Some(doc)) => Ok((guard, doc)),
            Ok(None) => {
                drop(guard);
                self.evict_if_unused(id, &lock).await;
                Err(WorkflowError::NotFound(id))
            }
            Err(err) => {
                drop(guard);
                self.evict_if_unused(id, &lock).await;
                Err(err)
            }
        }
    }

    #[cfg(test)]
    async fn lock_table_len(&self) -> usize {
        self.locks.lock().await.len()
    }

    /// Create a document in `Draft` (save-as-draft) or directly `Submitted`.
    pub async fn create_document(
        &self,
        actor: &AuthenticatedUser,
        input: NewDocument,
        as_draft: bool,
    ) -> Result<Document, WorkflowError> {
        let action = if as_draft {
            WorkflowAction::CreateDraft
        } else {
            WorkflowAction::SubmitNew
        };
        authorize(actor.role, action)?;

        if input.title.trim().is_empty() {
            return Err(WorkflowError::InvalidInput("title must not be empty".into()));
        }
        if input.file_ref.trim().is_empty() {
            return Err(WorkflowError::InvalidInput("a file is required".into()));
        }

        let status = if as_draft {
            DocumentStatus::Draft
        } else {
            DocumentStatus::Submitted
        };
        let mut doc = Document::new(actor.user_id.clone(), input.title, input.file_ref, status);
        doc.file_name = input.file_name;
        doc.file_type = input.file_type;
        doc.remarks = input.remarks;

        self.store.insert(doc.clone()).await?;
        tracing::info!(id = %doc.id, owner = %doc.owner, status = %doc.status, "document created");
        Ok(doc)
    }

    /// Edit an editable document, saving it back as `Draft` or resubmitting.
    ///
    /// Only the owner may edit, and only while the status is `Draft` or
    /// `Rejected`; anything else is locked to protect in-flight review
    /// integrity.
    pub async fn edit_document(
        &self,
        actor: &AuthenticatedUser,
        id: Uuid,
        edit: DocumentEdit,
        resubmit: bool,
    ) -> Result<Document, WorkflowError> {
        let action = if resubmit {
            WorkflowAction::EditAndSubmit
        } else {
            WorkflowAction::EditAndSaveDraft
        };
        authorize(actor.role, action)?;

        if let Some(title) = &edit.title {
            if title.trim().is_empty() {
                return Err(WorkflowError::InvalidInput("title must not be empty".into()));
            }
        }

        let (_guard, mut doc) = self.lock_document(id).await?;

        if doc.owner != actor.user_id {
            return Err(WorkflowError::Forbidden(
                "only the owner may edit a document".into(),
            ));
        }
        if !doc.status.is_editable() {
            return Err(WorkflowError::DocumentLocked(doc.status));
        }

        if let Some(title) = edit.title {
            doc.title = title;
        }
        if let Some(file_ref) = edit.file_ref {
            doc.file_ref = file_ref;
        }
        if let Some(file_name) = edit.file_name {
            doc.file_name = Some(file_name);
        }
        if let Some(file_type) = edit.file_type {
            doc.file_type = Some(file_type);
        }
        if let Some(remarks) = edit.remarks {
            doc.remarks = Some(remarks);
        }

        let from = doc.status;
        doc.status = if resubmit {
            DocumentStatus::Submitted
        } else {
            DocumentStatus::Draft
        };
        doc.updated_at = Utc::now();

        self.store.replace(doc.clone()).await?;
        tracing::info!(id = %doc.id, %from, to = %doc.status, "document edited");
        Ok(doc)
    }

    /// Apply a first-pass review decision to a `Submitted` document.
    pub async fn reviewer_decide(
        &self,
        actor: &AuthenticatedUser,
        id: Uuid,
        decision: ReviewerDecision,
        remarks: Option<String>,
    ) -> Result<Document, WorkflowError> {
        let action = match decision {
            ReviewerDecision::Approve => WorkflowAction::ReviewerApprove,
            ReviewerDecision::Reject => WorkflowAction::ReviewerReject,
        };
        authorize(actor.role, action)?;

        let (_guard, mut doc) = self.lock_document(id).await?;

        if doc.status.is_terminal() {
            return Err(WorkflowError::DocumentLocked(doc.status));
        }
        if !doc.status.awaiting_review() {
            return Err(WorkflowError::InvalidTransition {
                operation: action,
                from: doc.status,
            });
        }

        let now = Utc::now();
        match decision {
            ReviewerDecision::Approve => {
                doc.status = DocumentStatus::Approved;
                if let Some(remarks) = non_empty(remarks) {
                    doc.reviewer_remarks = Some(remarks);
                }
            }
            ReviewerDecision::Reject => {
                doc.reviewer_remarks = Some(required_remarks(remarks)?);
                doc.status = DocumentStatus::Rejected;
            }
        }
        doc.reviewed_at = Some(now);
        doc.updated_at = now;

        self.store.replace(doc.clone()).await?;
        tracing::info!(id = %doc.id, reviewer = %actor.user_id, to = %doc.status, "review decision applied");
        Ok(doc)
    }

    /// Apply the final disposition to a reviewer-`Approved` document.
    ///
    /// Rejection preserves the existing reviewer remarks so the owner can
    /// still see the first-pass feedback.
    pub async fn approver_decide(
        &self,
        actor: &AuthenticatedUser,
        id: Uuid,
        decision: ApproverDecision,
        remarks: Option<String>,
    ) -> Result<Document, WorkflowError> {
        let action = match decision {
            ApproverDecision::Finalize => WorkflowAction::Finalize,
            ApproverDecision::Archive => WorkflowAction::Archive,
            ApproverDecision::Reject => WorkflowAction::ApproverReject,
        };
        authorize(actor.role, action)?;

        let (_guard, mut doc) = self.lock_document(id).await?;

        if doc.status.is_terminal() {
            return Err(WorkflowError::DocumentLocked(doc.status));
        }
        if doc.status.normalized() != DocumentStatus::Approved {
            return Err(WorkflowError::InvalidTransition {
                operation: action,
                from: doc.status,
            });
        }

        let now = Utc::now();
        match decision {
            ApproverDecision::Finalize => {
                doc.status = DocumentStatus::Finalized;
                doc.finalized_at = Some(now);
                if let Some(remarks) = non_empty(remarks) {
                    doc.approver_remarks = Some(remarks);
                }
            }
            ApproverDecision::Archive => {
                doc.status = DocumentStatus::Archived;
                if let Some(remarks) = non_empty(remarks) {
                    doc.approver_remarks = Some(remarks);
                }
            }
            ApproverDecision::Reject => {
                doc.approver_remarks = Some(required_remarks(remarks)?);
                doc.status = DocumentStatus::Rejected;
            }
        }
        doc.updated_at = now;

        self.store.replace(doc.clone()).await?;
        tracing::info!(id = %doc.id, approver = %actor.user_id, to = %doc.status, "final disposition applied");
        Ok(doc)
    }

    /// Fetch a single document, enforcing the same visibility rules as the
    /// mutation paths: submitters see only their own documents, reviewers
    /// and approvers see everything except another user's draft.
    pub async fn get_document(
        &self,
        actor: &AuthenticatedUser,
        id: Uuid,
    ) -> Result<Document, WorkflowError> {
        let doc = self
            .store
            .find(id)
            .await?
            .ok_or(WorkflowError::NotFound(id))?;

        let visible = match actor.role {
            Role::Submitter => doc.owner == actor.user_id,
            Role::Reviewer | Role::Approver => {
                doc.status.normalized() != DocumentStatus::Draft || doc.owner == actor.user_id
            }
        };
        if !visible {
            return Err(WorkflowError::Forbidden(
                "document is not visible to this user".into(),
            ));
        }
        Ok(doc)
    }

    /// Reviewer worklist: submitted documents, first come first served.
    pub async fn reviewer_pending(
        &self,
        actor: &AuthenticatedUser,
    ) -> Result<Vec<Document>, WorkflowError> {
        require_role(actor, Role::Reviewer)?;
        Ok(views::reviewer_pending(self.store.list_all().await?))
    }

    /// Reviewer history: decided documents, most recent decision first.
    pub async fn reviewer_history(
        &self,
        actor: &AuthenticatedUser,
    ) -> Result<Vec<Document>, WorkflowError> {
        require_role(actor, Role::Reviewer)?;
        Ok(views::reviewer_history(self.store.list_all().await?))
    }

    /// Approver worklist: reviewer-approved documents, oldest created first.
    pub async fn approver_pending(
        &self,
        actor: &AuthenticatedUser,
    ) -> Result<Vec<Document>, WorkflowError> {
        require_role(actor, Role::Approver)?;
        Ok(views::approver_pending(self.store.list_all().await?))
    }

    /// Approver history: dispositioned documents, most recent first.
    pub async fn approver_processed(
        &self,
        actor: &AuthenticatedUser,
    ) -> Result<Vec<Document>, WorkflowError> {
        require_role(actor, Role::Approver)?;
        Ok(views::approver_processed(self.store.list_all().await?))
    }

    /// The acting submitter's documents, filtered and sorted.
    pub async fn submitter_documents(
        &self,
        actor: &AuthenticatedUser,
        filter: &ListFilter,
    ) -> Result<Vec<Document>, WorkflowError> {
        require_role(actor, Role::Submitter)?;
        Ok(views::submitter_documents(
            self.store.list_all().await?,
            &actor.user_id,
            filter,
        ))
    }

    /// Per-status counts over the acting submitter's documents.
    pub async fn submitter_summary(
        &self,
        actor: &AuthenticatedUser,
    ) -> Result<StatusSummary, WorkflowError> {
        require_role(actor, Role::Submitter)?;
        let docs = self.store.list_all().await?;
        Ok(views::status_summary(&docs, &actor.user_id))
    }
}

fn require_role(actor: &AuthenticatedUser, role: Role) -> Result<(), WorkflowError> {
    if actor.role == role {
        Ok(())
    } else {
        tracing::warn!(user = %actor.user_id, have = %actor.role, want = %role, "queue access denied");
        Err(WorkflowError::Forbidden(format!(
            "role {} may not access the {role} queue",
            actor.role
        )))
    }
}

fn non_empty(remarks: Option<String>) -> Option<String> {
    remarks.filter(|r| !r.trim().is_empty())
}

fn required_remarks(remarks: Option<String>) -> Result<String, WorkflowError> {
    non_empty(remarks).ok_or(WorkflowError::MissingRequiredRemarks)
}
