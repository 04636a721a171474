use serde::Serialize;
use std::fmt;

use crate::auth::models::Role;
use crate::error::WorkflowError;

/// Every operation the workflow engine can be asked to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum WorkflowAction {
    CreateDraft,
    SubmitNew,
    EditAndSaveDraft,
    EditAndSubmit,
    ReviewerApprove,
    ReviewerReject,
    Finalize,
    Archive,
    ApproverReject,
}

impl fmt::Display for WorkflowAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            WorkflowAction::CreateDraft => "create-draft",
            WorkflowAction::SubmitNew => "submit-new",
            WorkflowAction::EditAndSaveDraft => "edit-and-save-draft",
            WorkflowAction::EditAndSubmit => "edit-and-submit",
            WorkflowAction::ReviewerApprove => "approve",
            WorkflowAction::ReviewerReject => "reject",
            WorkflowAction::Finalize => "finalize",
            WorkflowAction::Archive => "archive",
            WorkflowAction::ApproverReject => "reject",
        };
        write!(f, "{name}")
    }
}

/// The fixed capability matrix: which actions each role may invoke.
pub fn allowed_actions(role: Role) -> &'static [WorkflowAction] {
    match role {
        Role::Submitter => &[
            WorkflowAction::CreateDraft,
            WorkflowAction::SubmitNew,
            WorkflowAction::EditAndSaveDraft,
            WorkflowAction::EditAndSubmit,
        ],
        Role::Reviewer => &[WorkflowAction::ReviewerApprove, WorkflowAction::ReviewerReject],
        Role::Approver => &[
            WorkflowAction::Finalize,
            WorkflowAction::Archive,
            WorkflowAction::ApproverReject,
        ],
    }
}

/// Check whether `role` may invoke `action`.
///
/// Denials short-circuit before the engine inspects or mutates any document
/// state. Ownership is enforced separately by the engine.
pub fn authorize(role: Role, action: WorkflowAction) -> Result<(), WorkflowError> {
    if allowed_actions(role).contains(&action) {
        Ok(())
    } else {
        tracing::warn!(%role, %action, "capability check denied");
        Err(WorkflowError::Forbidden(format!(
            "role {role} may not perform {action}"
        )))
    }
}
