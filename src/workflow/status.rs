use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed set of document lifecycle states.
///
/// The status only ever changes through the workflow engine's transition
/// table; no other mutation path may touch it. `PendingApproval` is a legacy
/// rendering of the reviewer-facing state still emitted by older clients; the
/// engine itself only writes `Submitted` and the parser accepts both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentStatus {
    /// Private to its owner, freely editable.
    Draft,
    /// Awaiting first-pass review.
    Submitted,
    /// Legacy alias for the reviewer-facing state.
    #[serde(rename = "pending")]
    PendingApproval,
    /// Reviewer-approved, awaiting the approver's final disposition.
    Approved,
    /// Final approval granted. Terminal.
    Finalized,
    /// Retired without finalization. Terminal.
    Archived,
    /// Sent back to the owner with remarks; editable again.
    Rejected,
}

impl DocumentStatus {
    /// Parse a status from a string (case-insensitive).
    ///
    /// This is the single canonical parser; nothing else in the codebase
    /// compares status strings.
    pub fn from_str_ci(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "draft" => Some(DocumentStatus::Draft),
            "submitted" => Some(DocumentStatus::Submitted),
            "pending" | "pendingapproval" | "pending_approval" | "pending-approval" => {
                Some(DocumentStatus::PendingApproval)
            }
            "approved" => Some(DocumentStatus::Approved),
            "finalized" => Some(DocumentStatus::Finalized),
            "archived" => Some(DocumentStatus::Archived),
            "rejected" => Some(DocumentStatus::Rejected),
            _ => None,
        }
    }

    /// Collapse the legacy alias onto the canonical reviewer-facing state.
    pub fn normalized(self) -> Self {
        match self {
            DocumentStatus::PendingApproval => DocumentStatus::Submitted,
            other => other,
        }
    }

    /// Terminal states have no outgoing transitions.
    pub fn is_terminal(self) -> bool {
        matches!(self, DocumentStatus::Finalized | DocumentStatus::Archived)
    }

    /// The owner may edit title/file/remarks only in these states.
    pub fn is_editable(self) -> bool {
        matches!(self, DocumentStatus::Draft | DocumentStatus::Rejected)
    }

    /// Whether the document sits in the reviewer's worklist.
    pub fn awaiting_review(self) -> bool {
        self.normalized() == DocumentStatus::Submitted
    }
}

impl fmt::Display for DocumentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentStatus::Draft => write!(f, "draft"),
            DocumentStatus::Submitted => write!(f, "submitted"),
            DocumentStatus::PendingApproval => write!(f, "pending"),
            DocumentStatus::Approved => write!(f, "approved"),
            DocumentStatus::Finalized => write!(f, "finalized"),
            DocumentStatus::Archived => write!(f, "archived"),
            DocumentStatus::Rejected => write!(f, "rejected"),
        }
    }
}
