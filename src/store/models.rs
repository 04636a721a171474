use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::workflow::status::DocumentStatus;

/// A document moving through the approval workflow.
///
/// `owner` and `created_at` never change after creation. `status` is only
/// ever written by the workflow engine, and the remarks fields belong to the
/// role that set them: `remarks` to the owner, `reviewer_remarks` to the
/// reviewer, `approver_remarks` to the approver.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: Uuid,
    pub title: String,
    /// User id of the submitter who created the document.
    pub owner: String,
    /// Opaque reference to the stored binary content; replaced on edit.
    pub file_ref: String,
    /// Original filename, kept for display.
    #[serde(default)]
    pub file_name: Option<String>,
    /// MIME hint, kept for display.
    #[serde(default)]
    pub file_type: Option<String>,
    pub status: DocumentStatus,
    /// Submitter-authored free text.
    #[serde(default)]
    pub remarks: Option<String>,
    #[serde(default)]
    pub reviewer_remarks: Option<String>,
    #[serde(default)]
    pub approver_remarks: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Set on reviewer decisions, never cleared.
    #[serde(default)]
    pub reviewed_at: Option<DateTime<Utc>>,
    /// Set when the approver finalizes, never cleared.
    #[serde(default)]
    pub finalized_at: Option<DateTime<Utc>>,
}

impl Document {
    /// Build a fresh document in the given initial status.
    pub fn new(
        owner: impl Into<String>,
        title: impl Into<String>,
        file_ref: impl Into<String>,
        status: DocumentStatus,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            owner: owner.into(),
            file_ref: file_ref.into(),
            file_name: None,
            file_type: None,
            status,
            remarks: None,
            reviewer_remarks: None,
            approver_remarks: None,
            created_at: now,
            updated_at: now,
            reviewed_at: None,
            finalized_at: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_document_timestamps() {
        let doc = Document::new("user-1", "Q4 Report", "files/q4.pdf", DocumentStatus::Draft);
        assert_eq!(doc.created_at, doc.updated_at);
        assert_eq!(doc.status, DocumentStatus::Draft);
        assert!(doc.reviewed_at.is_none());
        assert!(doc.finalized_at.is_none());
    }

    #[test]
    fn test_serialization_uses_camel_case() {
        let doc = Document::new("user-1", "Q4 Report", "files/q4.pdf", DocumentStatus::Submitted);
        let json = serde_json::to_string(&doc).unwrap();
        assert!(json.contains("\"createdAt\""));
        assert!(json.contains("\"fileRef\""));
        assert!(json.contains("\"reviewerRemarks\""));
        assert!(json.contains("\"status\":\"submitted\""));
    }

    #[test]
    fn test_deserialization_defaults_optional_fields() {
        let json = r###"{
            "id": "7f1b9a32-48cb-4ce5-b364-2f49a1e21a01",
            "title": "Old Record",
            "owner": "user-2",
            "fileRef": "files/old.docx",
            "status": "approved",
            "createdAt": "2024-01-01T00:00:00Z",
            "updatedAt": "2024-01-02T00:00:00Z"
        }"###;

        let doc: Document = serde_json::from_str(json).unwrap();
        assert_eq!(doc.status, DocumentStatus::Approved);
        assert_eq!(doc.remarks, None);
        assert_eq!(doc.reviewer_remarks, None);
        assert_eq!(doc.reviewed_at, None);
    }
}
