use serde::{Deserialize, Serialize};

use crate::store::models::Document;
use crate::workflow::status::DocumentStatus;

/// Sort order for the submitter's document list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Newest,
    Oldest,
    Title,
}

impl SortOrder {
    pub fn from_str_ci(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "newest" => Some(SortOrder::Newest),
            "oldest" => Some(SortOrder::Oldest),
            "title" => Some(SortOrder::Title),
            _ => None,
        }
    }
}

/// Filter for the submitter's document list.
#[derive(Debug, Clone, Default)]
pub struct ListFilter {
    /// Keep only documents in this status (legacy alias normalized).
    pub status: Option<DocumentStatus>,
    /// Case-insensitive substring match against the title.
    pub search: Option<String>,
    pub sort: SortOrder,
}

/// Per-status counts shown on the submitter dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StatusSummary {
    pub total: usize,
    pub draft: usize,
    pub submitted: usize,
    pub approved: usize,
    pub rejected: usize,
}

// The views below are pure projections over a store snapshot; they never
// mutate documents and never take the per-document lock.

/// Documents awaiting first-pass review, strict first-come-first-served.
/// Ties on `created_at` break by `id` ascending for determinism.
pub fn reviewer_pending(mut docs: Vec<Document>) -> Vec<Document> {
    docs.retain(|d| d.status.awaiting_review());
    docs.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
    docs
}

/// Documents the reviewer already decided on, most recent decision first.
pub fn reviewer_history(mut docs: Vec<Document>) -> Vec<Document> {
    docs.retain(|d| {
        matches!(
            d.status.normalized(),
            DocumentStatus::Approved | DocumentStatus::Rejected
        ) && d.reviewed_at.is_some()
    });
    docs.sort_by(|a, b| b.reviewed_at.cmp(&a.reviewed_at).then(a.id.cmp(&b.id)));
    docs
}

/// Reviewer-approved documents awaiting the approver, oldest created first
/// (not review time).
pub fn approver_pending(mut docs: Vec<Document>) -> Vec<Document> {
    docs.retain(|d| d.status.normalized() == DocumentStatus::Approved);
    docs.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
    docs
}

/// Documents the approver has dispositioned, most recent first. Ordered by
/// `finalized_at` where present, falling back to `updated_at`.
pub fn approver_processed(mut docs: Vec<Document>) -> Vec<Document> {
    docs.retain(|d| {
        matches!(
            d.status.normalized(),
            DocumentStatus::Finalized | DocumentStatus::Archived | DocumentStatus::Rejected
        )
    });
    docs.sort_by(|a, b| {
        let a_key = a.finalized_at.unwrap_or(a.updated_at);
        let b_key = b.finalized_at.unwrap_or(b.updated_at);
        b_key.cmp(&a_key).then(a.id.cmp(&b.id))
    });
    docs
}

/// The acting submitter's own documents, filtered and sorted.
pub fn submitter_documents(mut docs: Vec<Document>, owner: &str, filter: &ListFilter) -> Vec<Document> {
    docs.retain(|d| d.owner == owner);
    if let Some(status) = filter.status {
        docs.retain(|d| d.status.normalized() == status.normalized());
    }
    if let Some(search) = &filter.search {
        let needle = search.to_lowercase();
        docs.retain(|d| d.title.to_lowercase().contains(&needle));
    }
    match filter.sort {
        SortOrder::Newest => {
            docs.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(a.id.cmp(&b.id)))
        }
        SortOrder::Oldest => {
            docs.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)))
        }
        SortOrder::Title => docs.sort_by(|a, b| {
            a.title
                .to_lowercase()
                .cmp(&b.title.to_lowercase())
                .then(a.id.cmp(&b.id))
        }),
    }
    docs
}

/// Per-status counts over the acting submitter's documents.
pub fn status_summary(docs: &[Document], owner: &str) -> StatusSummary {
    let mine: Vec<&Document> = docs.iter().filter(|d| d.owner == owner).collect();
    StatusSummary {
        total: mine.len(),
        draft: mine
            .iter()
            .filter(|d| d.status.normalized() == DocumentStatus::Draft)
            .count(),
        submitted: mine.iter().filter(|d| d.status.awaiting_review()).count(),
        approved: mine
            .iter()
            .filter(|d| d.status.normalized() == DocumentStatus::Approved)
            .count(),
        rejected: mine
            .iter()
            .filter(|d| d.status.normalized() == DocumentStatus::Rejected)
            .count(),
    }
}
