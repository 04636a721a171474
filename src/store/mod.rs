pub mod memory;
pub mod models;

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use uuid::Uuid;

use crate::error::WorkflowError;
use crate::store::models::Document;

/// Keyed storage of document records.
///
/// This trait is the seam between the workflow engine and whatever durable
/// backend holds the documents; it also allows mocking the storage layer in
/// tests. The engine serializes writes per document id, so implementations
/// only need atomicity at the single-call level.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Persist a newly created document.
    async fn insert(&self, doc: Document) -> Result<(), WorkflowError>;

    /// Find a document by id.
    async fn find(&self, id: Uuid) -> Result<Option<Document>, WorkflowError>;

    /// Replace an existing document. Fails with `NotFound` if the id is
    /// unknown.
    async fn replace(&self, doc: Document) -> Result<(), WorkflowError>;

    /// A consistent snapshot of every stored document.
    ///
    /// Queue views are computed from this snapshot; it must never block a
    /// concurrent transition.
    async fn list_all(&self) -> Result<Vec<Document>, WorkflowError>;
}
