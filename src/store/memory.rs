use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::WorkflowError;
use crate::store::models::Document;
use crate::store::DocumentStore;

/// In-memory implementation of the [`DocumentStore`].
///
/// Documents live in a map behind a read-write lock; `list_all` clones the
/// current contents under the read lock, which gives queue views a consistent
/// snapshot without ever taking the engine's per-document locks.
#[derive(Default)]
pub struct InMemoryDocumentStore {
    documents: RwLock<HashMap<Uuid, Document>>,
}

impl InMemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn insert(&self, doc: Document) -> Result<(), WorkflowError> {
        let mut documents = self.documents.write().await;
        if documents.contains_key(&doc.id) {
            return Err(WorkflowError::Store(format!(
                "duplicate document id {}",
                doc.id
            )));
        }
        documents.insert(doc.id, doc);
        Ok(())
    }

    async fn find(&self, id: Uuid) -> Result<Option<Document>, WorkflowError> {
        let documents = self.documents.read().await;
        Ok(documents.get(&id).cloned())
    }

    async fn replace(&self, doc: Document) -> Result<(), WorkflowError> {
        let mut documents = self.documents.write().await;
        match documents.get_mut(&doc.id) {
            Some(slot) => {
                *slot = doc;
                Ok(())
            }
            None => Err(WorkflowError::NotFound(doc.id)),
        }
    }

    async fn list_all(&self) -> Result<Vec<Document>, WorkflowError> {
        let documents = self.documents.read().await;
        Ok(documents.values().cloned().collect())
    }
}
