//! In-memory edit sessions.
//!
//! Each session holds one independent copy of a node document for the
//! lifetime of the edit. Nothing is persisted here; abandoning a session
//! simply drops the document, and concurrent sessions never share state.

use std::collections::HashMap;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::Node;

/// Store of live edit sessions keyed by opaque session id.
#[derive(Default)]
pub struct SessionStore {
    sessions: RwLock<HashMap<String, Node>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a session around a freshly fetched document.
    pub async fn open(&self, document: Node) -> String {
        let id = Uuid::new_v4().to_string();
        self.sessions.write().await.insert(id.clone(), document);
        tracing::info!(session_id = %id, "edit session opened");
        id
    }

    /// Snapshot of the session's current document.
    pub async fn document(&self, id: &str) -> Option<Node> {
        self.sessions.read().await.get(id).cloned()
    }

    /// Run `mutate` against the live document. Returns `None` when the
    /// session does not exist; the closure's own result otherwise.
    pub async fn with_document<R>(
        &self,
        id: &str,
        mutate: impl FnOnce(&mut Node) -> R,
    ) -> Option<R> {
        let mut sessions = self.sessions.write().await;
        sessions.get_mut(id).map(mutate)
    }

    /// Discard a session. Idempotent.
    pub async fn discard(&self, id: &str) {
        if self.sessions.write().await.remove(id).is_some() {
            tracing::info!(session_id = %id, "edit session discarded");
        }
    }
}
