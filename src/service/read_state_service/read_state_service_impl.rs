use super::ReadStateService;
use crate::local_store::LocalStore;
use async_trait::async_trait;
use std::{
    collections::{HashMap, HashSet},
    sync::Arc,
};
use tokio::sync::Mutex;
use uuid::Uuid;

/// All subject users share one serialized map under this key;
/// entries are namespaced by `{subject_user_id}_{group_id}`
const READ_MARKS_KEY: &str = "notification_read_marks";

pub struct ReadStateServiceImpl {
    store: Arc<dyn LocalStore>,

    /// Marks written this session. Serves two purposes: it serializes
    /// read-modify-write cycles on the store, and it carries read state
    /// for the rest of the session when the store is unavailable.
    session_marks: Mutex<HashSet<String>>,
}

impl ReadStateServiceImpl {
    pub fn new(store: Arc<dyn LocalStore>) -> Self {
        let session_marks = HashSet::new();
        let session_marks = Mutex::new(session_marks);

        Self {
            store,
            session_marks,
        }
    }

    fn mark_key(subject_user_id: Uuid, group_id: &str) -> String {
        format!("{subject_user_id}_{group_id}")
    }

    async fn load_marks(&self) -> HashMap<String, bool> {
        let value = match self.store.get(READ_MARKS_KEY).await {
            Ok(value) => value,
            Err(err) => {
                tracing::warn!(%err, "failed to read marks from local store");
                return HashMap::new();
            }
        };

        let Some(value) = value else {
            return HashMap::new();
        };

        match serde_json::from_str(&value) {
            Ok(marks) => marks,
            Err(err) => {
                tracing::warn!(%err, "stored read marks are malformed, starting over");
                HashMap::new()
            }
        }
    }

    async fn persist_marks(&self, marks: &HashMap<String, bool>) {
        let value = match serde_json::to_string(marks) {
            Ok(value) => value,
            Err(err) => {
                tracing::warn!(%err, "failed to serialize read marks");
                return;
            }
        };

        if let Err(err) = self.store.set(READ_MARKS_KEY, &value).await {
            tracing::warn!(%err, "failed to persist read marks, keeping in-memory only");
        }
    }
}

#[async_trait]
impl ReadStateService for ReadStateServiceImpl {
    async fn snapshot(&self, subject_user_id: Uuid) -> HashSet<String> {
        let session_marks = self.session_marks.lock().await;
        let persisted = self.load_marks().await;

        let prefix = format!("{subject_user_id}_");
        persisted
            .into_iter()
            .filter(|(_, read)| *read)
            .map(|(key, _)| key)
            .chain(session_marks.iter().cloned())
            .filter_map(|key| key.strip_prefix(&prefix).map(str::to_string))
            .collect()
    }

    async fn set(&self, subject_user_id: Uuid, group_id: &str) {
        tracing::debug!(group_id, "marking notification group read");

        let key = Self::mark_key(subject_user_id, group_id);

        let mut session_marks = self.session_marks.lock().await;
        session_marks.insert(key.clone());

        let mut marks = self.load_marks().await;
        marks.insert(key, true);
        self.persist_marks(&marks).await;
    }

    async fn set_many(&self, subject_user_id: Uuid, group_ids: &[String]) {
        tracing::debug!(count = group_ids.len(), "marking notification groups read");

        if group_ids.is_empty() {
            return;
        }

        let mut session_marks = self.session_marks.lock().await;
        let mut marks = self.load_marks().await;
        for group_id in group_ids {
            let key = Self::mark_key(subject_user_id, group_id);
            session_marks.insert(key.clone());
            marks.insert(key, true);
        }
        self.persist_marks(&marks).await;
    }
}
