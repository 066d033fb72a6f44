use super::{error::Error, local_store::LocalStore};
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::Mutex;

///
/// Infallible [LocalStore] that keeps everything in process memory.
/// Meant for tests and for hosts without durable storage.
///
#[derive(Default)]
pub struct InMemoryLocalStore {
    entries: Mutex<HashMap<String, String>>,
}

impl InMemoryLocalStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LocalStore for InMemoryLocalStore {
    async fn get(&self, key: &str) -> Result<Option<String>, Error> {
        let entries = self.entries.lock().await;

        Ok(entries.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), Error> {
        let mut entries = self.entries.lock().await;
        entries.insert(key.to_string(), value.to_string());

        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), Error> {
        let mut entries = self.entries.lock().await;
        entries.remove(key);

        Ok(())
    }
}
