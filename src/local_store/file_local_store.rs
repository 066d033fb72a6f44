use super::{error::Error, local_store::LocalStore};
use async_trait::async_trait;
use std::{collections::HashMap, path::PathBuf};
use tokio::sync::Mutex;

///
/// [LocalStore] backed by a single JSON file.
///
/// The whole map is kept in memory and rewritten on every mutation.
/// Values are small (read-mark maps), so no incremental format is needed.
///
pub struct FileLocalStore {
    path: PathBuf,
    entries: Mutex<HashMap<String, String>>,
}

impl FileLocalStore {
    ///
    /// Opens the store, loading existing entries when the file is present.
    ///
    /// ### Errors
    /// - [Error::Io] when the file exists but cannot be read
    /// - [Error::Serialization] when the file content is not a valid map
    ///
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, Error> {
        let path = path.into();

        let entries = match tokio::fs::read_to_string(&path).await {
            Ok(content) => serde_json::from_str(&content)?,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => HashMap::new(),
            Err(err) => return Err(Error::Io(err)),
        };
        let entries = Mutex::new(entries);

        Ok(Self { path, entries })
    }

    async fn flush(&self, entries: &HashMap<String, String>) -> Result<(), Error> {
        let content = serde_json::to_string(entries)?;
        tokio::fs::write(&self.path, content).await?;

        Ok(())
    }
}

#[async_trait]
impl LocalStore for FileLocalStore {
    async fn get(&self, key: &str) -> Result<Option<String>, Error> {
        let entries = self.entries.lock().await;

        Ok(entries.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), Error> {
        let mut entries = self.entries.lock().await;
        entries.insert(key.to_string(), value.to_string());

        self.flush(&entries).await
    }

    async fn remove(&self, key: &str) -> Result<(), Error> {
        let mut entries = self.entries.lock().await;
        entries.remove(key);

        self.flush(&entries).await
    }
}
