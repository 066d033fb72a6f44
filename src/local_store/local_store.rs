use super::error::Error;
use async_trait::async_trait;

///
/// Persistent key-value store of strings backing read marks and other
/// per-device state. Survives process restarts.
///
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LocalStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, Error>;

    async fn set(&self, key: &str, value: &str) -> Result<(), Error>;

    async fn remove(&self, key: &str) -> Result<(), Error>;
}
