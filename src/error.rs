use crate::{local_store, repository};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("repository error: {0}")]
    RepositoryUnavailable(#[from] repository::Error),

    #[error("storage error: {0}")]
    StorageUnavailable(#[from] local_store::Error),
}
