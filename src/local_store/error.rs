#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("local store io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("local store serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
