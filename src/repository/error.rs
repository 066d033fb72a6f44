use std::time::Duration;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("content repository unavailable: {0}")]
    Unavailable(String),

    #[error("content repository query timed out after {0:?}")]
    Timeout(Duration),
}
