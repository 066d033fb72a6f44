mod content_repository;
mod error;

pub use content_repository::*;
pub use error::*;
