mod error;
mod file_local_store;
mod in_memory_local_store;
mod local_store;

pub use error::*;
pub use file_local_store::*;
pub use in_memory_local_store::*;
pub use local_store::*;
