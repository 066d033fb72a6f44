mod actor;
mod content_item;
mod interaction_record;

pub use actor::*;
pub use content_item::*;
pub use interaction_record::*;
