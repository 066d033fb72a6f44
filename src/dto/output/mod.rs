mod feed_snapshot;
mod notification_group;

pub use feed_snapshot::*;
pub use notification_group::*;
