use crate::dto::output;
use async_trait::async_trait;

///
/// Stateful façade over the notification feed, exposed to the UI layer.
///
/// No operation returns an error or panics: failures surface only
/// through the `error` field of the snapshot.
///
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FeedService: Send + Sync {
    ///
    /// Loads the feed: initial load when no data is displayed yet,
    /// refresh over existing data otherwise. On success the displayed
    /// list is replaced wholesale; on failure the previous list stays
    /// and a stable error message is set.
    ///
    async fn fetch(&self);

    ///
    /// Marks one group read: the in-memory flip and unread decrement are
    /// applied immediately, persistence follows. Idempotent; a group id
    /// that is not currently displayed is still persisted.
    ///
    async fn mark_as_read(&self, group_id: &str);

    ///
    /// Marks every currently displayed group read and drops the unread
    /// count to zero. Groups delivered by a fetch completing after this
    /// call are not retroactively marked.
    ///
    async fn mark_all_as_read(&self);

    ///
    /// Current read-only view of the feed.
    ///
    async fn snapshot(&self) -> output::FeedSnapshot;
}
