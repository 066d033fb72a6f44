use super::NotificationGroup;

///
/// Read-only view of the feed handed to the UI layer.
///
#[derive(Debug, Clone, Default)]
pub struct FeedSnapshot {
    /// Reconciled groups, sorted descending by representative timestamp
    pub notifications: Vec<NotificationGroup>,
    pub unread_count: usize,
    /// True only for the initial load, not for refreshes over existing data
    pub loading: bool,
    /// True while a refresh runs over already-displayed data
    pub refreshing: bool,
    pub error: Option<String>,
}
