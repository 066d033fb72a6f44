use crate::dto::output;
use std::collections::HashSet;

#[cfg_attr(test, mockall::automock)]
pub trait ReconciliationService: Send + Sync {
    ///
    /// Applies persisted read marks to freshly aggregated groups and
    /// sorts them descending by representative timestamp.
    ///
    /// A group that already arrives with `read = true` keeps it; the
    /// marks only ever add read status. Pure and idempotent.
    ///
    fn reconcile(
        &self,
        groups: Vec<output::NotificationGroup>,
        read_group_ids: &HashSet<String>,
    ) -> Vec<output::NotificationGroup>;
}
