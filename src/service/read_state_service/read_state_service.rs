use async_trait::async_trait;
use std::collections::HashSet;
use uuid::Uuid;

///
/// Persistent record of which notification groups the subject user has
/// acknowledged. Marks are monotonic: once set they never revert through
/// this service, so concurrent writers simply union their sets.
///
/// Storage failures are absorbed: marks written during the session stay
/// visible from memory, they just won't survive a restart.
///
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReadStateService: Send + Sync {
    ///
    /// Returns the ids of all groups the subject user has marked read.
    ///
    async fn snapshot(&self, subject_user_id: Uuid) -> HashSet<String>;

    ///
    /// Marks a single group as read. Idempotent.
    ///
    async fn set(&self, subject_user_id: Uuid, group_id: &str);

    ///
    /// Marks every listed group as read in one storage write.
    ///
    async fn set_many(&self, subject_user_id: Uuid, group_ids: &[String]);
}
