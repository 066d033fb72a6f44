use super::error::Error;
use crate::dto::input;
use async_trait::async_trait;
use time::OffsetDateTime;
use uuid::Uuid;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContentRepository: Send + Sync {
    ///
    /// Finds all content items owned by the subject user, each carrying
    /// the interactions created after `since` with denormalized actor
    /// profiles.
    ///
    /// ### Errors
    /// - [Error::Unavailable] when the backing query fails
    ///
    async fn find_owned_content(
        &self,
        subject_user_id: Uuid,
        since: OffsetDateTime,
    ) -> Result<Vec<input::ContentItem>, Error>;
}
