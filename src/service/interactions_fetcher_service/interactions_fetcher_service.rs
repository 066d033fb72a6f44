use crate::{dto::input, error::Error};
use async_trait::async_trait;
use uuid::Uuid;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait InteractionsFetcherService: Send + Sync {
    ///
    /// Retrieves content items owned by the subject user together with
    /// the interactions that fall inside the lookback window.
    ///
    /// ### Errors
    /// - [Error::RepositoryUnavailable] when the repository query fails
    ///   or times out
    ///
    async fn fetch_interactions(
        &self,
        subject_user_id: Uuid,
    ) -> Result<Vec<input::ContentItem>, Error>;
}
