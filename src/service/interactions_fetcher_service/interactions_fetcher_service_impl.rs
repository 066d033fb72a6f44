use super::{InteractionsFetcherService, InteractionsFetcherServiceConfig};
use crate::{
    dto::input,
    error::Error,
    repository::{self, ContentRepository},
};
use async_trait::async_trait;
use std::sync::Arc;
use time::OffsetDateTime;
use uuid::Uuid;

pub struct InteractionsFetcherServiceImpl {
    config: InteractionsFetcherServiceConfig,
    repository: Arc<dyn ContentRepository>,
}

impl InteractionsFetcherServiceImpl {
    pub fn new(
        config: InteractionsFetcherServiceConfig,
        repository: Arc<dyn ContentRepository>,
    ) -> Self {
        Self { config, repository }
    }
}

#[async_trait]
impl InteractionsFetcherService for InteractionsFetcherServiceImpl {
    async fn fetch_interactions(
        &self,
        subject_user_id: Uuid,
    ) -> Result<Vec<input::ContentItem>, Error> {
        tracing::info!("fetching owned content interactions");

        let since = OffsetDateTime::now_utc() - self.config.lookback_window;

        let query = self.repository.find_owned_content(subject_user_id, since);
        let query_result = tokio::time::timeout(self.config.query_timeout, query).await;

        let mut content = match query_result {
            Ok(Ok(content)) => content,
            Ok(Err(err)) => {
                tracing::error!(%err, "content repository query failed");
                return Err(Error::RepositoryUnavailable(err));
            }
            Err(_) => {
                tracing::error!(
                    timeout = ?self.config.query_timeout,
                    "content repository query timed out",
                );
                return Err(Error::RepositoryUnavailable(repository::Error::Timeout(
                    self.config.query_timeout,
                )));
            }
        };

        // Repository is trusted to apply `since`, but stale interactions
        // must never resurrect a group, so the window is enforced here too
        for item in &mut content {
            item.interactions
                .retain(|interaction| interaction.created_at >= since);
        }

        let interaction_count: usize = content.iter().map(|item| item.interactions.len()).sum();
        tracing::info!(
            content_count = content.len(),
            interaction_count,
            "fetched owned content interactions",
        );

        Ok(content)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        dto::input::{ContentKind, InteractionKind, InteractionRecord},
        repository::MockContentRepository,
    };
    use std::time::Duration;

    fn create_record(id: &str, created_at: OffsetDateTime) -> InteractionRecord {
        InteractionRecord {
            id: id.to_string(),
            kind: InteractionKind::Like,
            actor: None,
            text: None,
            created_at,
        }
    }

    fn create_item(interactions: Vec<InteractionRecord>) -> input::ContentItem {
        input::ContentItem {
            id: "content-1".to_string(),
            kind: ContentKind::Post,
            title: None,
            thumbnail: None,
            interactions,
        }
    }

    fn create_config() -> InteractionsFetcherServiceConfig {
        InteractionsFetcherServiceConfig {
            lookback_window: Duration::from_secs(30 * 24 * 60 * 60),
            query_timeout: Duration::from_secs(10),
        }
    }

    #[tokio::test]
    async fn fetch_interactions_ok() {
        let mut repository = MockContentRepository::new();
        repository.expect_find_owned_content().returning(|_, _| {
            Ok(vec![create_item(vec![create_record(
                "like-1",
                OffsetDateTime::now_utc(),
            )])])
        });
        let service = InteractionsFetcherServiceImpl::new(create_config(), Arc::new(repository));

        let content = service
            .fetch_interactions(Uuid::from_u128(590812093))
            .await
            .unwrap();

        assert_eq!(content.len(), 1);
        assert_eq!(content[0].interactions.len(), 1);
    }

    #[tokio::test]
    async fn fetch_interactions_drops_records_outside_lookback_window() {
        let mut repository = MockContentRepository::new();
        repository.expect_find_owned_content().returning(|_, _| {
            let now = OffsetDateTime::now_utc();
            Ok(vec![create_item(vec![
                create_record("recent", now - Duration::from_secs(60)),
                create_record("ancient", now - Duration::from_secs(60 * 24 * 60 * 60)),
            ])])
        });
        let service = InteractionsFetcherServiceImpl::new(create_config(), Arc::new(repository));

        let content = service
            .fetch_interactions(Uuid::from_u128(590812093))
            .await
            .unwrap();

        assert_eq!(content[0].interactions.len(), 1);
        assert_eq!(content[0].interactions[0].id, "recent");
    }

    #[tokio::test]
    async fn fetch_interactions_repository_error() {
        let mut repository = MockContentRepository::new();
        repository
            .expect_find_owned_content()
            .returning(|_, _| Err(repository::Error::Unavailable("connection lost".to_string())));
        let service = InteractionsFetcherServiceImpl::new(create_config(), Arc::new(repository));

        let result = service.fetch_interactions(Uuid::from_u128(590812093)).await;

        assert!(matches!(
            result,
            Err(Error::RepositoryUnavailable(repository::Error::Unavailable(_)))
        ));
    }

    struct StalledContentRepository;

    #[async_trait]
    impl ContentRepository for StalledContentRepository {
        async fn find_owned_content(
            &self,
            _subject_user_id: Uuid,
            _since: OffsetDateTime,
        ) -> Result<Vec<input::ContentItem>, repository::Error> {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Ok(vec![])
        }
    }

    #[tokio::test]
    async fn fetch_interactions_timeout() {
        let repository = StalledContentRepository;
        let config = InteractionsFetcherServiceConfig {
            lookback_window: Duration::from_secs(30 * 24 * 60 * 60),
            query_timeout: Duration::from_millis(20),
        };
        let service = InteractionsFetcherServiceImpl::new(config, Arc::new(repository));

        let result = service.fetch_interactions(Uuid::from_u128(590812093)).await;

        assert!(matches!(
            result,
            Err(Error::RepositoryUnavailable(repository::Error::Timeout(_)))
        ));
    }
}
