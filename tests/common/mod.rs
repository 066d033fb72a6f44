use activity_notifier::{
    dto::input::{Actor, ContentItem, ContentKind, InteractionKind, InteractionRecord},
    local_store::LocalStore,
    repository::{self, ContentRepository},
    resolver::UrlAvatarResolver,
    service::{
        aggregation_service::AggregationServiceImpl,
        feed_service::{FeedServiceConfig, FeedServiceImpl},
        interactions_fetcher_service::{
            InteractionsFetcherServiceConfig, InteractionsFetcherServiceImpl,
        },
        read_state_service::ReadStateServiceImpl,
        reconciliation_service::ReconciliationServiceImpl,
    },
};
use async_trait::async_trait;
use std::{
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
    time::Duration,
};
use time::OffsetDateTime;
use tokio::sync::Mutex;
use uuid::Uuid;

///
/// Content repository whose response is set by the test. Flipping
/// `fail` makes every query report the backend as unavailable.
///
pub struct ScriptedContentRepository {
    content: Mutex<Vec<ContentItem>>,
    fail: AtomicBool,
}

impl ScriptedContentRepository {
    pub fn new(content: Vec<ContentItem>) -> Self {
        Self {
            content: Mutex::new(content),
            fail: AtomicBool::new(false),
        }
    }

    pub async fn set_content(&self, content: Vec<ContentItem>) {
        *self.content.lock().await = content;
    }

    pub fn set_fail(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl ContentRepository for ScriptedContentRepository {
    async fn find_owned_content(
        &self,
        _subject_user_id: Uuid,
        _since: OffsetDateTime,
    ) -> Result<Vec<ContentItem>, repository::Error> {
        match self.fail.load(Ordering::SeqCst) {
            true => Err(repository::Error::Unavailable(
                "scripted failure".to_string(),
            )),
            false => Ok(self.content.lock().await.clone()),
        }
    }
}

pub fn create_feed_service(
    repository: Arc<ScriptedContentRepository>,
    store: Arc<dyn LocalStore>,
    subject_user_id: Uuid,
) -> FeedServiceImpl {
    let fetcher = Arc::new(InteractionsFetcherServiceImpl::new(
        InteractionsFetcherServiceConfig {
            lookback_window: Duration::from_secs(30 * 24 * 60 * 60),
            query_timeout: Duration::from_secs(5),
        },
        repository,
    ));
    let resolver = Arc::new(UrlAvatarResolver::new(
        "https://assets.example.com".to_string(),
        "https://assets.example.com/placeholder.png".to_string(),
    ));
    let aggregation = Arc::new(AggregationServiceImpl::new(resolver));
    let read_state = Arc::new(ReadStateServiceImpl::new(store));
    let reconciliation = Arc::new(ReconciliationServiceImpl::new());

    FeedServiceImpl::new(
        FeedServiceConfig {
            refresh_interval: Duration::from_secs(300),
        },
        fetcher,
        aggregation,
        read_state,
        reconciliation,
        Some(subject_user_id),
    )
}

pub fn create_actor(first_name: &str, last_name: &str) -> Actor {
    Actor {
        id: Uuid::new_v4(),
        first_name: Some(first_name.to_string()),
        last_name: Some(last_name.to_string()),
        avatar: None,
        verified: false,
    }
}

pub fn create_like(id: &str, actor: Actor, created_at: OffsetDateTime) -> InteractionRecord {
    InteractionRecord {
        id: id.to_string(),
        kind: InteractionKind::Like,
        actor: Some(actor),
        text: None,
        created_at,
    }
}

pub fn create_comment(
    id: &str,
    actor: Actor,
    text: &str,
    created_at: OffsetDateTime,
) -> InteractionRecord {
    InteractionRecord {
        id: id.to_string(),
        kind: InteractionKind::Comment,
        actor: Some(actor),
        text: Some(text.to_string()),
        created_at,
    }
}

pub fn create_post(id: &str, interactions: Vec<InteractionRecord>) -> ContentItem {
    ContentItem {
        id: id.to_string(),
        kind: ContentKind::Post,
        title: Some("a post".to_string()),
        thumbnail: None,
        interactions,
    }
}

pub fn minutes_ago(minutes: u64) -> OffsetDateTime {
    OffsetDateTime::now_utc() - Duration::from_secs(minutes * 60)
}
