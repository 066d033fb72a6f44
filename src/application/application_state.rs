use super::ApplicationEnv;
use crate::{
    error::Error,
    local_store::FileLocalStore,
    repository::ContentRepository,
    resolver::UrlAvatarResolver,
    service::{
        aggregation_service::AggregationServiceImpl,
        feed_service::{FeedService, FeedServiceConfig, FeedServiceImpl},
        interactions_fetcher_service::{
            InteractionsFetcherServiceConfig, InteractionsFetcherServiceImpl,
        },
        read_state_service::ReadStateServiceImpl,
        reconciliation_service::ReconciliationServiceImpl,
    },
};
use std::sync::Arc;
use tokio::{
    sync::{watch, Notify},
    task::JoinHandle,
};
use uuid::Uuid;

#[derive(Clone)]
pub struct ApplicationState {
    pub feed_service: Arc<dyn FeedService>,
}

pub struct ApplicationStateToClose {
    pub periodic_refresh_close_notify: Arc<Notify>,
    pub periodic_refresh_task: JoinHandle<()>,
    pub identity_listener_close_notify: Arc<Notify>,
    pub identity_listener_task: JoinHandle<()>,
}

///
/// Wires the whole feed pipeline. The content repository and the
/// identity channel come from the host, everything else is built
/// from the environment.
///
pub async fn create_state(
    env: &ApplicationEnv,
    content_repository: Arc<dyn ContentRepository>,
    identity_rx: watch::Receiver<Option<Uuid>>,
) -> anyhow::Result<(ApplicationState, ApplicationStateToClose)> {
    tracing::info!("opening local store");
    let local_store = Arc::new(
        FileLocalStore::open(&env.local_store_path)
            .await
            .map_err(Error::StorageUnavailable)?,
    );

    tracing::info!("creating services");
    let fetcher = Arc::new(InteractionsFetcherServiceImpl::new(
        InteractionsFetcherServiceConfig {
            lookback_window: env.lookback_window,
            query_timeout: env.query_timeout,
        },
        content_repository,
    ));
    let resolver = Arc::new(UrlAvatarResolver::new(
        env.asset_base_url.clone(),
        env.avatar_placeholder_url.clone(),
    ));
    let aggregation = Arc::new(AggregationServiceImpl::new(resolver));
    let read_state = Arc::new(ReadStateServiceImpl::new(local_store));
    let reconciliation = Arc::new(ReconciliationServiceImpl::new());

    let subject_user_id = *identity_rx.borrow();
    let feed_service = Arc::new(FeedServiceImpl::new(
        FeedServiceConfig {
            refresh_interval: env.refresh_interval,
        },
        fetcher,
        aggregation,
        read_state,
        reconciliation,
        subject_user_id,
    ));

    tracing::info!("starting background tasks");
    let periodic_refresh_close_notify = Arc::new(Notify::new());
    let periodic_refresh_task = tokio::spawn(
        Arc::clone(&feed_service).run_periodic_refresh(Arc::clone(&periodic_refresh_close_notify)),
    );
    let identity_listener_close_notify = Arc::new(Notify::new());
    let identity_listener_task = tokio::spawn(
        Arc::clone(&feed_service)
            .run_identity_listener(identity_rx, Arc::clone(&identity_listener_close_notify)),
    );

    let state = ApplicationState { feed_service };
    let state_to_close = ApplicationStateToClose {
        periodic_refresh_close_notify,
        periodic_refresh_task,
        identity_listener_close_notify,
        identity_listener_task,
    };

    Ok((state, state_to_close))
}
