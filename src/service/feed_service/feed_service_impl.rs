use super::{FeedService, FeedServiceConfig};
use crate::{
    dto::output::{FeedSnapshot, NotificationGroup},
    service::{
        aggregation_service::AggregationService,
        interactions_fetcher_service::InteractionsFetcherService,
        read_state_service::ReadStateService, reconciliation_service::ReconciliationService,
    },
};
use async_trait::async_trait;
use std::{collections::HashSet, sync::Arc};
use tokio::{
    sync::{watch, Mutex, Notify},
    time::{interval, MissedTickBehavior},
};
use uuid::Uuid;

pub const FETCH_ERROR_MESSAGE: &str = "Failed to load notifications";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FeedPhase {
    Idle,
    Loading,
    Ready,
    Refreshing,
    Error,
}

struct FeedState {
    subject_user_id: Option<Uuid>,
    /// Bumped on every subject-user change; fetch results carrying an
    /// older generation are discarded instead of committed
    generation: u64,
    phase: FeedPhase,
    notifications: Vec<NotificationGroup>,
    unread_count: usize,
    error: Option<String>,
}

pub struct FeedServiceImpl {
    config: FeedServiceConfig,
    fetcher: Arc<dyn InteractionsFetcherService>,
    aggregation: Arc<dyn AggregationService>,
    read_state: Arc<dyn ReadStateService>,
    reconciliation: Arc<dyn ReconciliationService>,
    state: Mutex<FeedState>,
}

impl FeedServiceImpl {
    pub fn new(
        config: FeedServiceConfig,
        fetcher: Arc<dyn InteractionsFetcherService>,
        aggregation: Arc<dyn AggregationService>,
        read_state: Arc<dyn ReadStateService>,
        reconciliation: Arc<dyn ReconciliationService>,
        subject_user_id: Option<Uuid>,
    ) -> Self {
        let state = FeedState {
            subject_user_id,
            generation: 0,
            phase: FeedPhase::Idle,
            notifications: Vec::new(),
            unread_count: 0,
            error: None,
        };
        let state = Mutex::new(state);

        Self {
            config,
            fetcher,
            aggregation,
            read_state,
            reconciliation,
            state,
        }
    }

    ///
    /// Applies a subject-user change: in-memory notifications and counts
    /// are cleared before any pending fetch can resolve, so the previous
    /// user's data never flashes for the new one.
    ///
    pub async fn change_subject_user(&self, subject_user_id: Option<Uuid>) {
        let mut state = self.state.lock().await;

        tracing::info!(
            previous = ?state.subject_user_id,
            current = ?subject_user_id,
            "subject user changed, clearing feed",
        );

        state.generation += 1;
        state.subject_user_id = subject_user_id;
        state.phase = FeedPhase::Idle;
        state.notifications.clear();
        state.unread_count = 0;
        state.error = None;
    }

    ///
    /// Re-invokes [FeedService::fetch] on a fixed interval until
    /// `close_notify` fires. The initial load stays the UI's call:
    /// the first refresh happens one full interval after start.
    ///
    #[tracing::instrument(name = "Periodic Refresh", skip_all)]
    pub async fn run_periodic_refresh(self: Arc<Self>, close_notify: Arc<Notify>) {
        let mut interval = interval(self.config.refresh_interval);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // first tick of a tokio interval completes immediately
        interval.tick().await;

        tokio::select! {
            biased;

            _ = close_notify.notified() => {},

            _ = async { loop {
                interval.tick().await;
                tracing::debug!("periodic refresh tick");
                self.fetch().await;
            }} => {}
        }
    }

    ///
    /// Follows the identity broadcast channel until `close_notify` fires
    /// or the channel closes, clearing the feed on every change.
    ///
    #[tracing::instrument(name = "Identity Listener", skip_all)]
    pub async fn run_identity_listener(
        self: Arc<Self>,
        mut identity_rx: watch::Receiver<Option<Uuid>>,
        close_notify: Arc<Notify>,
    ) {
        tokio::select! {
            biased;

            _ = close_notify.notified() => {},

            _ = async { loop {
                if identity_rx.changed().await.is_err() {
                    break;
                }
                let subject_user_id = *identity_rx.borrow_and_update();
                self.change_subject_user(subject_user_id).await;
            }} => {}
        }
    }
}

#[async_trait]
impl FeedService for FeedServiceImpl {
    async fn fetch(&self) {
        let (subject_user_id, generation) = {
            let mut state = self.state.lock().await;
            let Some(subject_user_id) = state.subject_user_id else {
                tracing::debug!("fetch skipped, no active subject user");
                return;
            };

            let has_data = !state.notifications.is_empty()
                || matches!(state.phase, FeedPhase::Ready | FeedPhase::Refreshing);
            state.phase = match has_data {
                true => FeedPhase::Refreshing,
                false => FeedPhase::Loading,
            };

            (subject_user_id, state.generation)
        };

        tracing::info!("loading notification feed");

        let fetch_result = self.fetcher.fetch_interactions(subject_user_id).await;

        match fetch_result {
            Ok(content) => {
                let groups = self.aggregation.aggregate(&content);
                let read_group_ids = self.read_state.snapshot(subject_user_id).await;
                let reconciled = self.reconciliation.reconcile(groups, &read_group_ids);

                let mut state = self.state.lock().await;
                if state.generation != generation {
                    tracing::debug!("discarding fetch result for stale subject user");
                    return;
                }

                // Read status merges three sources: the persisted marks
                // (already applied during reconciliation), the flags on
                // the list currently displayed, and whatever the fresh
                // aggregation itself reported
                let displayed_read_ids = state
                    .notifications
                    .iter()
                    .filter(|group| group.read)
                    .map(|group| group.id.clone())
                    .collect::<HashSet<_>>();
                let notifications = reconciled
                    .into_iter()
                    .map(|mut group| {
                        group.read = group.read || displayed_read_ids.contains(&group.id);
                        group
                    })
                    .collect::<Vec<_>>();

                state.unread_count = notifications.iter().filter(|group| !group.read).count();
                state.notifications = notifications;
                state.phase = FeedPhase::Ready;
                state.error = None;

                tracing::info!(
                    count = state.notifications.len(),
                    unread_count = state.unread_count,
                    "notification feed loaded",
                );
            }
            Err(err) => {
                tracing::error!(%err, "failed to load notification feed");

                let mut state = self.state.lock().await;
                if state.generation != generation {
                    tracing::debug!("discarding fetch failure for stale subject user");
                    return;
                }

                // previously displayed notifications stay untouched
                state.phase = FeedPhase::Error;
                state.error = Some(FETCH_ERROR_MESSAGE.to_string());
            }
        }
    }

    async fn mark_as_read(&self, group_id: &str) {
        let subject_user_id = {
            let mut guard = self.state.lock().await;
            let state = &mut *guard;
            let Some(subject_user_id) = state.subject_user_id else {
                return;
            };

            if let Some(group) = state
                .notifications
                .iter_mut()
                .find(|group| group.id == group_id)
            {
                if !group.read {
                    group.read = true;
                    state.unread_count = state.unread_count.saturating_sub(1);
                }
            }

            subject_user_id
        };

        // persisted even when the group is not currently displayed
        self.read_state.set(subject_user_id, group_id).await;
    }

    async fn mark_all_as_read(&self) {
        let (subject_user_id, group_ids) = {
            let mut state = self.state.lock().await;
            let Some(subject_user_id) = state.subject_user_id else {
                return;
            };

            let group_ids = state
                .notifications
                .iter_mut()
                .map(|group| {
                    group.read = true;
                    group.id.clone()
                })
                .collect::<Vec<_>>();
            state.unread_count = 0;

            (subject_user_id, group_ids)
        };

        if !group_ids.is_empty() {
            self.read_state.set_many(subject_user_id, &group_ids).await;
        }
    }

    async fn snapshot(&self) -> FeedSnapshot {
        let state = self.state.lock().await;

        FeedSnapshot {
            notifications: state.notifications.clone(),
            unread_count: state.unread_count,
            loading: state.phase == FeedPhase::Loading,
            refreshing: state.phase == FeedPhase::Refreshing,
            error: state.error.clone(),
        }
    }
}
