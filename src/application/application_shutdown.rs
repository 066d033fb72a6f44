use super::ApplicationStateToClose;

pub async fn close(state: ApplicationStateToClose) {
    tracing::info!("stopping periodic refresh");
    state.periodic_refresh_close_notify.notify_one();
    if state.periodic_refresh_task.await.is_err() {
        tracing::error!("periodic refresh task panicked");
    }

    tracing::info!("stopping identity listener");
    state.identity_listener_close_notify.notify_one();
    if state.identity_listener_task.await.is_err() {
        tracing::error!("identity listener task panicked");
    }
}
