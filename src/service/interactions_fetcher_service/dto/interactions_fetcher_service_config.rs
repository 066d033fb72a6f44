use std::time::Duration;

pub struct InteractionsFetcherServiceConfig {
    /// Interactions older than this never enter the feed
    pub lookback_window: Duration,

    pub query_timeout: Duration,
}
