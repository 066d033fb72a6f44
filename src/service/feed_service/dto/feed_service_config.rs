use std::time::Duration;

pub struct FeedServiceConfig {
    /// How often the periodic refresh re-fetches the feed
    pub refresh_interval: Duration,
}
