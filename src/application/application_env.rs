use anyhow::anyhow;
use std::time::Duration;
use tracing::level_filters::LevelFilter;

pub struct ApplicationEnv {
    pub log_directory: String,
    pub log_filename: String,

    /// Default level for both log layers; `RUST_LOG` can still
    /// override the console output per target
    pub log_level: LevelFilter,

    /// Path of the JSON file backing the local store
    pub local_store_path: String,

    pub asset_base_url: String,
    pub avatar_placeholder_url: String,

    pub lookback_window: Duration,
    pub query_timeout: Duration,
    pub refresh_interval: Duration,
}

impl ApplicationEnv {
    pub fn parse() -> anyhow::Result<Self> {
        #[cfg(debug_assertions)]
        {
            // Ignore error because .env file is not required
            // as long as env variables are set
            let _ = dotenvy::dotenv();
        }

        let log_directory = Self::env_var("ACTIVITY_NOTIFIER_LOG_DIRECTORY")?;
        let log_filename = Self::env_var("ACTIVITY_NOTIFIER_LOG_FILENAME")?;
        let log_level = Self::env_var_or("ACTIVITY_NOTIFIER_LOG_LEVEL", "debug").parse()?;
        let local_store_path = Self::env_var("ACTIVITY_NOTIFIER_LOCAL_STORE_PATH")?;
        let asset_base_url = Self::env_var("ACTIVITY_NOTIFIER_ASSET_BASE_URL")?;
        let avatar_placeholder_url = Self::env_var("ACTIVITY_NOTIFIER_AVATAR_PLACEHOLDER_URL")?;
        let lookback_window =
            Self::env_var("ACTIVITY_NOTIFIER_LOOKBACK_WINDOW_DAYS")?.parse::<u64>()?;
        let lookback_window = Duration::from_secs(lookback_window * 24 * 60 * 60);
        let query_timeout = Self::env_var("ACTIVITY_NOTIFIER_QUERY_TIMEOUT_SECONDS")?.parse()?;
        let query_timeout = Duration::from_secs(query_timeout);
        let refresh_interval =
            Self::env_var("ACTIVITY_NOTIFIER_REFRESH_INTERVAL_SECONDS")?.parse()?;
        let refresh_interval = Duration::from_secs(refresh_interval);

        Ok(Self {
            log_directory,
            log_filename,
            log_level,
            local_store_path,
            asset_base_url,
            avatar_placeholder_url,
            lookback_window,
            query_timeout,
            refresh_interval,
        })
    }

    fn env_var(name: &'static str) -> anyhow::Result<String> {
        std::env::var(name).map_err(|_| anyhow!("environment variable {name} not set"))
    }

    fn env_var_or(name: &'static str, default: &str) -> String {
        std::env::var(name).unwrap_or_else(|_| default.to_string())
    }
}
