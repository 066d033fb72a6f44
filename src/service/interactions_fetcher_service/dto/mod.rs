mod interactions_fetcher_service_config;

pub use interactions_fetcher_service_config::*;
