pub mod aggregation_service;
pub mod feed_service;
pub mod interactions_fetcher_service;
pub mod read_state_service;
pub mod reconciliation_service;
