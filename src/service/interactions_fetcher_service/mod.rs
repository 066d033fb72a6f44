mod dto;
mod interactions_fetcher_service;
mod interactions_fetcher_service_impl;

pub use dto::InteractionsFetcherServiceConfig;
pub use interactions_fetcher_service::*;
pub use interactions_fetcher_service_impl::*;
