mod dto;
mod feed_service;
mod feed_service_impl;

pub use dto::FeedServiceConfig;
pub use feed_service::*;
pub use feed_service_impl::*;
