//!
//! Notification feed for interactions (likes, comments) on content owned
//! by a subject user. Raw interaction records are fetched from a content
//! repository, aggregated into deduplicated per-content groups and merged
//! with locally persisted read marks before being handed to the UI layer.
//!

pub mod application;
pub mod dto;
pub mod error;
pub mod local_store;
pub mod repository;
pub mod resolver;
pub mod service;

pub use error::Error;
