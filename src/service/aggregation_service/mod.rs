mod aggregation_service;
mod aggregation_service_impl;

pub use aggregation_service::*;
pub use aggregation_service_impl::*;
