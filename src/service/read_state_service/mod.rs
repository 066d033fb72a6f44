mod read_state_service;
mod read_state_service_impl;

pub use read_state_service::*;
pub use read_state_service_impl::*;
