//!
//! Module with all dtos that cross the feed boundaries: `input` holds the
//! shapes arriving from the content repository, `output` the shapes handed
//! to the UI layer
//!

pub mod input;
pub mod output;
