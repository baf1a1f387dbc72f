//! Pipeline entry points for populator operations.
//!
//! - `run_populate`: Fetch all feeds through the cache and render every region

pub mod populate;

pub use populate::run_populate;
