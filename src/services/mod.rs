//! Service layer for the populator.
//!
//! This module contains the business logic for:
//! - Feed decoding (`CsvDecoder`)
//! - Feed fetching (`SourceFetcher`)
//! - Snapshot caching (`ContentCache`)

mod cache;
mod decoder;
mod fetcher;

pub use cache::ContentCache;
pub use decoder::{CsvDecoder, RecordDecoder};
pub use fetcher::{RecordSource, SourceFetcher};
