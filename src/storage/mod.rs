//! Storage abstractions for snapshot persistence.
//!
//! Each feed caches as one complete snapshot under a logical key:
//!
//! ```text
//! {cache_dir}/
//! ├── books.json        # last books snapshot
//! ├── talks.json        # last talks snapshot
//! ├── news.json         # last news snapshot
//! └── language          # selected site language code
//! ```
//!
//! A snapshot is always the full payload of one fetch, never a partial merge.

pub mod local;

use std::fmt;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::{Language, Record};

// Re-export for convenience
pub use local::LocalStore;

/// Logical key for one cached feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentKey {
    Books,
    Talks,
    News,
}

impl ContentKey {
    pub const ALL: [ContentKey; 3] = [ContentKey::Books, ContentKey::Talks, ContentKey::News];

    /// Stable storage key.
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentKey::Books => "books",
            ContentKey::Talks => "talks",
            ContentKey::News => "news",
        }
    }
}

impl fmt::Display for ContentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One cached feed payload with its fetch timestamp.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    /// ISO 8601 timestamp of the fetch that produced this payload
    pub fetched_at: DateTime<Utc>,
    /// The records of that fetch; empty when the fetch failed
    pub records: Vec<Record>,
}

impl Snapshot {
    pub fn new(records: Vec<Record>) -> Self {
        Self {
            fetched_at: Utc::now(),
            records,
        }
    }
}

/// Trait for snapshot storage backends.
#[async_trait]
pub trait SnapshotStore: Send + Sync {
    /// Read the stored snapshot for a key, `None` when absent.
    async fn read_snapshot(&self, key: ContentKey) -> Result<Option<Snapshot>>;

    /// Overwrite the stored snapshot for a key.
    async fn write_snapshot(&self, key: ContentKey, snapshot: &Snapshot) -> Result<()>;

    /// Read the persisted site language, `None` when never set.
    async fn read_language(&self) -> Result<Option<Language>>;

    /// Persist the site language.
    async fn write_language(&self, language: Language) -> Result<()>;
}
