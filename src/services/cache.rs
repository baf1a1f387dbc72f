// src/services/cache.rs

//! Freshness-window cache over the feed fetcher.
//!
//! Reads go through the stored snapshot first; a snapshot younger than the
//! window is served verbatim with no network call. Anything else refetches and
//! overwrites the entry with the new payload and timestamp.
//!
//! A failed fetch writes an *empty* snapshot, which then suppresses refetching
//! for the remainder of the window. That mirrors the site's long-standing
//! behavior and is kept on purpose; a transient outage can hide real data for
//! up to the window length.

use std::sync::Arc;

use chrono::{Duration, Utc};

use crate::models::Record;
use crate::services::fetcher::RecordSource;
use crate::storage::{ContentKey, Snapshot, SnapshotStore};

/// Read-through snapshot cache for the three content feeds.
pub struct ContentCache<S> {
    store: S,
    source: Arc<dyn RecordSource>,
    max_age: Duration,
}

impl<S: SnapshotStore> ContentCache<S> {
    /// Create a cache over a store and a record source.
    pub fn new(store: S, source: Arc<dyn RecordSource>, max_age_secs: u64) -> Self {
        Self {
            store,
            source,
            max_age: Duration::seconds(max_age_secs as i64),
        }
    }

    /// The underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Return the records for a feed, fetching only when the stored snapshot
    /// is absent, stale, or unreadable.
    pub async fn records(&self, key: ContentKey, url: &str) -> Vec<Record> {
        match self.store.read_snapshot(key).await {
            Ok(Some(snapshot)) if Utc::now() - snapshot.fetched_at < self.max_age => {
                log::debug!(
                    "Serving {} from snapshot fetched at {}",
                    key,
                    snapshot.fetched_at
                );
                return snapshot.records;
            }
            Ok(_) => {}
            Err(error) => {
                log::warn!("Discarding unreadable {} snapshot: {}", key, error);
            }
        }

        self.refresh(key, url).await
    }

    /// Fetch a feed unconditionally and overwrite its snapshot, empty payload
    /// included.
    pub async fn refresh(&self, key: ContentKey, url: &str) -> Vec<Record> {
        let records = self.source.fetch(url).await;
        let snapshot = Snapshot {
            fetched_at: Utc::now(),
            records,
        };

        if let Err(error) = self.store.write_snapshot(key, &snapshot).await {
            log::warn!("Failed to store {} snapshot: {}", key, error);
        }

        snapshot.records
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::LocalStore;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tempfile::TempDir;

    /// Source that counts calls and returns a fixed payload.
    struct CountingSource {
        calls: AtomicUsize,
        records: Vec<Record>,
    }

    impl CountingSource {
        fn returning(records: Vec<Record>) -> Arc<Self> {
            Arc::new(Self {
                calls: AtomicUsize::new(0),
                records,
            })
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl RecordSource for CountingSource {
        async fn fetch(&self, _url: &str) -> Vec<Record> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.records.clone()
        }
    }

    fn record(title: &str) -> Record {
        let mut r = Record::new();
        r.push("title_es", title);
        r
    }

    fn cache_with(
        tmp: &TempDir,
        source: Arc<CountingSource>,
        max_age_secs: u64,
    ) -> ContentCache<LocalStore> {
        ContentCache::new(LocalStore::new(tmp.path()), source, max_age_secs)
    }

    #[tokio::test]
    async fn test_fresh_snapshot_skips_network() {
        let tmp = TempDir::new().unwrap();
        let store = LocalStore::new(tmp.path());
        store
            .write_snapshot(ContentKey::Books, &Snapshot::new(vec![record("cached")]))
            .await
            .unwrap();

        let source = CountingSource::returning(vec![record("fresh")]);
        let cache = cache_with(&tmp, Arc::clone(&source), 3600);

        let records = cache.records(ContentKey::Books, "http://x/books.csv").await;
        assert_eq!(records[0].get("title_es"), "cached");
        assert_eq!(source.calls(), 0);
    }

    #[tokio::test]
    async fn test_stale_snapshot_refetches_and_overwrites() {
        let tmp = TempDir::new().unwrap();
        let store = LocalStore::new(tmp.path());
        let stale = Snapshot {
            fetched_at: Utc::now() - Duration::hours(2),
            records: vec![record("old")],
        };
        store.write_snapshot(ContentKey::Books, &stale).await.unwrap();

        let source = CountingSource::returning(vec![record("new")]);
        let cache = cache_with(&tmp, Arc::clone(&source), 3600);

        let records = cache.records(ContentKey::Books, "http://x/books.csv").await;
        assert_eq!(records[0].get("title_es"), "new");
        assert_eq!(source.calls(), 1);

        let stored = store.read_snapshot(ContentKey::Books).await.unwrap().unwrap();
        assert_eq!(stored.records[0].get("title_es"), "new");
        assert!(stored.fetched_at > stale.fetched_at);
    }

    #[tokio::test]
    async fn test_miss_fetches_once() {
        let tmp = TempDir::new().unwrap();
        let source = CountingSource::returning(vec![record("first")]);
        let cache = cache_with(&tmp, Arc::clone(&source), 3600);

        cache.records(ContentKey::Talks, "http://x/talks.csv").await;
        assert_eq!(source.calls(), 1);
    }

    #[tokio::test]
    async fn test_empty_fetch_result_is_cached() {
        let tmp = TempDir::new().unwrap();
        let source = CountingSource::returning(Vec::new());
        let cache = cache_with(&tmp, Arc::clone(&source), 3600);

        assert!(cache.records(ContentKey::News, "http://x/news.csv").await.is_empty());
        assert_eq!(source.calls(), 1);

        // The empty snapshot is fresh now, so no second call happens.
        assert!(cache.records(ContentKey::News, "http://x/news.csv").await.is_empty());
        assert_eq!(source.calls(), 1);
    }

    #[tokio::test]
    async fn test_corrupt_snapshot_treated_as_miss() {
        let tmp = TempDir::new().unwrap();
        tokio::fs::write(tmp.path().join("books.json"), b"{not json")
            .await
            .unwrap();

        let source = CountingSource::returning(vec![record("repaired")]);
        let cache = cache_with(&tmp, Arc::clone(&source), 3600);

        let records = cache.records(ContentKey::Books, "http://x/books.csv").await;
        assert_eq!(records[0].get("title_es"), "repaired");
        assert_eq!(source.calls(), 1);
    }

    #[tokio::test]
    async fn test_refresh_ignores_freshness() {
        let tmp = TempDir::new().unwrap();
        let store = LocalStore::new(tmp.path());
        store
            .write_snapshot(ContentKey::Books, &Snapshot::new(vec![record("cached")]))
            .await
            .unwrap();

        let source = CountingSource::returning(vec![record("forced")]);
        let cache = cache_with(&tmp, Arc::clone(&source), 3600);

        let records = cache.refresh(ContentKey::Books, "http://x/books.csv").await;
        assert_eq!(records[0].get("title_es"), "forced");
        assert_eq!(source.calls(), 1);
    }
}
