// src/pipeline/populate.rs

//! Page population pipeline.

use crate::error::Result;
use crate::models::{Book, Config, Language, NewsItem, Talk};
use crate::render::{
    BooksRenderedHook, Page, SessionContext, render_books, render_news, render_talks,
};
use crate::services::ContentCache;
use crate::storage::{ContentKey, SnapshotStore};

/// Run the populate pipeline once: fetch all three feeds through the cache,
/// resolve the active language, and render every region.
///
/// The three lookups run concurrently and each settles on its own; a feed that
/// failed (empty record set) leaves its regions empty without affecting the
/// others.
pub async fn run_populate<S: SnapshotStore>(
    config: &Config,
    cache: &ContentCache<S>,
    page: &mut Page,
    on_books_rendered: Option<BooksRenderedHook>,
) -> Result<SessionContext> {
    let sources = &config.sources;

    log::info!("Populating page regions from {} feeds", ContentKey::ALL.len());

    let (books, talks, news) = tokio::join!(
        cache.records(ContentKey::Books, &sources.books_url),
        cache.records(ContentKey::Talks, &sources.talks_url),
        cache.records(ContentKey::News, &sources.news_url),
    );

    let language = match cache.store().read_language().await {
        Ok(Some(language)) => language,
        Ok(None) => Language::default(),
        Err(error) => {
            log::warn!("Failed to read stored language: {}. Using default.", error);
            Language::default()
        }
    };

    let mut ctx = SessionContext::new(language);
    ctx.books = books.iter().map(Book::from_record).collect();
    ctx.talks = talks.iter().map(Talk::from_record).collect();
    ctx.news = news.iter().map(NewsItem::from_record).collect();
    ctx.on_books_rendered = on_books_rendered;

    render_books(&mut ctx, page);
    render_talks(&ctx, page);
    render_news(&ctx, page);

    log::info!(
        "Rendered {} book(s), {} talk(s), {} news item(s) in '{}'",
        ctx.books.len(),
        ctx.talks.len(),
        ctx.news.len(),
        language.as_code()
    );

    Ok(ctx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Record;
    use crate::services::RecordSource;
    use crate::storage::LocalStore;
    use async_trait::async_trait;
    use std::sync::Arc;
    use tempfile::TempDir;

    /// Source that serves a canned record set per feed URL.
    struct CannedSource;

    fn record(pairs: &[(&str, &str)]) -> Record {
        let mut r = Record::new();
        for (name, value) in pairs {
            r.push(*name, *value);
        }
        r
    }

    #[async_trait]
    impl RecordSource for CannedSource {
        async fn fetch(&self, url: &str) -> Vec<Record> {
            if url.contains("books") {
                vec![record(&[("category", "Fiction"), ("title_es", "La casa")])]
            } else if url.contains("talks") {
                vec![record(&[("title_es", "Charla")])]
            } else if url.contains("news") {
                vec![record(&[("title_es", "Entrevista")])]
            } else {
                Vec::new()
            }
        }
    }

    fn test_config() -> Config {
        let mut config = Config::default();
        config.sources.books_url = "http://feeds.test/books.csv".into();
        config.sources.talks_url = "http://feeds.test/talks.csv".into();
        config.sources.news_url = "http://feeds.test/news.csv".into();
        config
    }

    #[tokio::test]
    async fn test_populate_fills_all_regions() {
        let tmp = TempDir::new().unwrap();
        let cache = ContentCache::new(LocalStore::new(tmp.path()), Arc::new(CannedSource), 3600);
        let mut page = Page::standard();

        let ctx = run_populate(&test_config(), &cache, &mut page, None)
            .await
            .unwrap();

        assert_eq!(ctx.language, Language::Es);
        assert!(page.html("gallery-fiction").unwrap().contains("La casa"));
        assert!(page.html("talks-list").unwrap().contains("Charla"));
        assert!(page.html("news-list").unwrap().contains("Entrevista"));
    }

    #[tokio::test]
    async fn test_populate_uses_stored_language() {
        let tmp = TempDir::new().unwrap();
        let store = LocalStore::new(tmp.path());
        store.write_language(Language::En).await.unwrap();

        let cache = ContentCache::new(store, Arc::new(CannedSource), 3600);
        let mut page = Page::standard();

        let ctx = run_populate(&test_config(), &cache, &mut page, None)
            .await
            .unwrap();
        assert_eq!(ctx.language, Language::En);
    }

    #[tokio::test]
    async fn test_failed_feed_leaves_other_regions_intact() {
        let tmp = TempDir::new().unwrap();
        let mut config = test_config();
        // An empty URL soft-fails in the fetch boundary; here the canned
        // source just returns nothing for it.
        config.sources.books_url = "http://feeds.test/other.csv".into();

        let cache = ContentCache::new(LocalStore::new(tmp.path()), Arc::new(CannedSource), 3600);
        let mut page = Page::standard();

        run_populate(&config, &cache, &mut page, None).await.unwrap();

        assert_eq!(page.html("gallery-fiction").unwrap(), "");
        assert!(page.html("talks-list").unwrap().contains("Charla"));
        assert!(page.html("news-list").unwrap().contains("Entrevista"));
    }
}
