// src/render/page.rs

//! Render target and page-session state.

use std::collections::BTreeMap;

use crate::models::{Book, BookCategory, Language, NewsItem, Talk};
use crate::render::news::NEWS_REGION;
use crate::render::talks::TALKS_REGION;

/// Callback invoked after the books galleries render, for wiring up the
/// external detail-view listeners. Supplied explicitly by the caller.
pub type BooksRenderedHook = Box<dyn Fn() + Send + Sync>;

/// The render target: a set of named page regions.
///
/// Regions the host never registered are simply not rendered into; filling an
/// unknown id is a silent skip, not an error.
#[derive(Debug, Default)]
pub struct Page {
    regions: BTreeMap<String, String>,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    /// A page with the six regions the portfolio layout defines.
    pub fn standard() -> Self {
        let mut page = Self::new();
        for category in BookCategory::ALL {
            page.register(category.region_id());
        }
        page.register(TALKS_REGION);
        page.register(NEWS_REGION);
        page
    }

    /// Register an (initially empty) region.
    pub fn register(&mut self, id: &str) {
        self.regions.entry(id.to_string()).or_default();
    }

    /// Replace a region's content wholesale. Returns `false` and skips when
    /// the region is not registered.
    pub fn fill(&mut self, id: &str, html: String) -> bool {
        match self.regions.get_mut(id) {
            Some(slot) => {
                *slot = html;
                true
            }
            None => {
                log::debug!("No region '{}' on this page, skipping", id);
                false
            }
        }
    }

    /// Current content of a region.
    pub fn html(&self, id: &str) -> Option<&str> {
        self.regions.get(id).map(String::as_str)
    }

    /// All registered region ids, in stable order.
    pub fn region_ids(&self) -> impl Iterator<Item = &str> {
        self.regions.keys().map(String::as_str)
    }
}

/// Per-page-load state, owned by the orchestrator and passed to renderers.
///
/// Holds the fetched content, the active language, and the expand/collapse
/// flags for the paginated lists. Reset on every run.
#[derive(Default)]
pub struct SessionContext {
    pub language: Language,
    pub books: Vec<Book>,
    pub talks: Vec<Talk>,
    pub news: Vec<NewsItem>,
    pub talks_expanded: bool,
    pub news_expanded: bool,
    /// Whether the detail-view listeners were already attached this session.
    pub listeners_attached: bool,
    pub on_books_rendered: Option<BooksRenderedHook>,
}

impl SessionContext {
    pub fn new(language: Language) -> Self {
        Self {
            language,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_registered_region() {
        let mut page = Page::new();
        page.register("talks-list");
        assert!(page.fill("talks-list", "<p>x</p>".into()));
        assert_eq!(page.html("talks-list"), Some("<p>x</p>"));
    }

    #[test]
    fn test_fill_unknown_region_is_skipped() {
        let mut page = Page::new();
        assert!(!page.fill("missing", "<p>x</p>".into()));
        assert_eq!(page.html("missing"), None);
    }

    #[test]
    fn test_fill_replaces_previous_content() {
        let mut page = Page::new();
        page.register("news-list");
        page.fill("news-list", "<p>old</p>".into());
        page.fill("news-list", "<p>new</p>".into());
        assert_eq!(page.html("news-list"), Some("<p>new</p>"));
    }

    #[test]
    fn test_standard_page_regions() {
        let page = Page::standard();
        let ids: Vec<_> = page.region_ids().collect();
        assert_eq!(ids.len(), 6);
        assert!(ids.contains(&"gallery-fiction"));
        assert!(ids.contains(&"talks-list"));
        assert!(ids.contains(&"news-list"));
    }
}
