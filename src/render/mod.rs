// src/render/mod.rs

//! HTML fragment rendering into page regions.
//!
//! One renderer per content category:
//! - Books: four category galleries (`render_books`)
//! - Talks: paginated list with optional video embeds (`render_talks`)
//! - News: paginated list with bilingual data attributes (`render_news`)
//!
//! Renderers rebuild their regions wholesale on every call, so re-rendering
//! with the same inputs is idempotent.

mod books;
mod html;
mod media;
mod news;
mod page;
mod talks;

pub use books::render_books;
pub use html::escape;
pub use media::{embed_url, framed_cover, text_cover, video_id};
pub use news::{NEWS_REGION, collapse_news, render_news, show_all_news};
pub use page::{BooksRenderedHook, Page, SessionContext};
pub use talks::{TALKS_REGION, collapse_talks, render_talks, show_all_talks};
