// src/render/books.rs

//! Books gallery renderer.
//!
//! Partitions the book records into the four gallery categories and rebuilds
//! each gallery region from scratch. Books whose category column matches none
//! of the four are dropped with a warning.

use std::collections::HashMap;

use crate::models::{Book, BookCategory, Language};
use crate::render::html::escape;
use crate::render::media::{framed_cover, text_cover};
use crate::render::page::{Page, SessionContext};

/// Placeholder shown when a book has no localized title.
const UNTITLED: &str = "Untitled";

/// Render all four gallery regions and fire the detail-view hook.
pub fn render_books(ctx: &mut SessionContext, page: &mut Page) {
    let mut groups: HashMap<BookCategory, Vec<&Book>> = HashMap::new();

    for book in &ctx.books {
        match BookCategory::parse(&book.category) {
            Some(category) => groups.entry(category).or_default().push(book),
            None => log::warn!(
                "Dropping book '{}': unknown category '{}'",
                display_title(book, ctx.language),
                book.category
            ),
        }
    }

    for category in BookCategory::ALL {
        let entries = groups.get(&category).map(Vec::as_slice).unwrap_or(&[]);
        let html: String = entries
            .iter()
            .map(|book| book_entry(book, ctx.language))
            .collect();
        page.fill(category.region_id(), html);
    }

    // Detail-view listeners bind once per session, on the first render.
    if !ctx.listeners_attached {
        if let Some(hook) = &ctx.on_books_rendered {
            hook();
            ctx.listeners_attached = true;
        }
    }
}

fn display_title<'a>(book: &'a Book, language: Language) -> &'a str {
    match book.title.get(language) {
        "" => UNTITLED,
        title => title,
    }
}

fn cover_url(book: &Book, language: Language) -> String {
    match book.cover.get(language) {
        "" => text_cover(display_title(book, language)),
        cover => framed_cover(cover),
    }
}

fn book_entry(book: &Book, language: Language) -> String {
    let title = escape(display_title(book, language));
    let cover = escape(&cover_url(book, language));
    let buy_link = match book.buy_link.get(language) {
        "" => "#".to_string(),
        link => escape(link),
    };
    let edition = escape(book.edition.get(language));
    let description = escape(book.description.get(language));
    let languages = escape(&book.languages);
    let year = escape(&book.year);

    format!(
        r#"<figure class="gallery-item">
  <a class="gallery-cover" href="{buy_link}" target="_blank" rel="noopener">
    <img src="{cover}" alt="{title}" loading="lazy">
  </a>
  <figcaption>
    <h3 class="book-title">{title}</h3>
    <p class="book-edition">{edition}</p>
    <p class="book-description">{description}</p>
    <p class="book-meta"><span class="book-languages">{languages}</span> <span class="book-year">{year}</span></p>
  </figcaption>
</figure>
"#
    )
}
