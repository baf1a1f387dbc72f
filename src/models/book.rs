//! Book records and gallery categories.

use crate::models::{Localized, Record};

/// The four gallery categories the books sheet partitions into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BookCategory {
    Fiction,
    Essays,
    Anthologies,
    Translations,
}

impl BookCategory {
    pub const ALL: [BookCategory; 4] = [
        BookCategory::Fiction,
        BookCategory::Essays,
        BookCategory::Anthologies,
        BookCategory::Translations,
    ];

    /// Case-insensitive match against the sheet's category column.
    /// Unrecognized values yield `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "fiction" => Some(BookCategory::Fiction),
            "essays" => Some(BookCategory::Essays),
            "anthologies" => Some(BookCategory::Anthologies),
            "translations" => Some(BookCategory::Translations),
            _ => None,
        }
    }

    /// Id of the page region this category renders into.
    pub fn region_id(&self) -> &'static str {
        match self {
            BookCategory::Fiction => "gallery-fiction",
            BookCategory::Essays => "gallery-essays",
            BookCategory::Anthologies => "gallery-anthologies",
            BookCategory::Translations => "gallery-translations",
        }
    }
}

/// A book entry, read from one feed record.
#[derive(Debug, Clone, Default)]
pub struct Book {
    pub category: String,
    pub title: Localized,
    pub edition: Localized,
    pub buy_link: Localized,
    pub cover: Localized,
    pub description: Localized,
    pub languages: String,
    pub year: String,
}

impl Book {
    pub fn from_record(record: &Record) -> Self {
        Self {
            category: record.get("category").to_string(),
            title: Localized::new(record.get("title_es"), record.get("title_en")),
            edition: Localized::new(record.get("edition_es"), record.get("edition_en")),
            buy_link: Localized::new(record.get("buy_link_es"), record.get("buy_link_en")),
            cover: Localized::new(record.get("cover_es"), record.get("cover_en")),
            description: Localized::new(
                record.get("description_es"),
                record.get("description_en"),
            ),
            languages: record.get("languages").to_string(),
            year: record.get("year").to_string(),
        }
    }
}
