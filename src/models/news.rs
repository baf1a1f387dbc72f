//! News item records.

use crate::models::{Localized, Record};

/// A news entry, read from one feed record.
#[derive(Debug, Clone, Default)]
pub struct NewsItem {
    pub date: Localized,
    pub title: Localized,
    pub description: Localized,
    /// Image source URL; empty when the entry has no image.
    pub image: String,
    /// External link for the full story.
    pub link: String,
}

impl NewsItem {
    pub fn from_record(record: &Record) -> Self {
        Self {
            date: Localized::new(record.get("date_es"), record.get("date_en")),
            title: Localized::new(record.get("title_es"), record.get("title_en")),
            description: Localized::new(
                record.get("description_es"),
                record.get("description_en"),
            ),
            image: record.get("image").to_string(),
            link: record.get("link").to_string(),
        }
    }
}
