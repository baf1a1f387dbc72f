//! Talk records.

use crate::models::{Localized, Record};

/// A talk or public appearance, read from one feed record.
#[derive(Debug, Clone, Default)]
pub struct Talk {
    pub title: Localized,
    pub description: Localized,
    pub link_text: Localized,
    pub date: Localized,
    pub venue: Localized,
    /// External link to the event or article.
    pub link: String,
    /// Optional link to a video recording; empty when none exists.
    pub video_link: String,
}

impl Talk {
    pub fn from_record(record: &Record) -> Self {
        Self {
            title: Localized::new(record.get("title_es"), record.get("title_en")),
            description: Localized::new(
                record.get("description_es"),
                record.get("description_en"),
            ),
            link_text: Localized::new(record.get("link_text_es"), record.get("link_text_en")),
            date: Localized::new(record.get("date_es"), record.get("date_en")),
            venue: Localized::new(record.get("venue_es"), record.get("venue_en")),
            link: record.get("link").to_string(),
            video_link: record.get("video_link").to_string(),
        }
    }
}
