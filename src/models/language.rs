//! Site language selection.

use serde::{Deserialize, Serialize};

/// The two languages the site renders in. Spanish is the primary language.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "es")]
    Es,
    #[serde(rename = "en")]
    En,
}

impl Language {
    /// Parse a stored language code. Anything that is not `"en"` reads as the
    /// primary language.
    pub fn from_code(code: &str) -> Self {
        match code.trim() {
            "en" => Language::En,
            _ => Language::Es,
        }
    }

    /// The two-letter code used in storage and markup `lang` attributes.
    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Es => "es",
            Language::En => "en",
        }
    }
}

/// A per-language pair of field values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Localized {
    pub es: String,
    pub en: String,
}

impl Localized {
    pub fn new(es: impl Into<String>, en: impl Into<String>) -> Self {
        Self {
            es: es.into(),
            en: en.into(),
        }
    }

    /// The value for the given language. No cross-language fallback.
    pub fn get(&self, language: Language) -> &str {
        match language {
            Language::Es => &self.es,
            Language::En => &self.en,
        }
    }
}
