// src/render/html.rs

//! HTML text helpers.

/// Escape the five HTML-sensitive characters.
///
/// Every sheet-supplied value that reaches markup goes through this, whether it
/// lands in element content or in a quoted attribute.
pub fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
