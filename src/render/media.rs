// src/render/media.rs

//! Cover image and video link handling.
//!
//! Cover URLs go through the image host's path-directive scheme: a fixed
//! crop/pad directive is spliced into the upload path, and books without a
//! cover get a synthesized placeholder that renders the title as text.

use std::sync::OnceLock;

use regex::Regex;

/// Image host base for synthesized placeholder covers.
const PLACEHOLDER_BASE: &str = "https://res.cloudinary.com/folio-site/image/upload";

/// Fixed signature overlay stamped on every placeholder cover.
const SIGNATURE_OVERLAY: &str = "l_firma_blanca,w_140,o_70,g_south_east,x_24,y_24";

/// The upload-path segment that accepts transformation directives.
const UPLOAD_SEGMENT: &str = "/image/upload/";

/// Crop/pad directive applied to real covers.
const FRAME_DIRECTIVE: &str = "/image/upload/w_300,h_450,c_pad,b_auto/";

/// A YouTube video identifier is exactly 11 characters.
const VIDEO_ID_LEN: usize = 11;

/// Splice the fixed crop/pad directive into a cover URL.
///
/// URLs that do not contain the upload segment pass through unchanged.
pub fn framed_cover(url: &str) -> String {
    url.replacen(UPLOAD_SEGMENT, FRAME_DIRECTIVE, 1)
}

/// Build a placeholder cover that renders the title as text, with a font size
/// tier chosen by title length and the fixed signature overlay.
pub fn text_cover(title: &str) -> String {
    let size = font_size_for(title);
    let text = encode_overlay_text(title);
    format!(
        "{PLACEHOLDER_BASE}/w_300,h_450,c_pad,b_rgb:20242b,co_rgb:f4f1ea,\
         l_text:georgia_{size}_center:{text}/{SIGNATURE_OVERLAY}/v1/blank_cover.jpg"
    )
}

/// Font size tier for a placeholder cover title.
fn font_size_for(title: &str) -> u32 {
    let len = title.chars().count();
    if len > 55 {
        24
    } else if len > 25 {
        34
    } else {
        44
    }
}

/// Percent-encode a title for use inside an overlay path segment.
fn encode_overlay_text(title: &str) -> String {
    let encoded: String = url::form_urlencoded::byte_serialize(title.as_bytes()).collect();
    encoded.replace('+', "%20")
}

fn video_link_shapes() -> &'static [Regex] {
    static SHAPES: OnceLock<Vec<Regex>> = OnceLock::new();
    SHAPES.get_or_init(|| {
        [
            r"youtu\.be/([\w-]+)",
            r"youtube\.com/watch\?(?:[^#\s]*&)?v=([\w-]+)",
            r"youtube\.com/embed/([\w-]+)",
            r"youtube\.com/shorts/([\w-]+)",
        ]
        .iter()
        .map(|p| Regex::new(p).expect("video link pattern"))
        .collect()
    })
}

/// Extract a video identifier from a link (looks for common YouTube shapes).
///
/// Returns the identifier only when it is exactly 11 characters; anything else
/// means the link is not embeddable.
pub fn video_id(link: &str) -> Option<&str> {
    for shape in video_link_shapes() {
        if let Some(caps) = shape.captures(link) {
            let id = caps.get(1)?.as_str();
            if id.len() == VIDEO_ID_LEN {
                return Some(id);
            }
        }
    }
    None
}

/// Iframe source URL for a validated video identifier.
pub fn embed_url(id: &str) -> String {
    format!("https://www.youtube.com/embed/{id}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_framed_cover_splices_directive() {
        assert_eq!(
            framed_cover("https://res.cloudinary.com/folio-site/image/upload/v7/covers/casa.jpg"),
            "https://res.cloudinary.com/folio-site/image/upload/w_300,h_450,c_pad,b_auto/v7/covers/casa.jpg"
        );
    }

    #[test]
    fn test_framed_cover_passthrough_without_segment() {
        let url = "https://example.com/covers/casa.jpg";
        assert_eq!(framed_cover(url), url);
    }

    #[test]
    fn test_font_size_tiers() {
        assert_eq!(font_size_for(&"x".repeat(60)), 24);
        assert_eq!(font_size_for(&"x".repeat(30)), 34);
        assert_eq!(font_size_for(&"x".repeat(10)), 44);
        // Boundaries: 55 and 25 are not over the tier threshold.
        assert_eq!(font_size_for(&"x".repeat(56)), 24);
        assert_eq!(font_size_for(&"x".repeat(55)), 34);
        assert_eq!(font_size_for(&"x".repeat(25)), 44);
    }

    #[test]
    fn test_text_cover_encodes_title() {
        let url = text_cover("La casa & el mar");
        assert!(url.contains("l_text:georgia_44_center:La%20casa%20%26%20el%20mar"));
        assert!(url.ends_with("/v1/blank_cover.jpg"));
        assert!(url.contains(SIGNATURE_OVERLAY));
    }

    #[test]
    fn test_video_id_short_link() {
        assert_eq!(video_id("https://youtu.be/dQw4w9WgXcQ"), Some("dQw4w9WgXcQ"));
    }

    #[test]
    fn test_video_id_watch_link() {
        assert_eq!(
            video_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ")
        );
        assert_eq!(
            video_id("https://www.youtube.com/watch?list=PL123&v=dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ")
        );
    }

    #[test]
    fn test_video_id_embed_and_shorts() {
        assert_eq!(
            video_id("https://www.youtube.com/embed/dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ")
        );
        assert_eq!(
            video_id("https://www.youtube.com/shorts/dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ")
        );
    }

    #[test]
    fn test_video_id_rejects_wrong_length() {
        assert_eq!(video_id("https://youtu.be/short"), None);
        assert_eq!(video_id("https://youtu.be/waytoolongidentifier"), None);
    }

    #[test]
    fn test_video_id_rejects_unrelated_links() {
        assert_eq!(video_id("https://vimeo.com/123456789"), None);
        assert_eq!(video_id(""), None);
    }

    #[test]
    fn test_embed_url() {
        assert_eq!(
            embed_url("dQw4w9WgXcQ"),
            "https://www.youtube.com/embed/dQw4w9WgXcQ"
        );
    }
}
