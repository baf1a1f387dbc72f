// src/render/talks.rs

//! Talks list renderer.
//!
//! Shows the first three talks by default; `show_all` / `collapse` flip the
//! session flag and fully re-render the region. A talk with a recognizable
//! video link renders as a two-column layout with an embedded player.

use crate::models::{Language, Talk};
use crate::render::html::escape;
use crate::render::media::{embed_url, video_id};
use crate::render::page::{Page, SessionContext};

pub const TALKS_REGION: &str = "talks-list";

/// Items shown while collapsed.
const VISIBLE_COLLAPSED: usize = 3;

/// Render the talks region according to the session's expanded flag.
pub fn render_talks(ctx: &SessionContext, page: &mut Page) {
    let visible = if ctx.talks_expanded {
        ctx.talks.len()
    } else {
        ctx.talks.len().min(VISIBLE_COLLAPSED)
    };

    let html: String = ctx.talks[..visible]
        .iter()
        .map(|talk| talk_entry(talk, ctx.language))
        .collect();
    page.fill(TALKS_REGION, html);
}

/// Expand to the full list and re-render.
pub fn show_all_talks(ctx: &mut SessionContext, page: &mut Page) {
    ctx.talks_expanded = true;
    render_talks(ctx, page);
}

/// Collapse back to the default three and re-render.
pub fn collapse_talks(ctx: &mut SessionContext, page: &mut Page) {
    ctx.talks_expanded = false;
    render_talks(ctx, page);
}

/// Date and venue joined with a separator only when both are present.
fn meta_line(talk: &Talk, language: Language) -> String {
    let date = talk.date.get(language).trim();
    let venue = talk.venue.get(language).trim();
    match (date.is_empty(), venue.is_empty()) {
        (false, false) => format!("{} · {}", date, venue),
        (false, true) => date.to_string(),
        (true, false) => venue.to_string(),
        (true, true) => String::new(),
    }
}

fn talk_body(talk: &Talk, language: Language) -> String {
    let title = escape(talk.title.get(language));
    let description = escape(talk.description.get(language));
    let meta = escape(&meta_line(talk, language));

    let meta_html = if meta.is_empty() {
        String::new()
    } else {
        format!("\n    <p class=\"talk-meta\">{meta}</p>")
    };

    let link_text = talk.link_text.get(language);
    let link_html = if link_text.is_empty() {
        String::new()
    } else {
        let href = match talk.link.as_str() {
            "" => "#".to_string(),
            link => escape(link),
        };
        format!(
            "\n    <a class=\"talk-link\" href=\"{href}\" target=\"_blank\" rel=\"noopener\">{}</a>",
            escape(link_text)
        )
    };

    format!(
        r#"<h3 class="talk-title">{title}</h3>{meta_html}
    <p class="talk-description">{description}</p>{link_html}"#
    )
}

fn talk_entry(talk: &Talk, language: Language) -> String {
    let body = talk_body(talk, language);

    match video_id(&talk.video_link) {
        Some(id) => {
            let src = embed_url(id);
            format!(
                r#"<article class="talk-item talk-item--video">
  <div class="talk-player">
    <iframe src="{src}" title="{title}" loading="lazy" allowfullscreen></iframe>
  </div>
  <div class="talk-text">
    {body}
  </div>
</article>
"#,
                title = escape(talk.title.get(language)),
            )
        }
        None => format!(
            r#"<article class="talk-item">
  <div class="talk-text">
    {body}
  </div>
</article>
"#
        ),
    }
}
