// src/render/news.rs

//! News list renderer.
//!
//! Same three-item collapse/expand pattern as the talks list, without the
//! video branch. Each rendered item carries its both-language values as inert
//! `data-*` attributes so the external detail view can re-localize without a
//! refetch.

use crate::models::{Language, NewsItem};
use crate::render::html::escape;
use crate::render::page::{Page, SessionContext};

pub const NEWS_REGION: &str = "news-list";

/// Items shown while collapsed.
const VISIBLE_COLLAPSED: usize = 3;

/// Render the news region according to the session's expanded flag.
pub fn render_news(ctx: &SessionContext, page: &mut Page) {
    let visible = if ctx.news_expanded {
        ctx.news.len()
    } else {
        ctx.news.len().min(VISIBLE_COLLAPSED)
    };

    let html: String = ctx.news[..visible]
        .iter()
        .map(|item| news_entry(item, ctx.language))
        .collect();
    page.fill(NEWS_REGION, html);
}

/// Expand to the full list and re-render.
pub fn show_all_news(ctx: &mut SessionContext, page: &mut Page) {
    ctx.news_expanded = true;
    render_news(ctx, page);
}

/// Collapse back to the default three and re-render.
pub fn collapse_news(ctx: &mut SessionContext, page: &mut Page) {
    ctx.news_expanded = false;
    render_news(ctx, page);
}

fn news_entry(item: &NewsItem, language: Language) -> String {
    let date = escape(item.date.get(language));
    let title = escape(item.title.get(language));
    let description = escape(item.description.get(language));
    let link = match item.link.as_str() {
        "" => "#".to_string(),
        link => escape(link),
    };

    let image_html = if item.image.is_empty() {
        String::new()
    } else {
        format!(
            "\n  <img class=\"news-image\" src=\"{}\" alt=\"{title}\" loading=\"lazy\">",
            escape(&item.image)
        )
    };

    format!(
        r#"<article class="news-item" data-date-es="{date_es}" data-date-en="{date_en}" data-title-es="{title_es}" data-title-en="{title_en}" data-description-es="{description_es}" data-description-en="{description_en}" data-image="{image}" data-link="{data_link}">{image_html}
  <div class="news-text">
    <span class="news-date">{date}</span>
    <h3 class="news-title">{title}</h3>
    <p class="news-description">{description}</p>
    <a class="news-link" href="{link}" target="_blank" rel="noopener">→</a>
  </div>
</article>
"#,
        date_es = escape(&item.date.es),
        date_en = escape(&item.date.en),
        title_es = escape(&item.title.es),
        title_en = escape(&item.title.en),
        description_es = escape(&item.description.es),
        description_en = escape(&item.description.en),
        image = escape(&item.image),
        data_link = escape(&item.link),
    )
}
