// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result-list markup.
//!
//! Every engine state has a defined rendering: not ready, error, no results,
//! or a list of result items. Document-provided strings are escaped here;
//! highlighted fragments in [`ResultView`] arrive already escaped.

use html_escape::{encode_double_quoted_attribute, encode_text};
use serde::Serialize;

/// Shown when a result has no category.
pub const DEFAULT_CATEGORY: &str = "Article";

/// Number of tags shown per result.
pub const MAX_TAGS_SHOWN: usize = 3;

/// Everything needed to display one result.
///
/// `title_html` and `snippet_html` are escaped and highlighted. The other
/// strings are raw document text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultView {
    pub url: String,
    pub title_html: String,
    pub category: String,
    /// Human-readable date, empty when missing or unparseable
    pub date: String,
    pub tags: Vec<String>,
    pub snippet_html: String,
}

/// Format an ISO-8601 date (or datetime) as `Jan 5, 2024`.
///
/// Only the leading `YYYY-MM-DD` is read, so times and offsets are ignored.
pub fn format_date(iso: &str) -> Option<String> {
    let day = iso.trim().get(..10)?;
    let date = chrono::NaiveDate::parse_from_str(day, "%Y-%m-%d").ok()?;
    Some(date.format("%b %-d, %Y").to_string())
}

pub fn render_not_ready() -> String {
    r#"<div class="search-item">Search index not ready...</div>"#.to_string()
}

pub fn render_error() -> String {
    r#"<div class="search-item">Search error occurred</div>"#.to_string()
}

/// The empty-result message. The query is echoed back escaped.
pub fn render_no_results(query: &str) -> String {
    format!(
        concat!(
            r#"<div class="search-item no-results">"#,
            r#"<p>No results found for "<strong>{}</strong>"</p>"#,
            r#"<p class="search-tip">Try different keywords or check spelling</p>"#,
            "</div>"
        ),
        encode_text(query.trim())
    )
}

pub fn render_result(view: &ResultView) -> String {
    let tags = if view.tags.is_empty() {
        String::new()
    } else {
        format!(
            r#"<span class="search-tags">{}</span>"#,
            encode_text(&view.tags.join(", "))
        )
    };

    format!(
        concat!(
            r#"<div class="search-item">"#,
            r#"<h3 class="search-title"><a href="{url}">{title}</a></h3>"#,
            r#"<div class="search-meta">"#,
            r#"<span class="search-category">{category}</span>"#,
            r#"<span class="search-date">{date}</span>"#,
            "{tags}",
            "</div>",
            r#"<p class="search-excerpt">{snippet}</p>"#,
            "</div>"
        ),
        url = encode_double_quoted_attribute(&view.url),
        title = view.title_html,
        category = encode_text(&view.category),
        date = encode_text(&view.date),
        tags = tags,
        snippet = view.snippet_html,
    )
}

pub fn render_results(views: &[ResultView]) -> String {
    views.iter().map(render_result).collect()
}
