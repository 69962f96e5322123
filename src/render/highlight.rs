// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Highlighting query words inside display text.
//!
//! One pass collects the match spans of every query word, then overlapping
//! spans are merged and each merged span is wrapped once. Running a replace
//! per word instead would highlight inside earlier `<mark>` tags, or nest marks
//! when one word contains another (`cat cats` on `cats`).
//!
//! Matching is literal and case-insensitive, with the original case kept in
//! the output. No pattern engine sees the query, so `.` `*` `(` are just
//! characters.
//!
//! # HTML safety
//!
//! Input text must already be HTML-escaped. Query words are escaped the same
//! way before matching, so `a&b` finds `a&amp;b`. Spans that start or end
//! inside an entity are dropped: searching `amp` never splits `&amp;`. The
//! only markup added is `<mark>` and `</mark>`.

use crate::search::query::highlight_words;

pub const MARK_OPEN: &str = "<mark>";
pub const MARK_CLOSE: &str = "</mark>";

/// Case folding for matching: the single-character lowercase form, or the
/// character itself when lowercasing would change the length (e.g. `İ`).
///
/// Keeping one char per char is what lets match positions map straight back
/// onto the original text.
#[inline]
fn fold(c: char) -> char {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => l,
        _ => c,
    }
}

/// Byte ranges of HTML entities (`&name;`, `&#123;`, `&#x1F;`) in `text`.
fn entity_spans(text: &str) -> Vec<(usize, usize)> {
    let bytes = text.as_bytes();
    let mut spans = Vec::new();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'&' {
            let mut j = i + 1;
            while j < bytes.len() && (bytes[j].is_ascii_alphanumeric() || bytes[j] == b'#') {
                j += 1;
            }
            if j > i + 1 && j < bytes.len() && bytes[j] == b';' {
                spans.push((i, j + 1));
                i = j + 1;
                continue;
            }
        }
        i += 1;
    }
    spans
}

/// True if `offset` falls strictly inside an entity.
fn cuts_entity(offset: usize, entities: &[(usize, usize)]) -> bool {
    entities
        .iter()
        .any(|&(start, end)| offset > start && offset < end)
}

/// Byte spans of every occurrence of every highlightable query word, merged.
fn match_spans(text: &str, query: &str) -> Vec<(usize, usize)> {
    let words = highlight_words(query);
    if words.is_empty() {
        return Vec::new();
    }

    let chars: Vec<(usize, char)> = text.char_indices().map(|(i, c)| (i, fold(c))).collect();
    let byte_at = |char_idx: usize| chars.get(char_idx).map_or(text.len(), |&(b, _)| b);
    let entities = entity_spans(text);

    let mut spans: Vec<(usize, usize)> = Vec::new();
    for word in words {
        let needle: Vec<char> = html_escape::encode_text(word).chars().map(fold).collect();
        if needle.len() > chars.len() {
            continue;
        }
        for start in 0..=chars.len() - needle.len() {
            let hit = needle
                .iter()
                .zip(&chars[start..])
                .all(|(n, &(_, c))| *n == c);
            if !hit {
                continue;
            }
            let (from, to) = (byte_at(start), byte_at(start + needle.len()));
            if !cuts_entity(from, &entities) && !cuts_entity(to, &entities) {
                spans.push((from, to));
            }
        }
    }

    spans.sort_unstable();
    let mut merged: Vec<(usize, usize)> = Vec::with_capacity(spans.len());
    for (start, end) in spans {
        match merged.last_mut() {
            Some(last) if start <= last.1 => last.1 = last.1.max(end),
            _ => merged.push((start, end)),
        }
    }
    merged
}

/// Wrap every occurrence of the query's words (two characters or longer) in
/// `<mark>` tags.
///
/// # Example
///
/// ```
/// use sitesift::highlight;
///
/// assert_eq!(highlight("The Quick Fox", "quick"), "The <mark>Quick</mark> Fox");
/// assert_eq!(highlight("cats", "cat cats"), "<mark>cats</mark>");
/// ```
pub fn highlight(text: &str, query: &str) -> String {
    let spans = match_spans(text, query);
    if spans.is_empty() {
        return text.to_string();
    }

    let mut out =
        String::with_capacity(text.len() + spans.len() * (MARK_OPEN.len() + MARK_CLOSE.len()));
    let mut cursor = 0;
    for (start, end) in spans {
        out.push_str(&text[cursor..start]);
        out.push_str(MARK_OPEN);
        out.push_str(&text[start..end]);
        out.push_str(MARK_CLOSE);
        cursor = end;
    }
    out.push_str(&text[cursor..]);
    out
}
