// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Snippet extraction: the sentence that best shows why a page matched.
//!
//! Content is cut into sentence-like segments at `.`, `!` and `?`. The segment
//! containing the most distinct query words wins (first one on ties). If no
//! segment contains any query word, the snippet is the start of the content,
//! so a non-empty page never produces an empty snippet.

/// Appended when a snippet is cut short.
pub const ELLIPSIS: &str = "...";

#[inline]
fn is_sentence_end(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}

/// Pick the most relevant segment of `content` for `query`, at most
/// `max_chars` characters plus [`ELLIPSIS`].
///
/// Word matching is case-insensitive substring containment, so `rust` counts
/// inside `Rustacean`. Single-character words count too.
pub fn extract_snippet(content: &str, query: &str, max_chars: usize) -> String {
    let lowered = query.to_lowercase();
    let mut words: Vec<&str> = lowered.split_whitespace().collect();
    words.sort_unstable();
    words.dedup();

    let mut best: Option<&str> = None;
    let mut best_count = 0;

    for segment in content.split(is_sentence_end) {
        let segment_lower = segment.to_lowercase();
        let count = words
            .iter()
            .filter(|word| segment_lower.contains(**word))
            .count();
        if count > best_count {
            best_count = count;
            best = Some(segment.trim());
        }
    }

    truncate_chars(best.unwrap_or(content), max_chars)
}

/// Cut `text` to `max_chars` characters, appending [`ELLIPSIS`] if anything was cut.
///
/// Counts Unicode scalar values, never splitting a character.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_offset, _)) => format!("{}{}", &text[..byte_offset], ELLIPSIS),
        None => text.to_string(),
    }
}
