// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query processing: raw input text → prefix terms.
//!
//! Every query term is a prefix. There is no exact-match mode: typing `sear`
//! should already find `search`, because that is what search-as-you-type means.
//!
//! Matching and highlighting see slightly different word lists. Matching keeps
//! single-character terms (`c` in `c++` can still rank something), while
//! highlighting drops them because marking every `a` on a page is just noise.
//! This asymmetry is intended; see [`highlight_words`].

use crate::index::tokenize::tokenize;

/// Below this many characters (after trimming) no lookup happens at all.
pub const MIN_QUERY_CHARS: usize = 2;

/// Query words shorter than this are not highlighted.
pub const MIN_HIGHLIGHT_CHARS: usize = 2;

/// A lowercase term matched against every index term it is a prefix of.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixTerm(String);

impl PrefixTerm {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// The structured form of a query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedQuery {
    /// Fewer than [`MIN_QUERY_CHARS`] characters. The caller hides results.
    TooShort,
    /// Prefix terms in input order. Duplicates are kept: a repeated term
    /// counts twice in scoring.
    Terms(Vec<PrefixTerm>),
}

/// Turn raw input into prefix terms.
///
/// The input goes through the same tokenizer as indexed text, so a query term
/// is always something the index could hold: `"rust,"` finds `rust`,
/// `rust-lang` searches `rust` and `lang`, and `c++` searches `c`. Words that
/// are all punctuation disappear.
///
/// # Example
///
/// ```
/// use sitesift::{parse_query, ParsedQuery};
///
/// assert_eq!(parse_query(" a "), ParsedQuery::TooShort);
/// match parse_query("Rust, WASM") {
///     ParsedQuery::Terms(terms) => {
///         let terms: Vec<&str> = terms.iter().map(|t| t.as_str()).collect();
///         assert_eq!(terms, vec!["rust", "wasm"]);
///     }
///     ParsedQuery::TooShort => unreachable!(),
/// }
/// ```
pub fn parse_query(raw: &str) -> ParsedQuery {
    let trimmed = raw.trim();
    if trimmed.chars().count() < MIN_QUERY_CHARS {
        return ParsedQuery::TooShort;
    }

    let terms = tokenize(trimmed).map(PrefixTerm).collect();

    ParsedQuery::Terms(terms)
}

/// Query words worth highlighting: whitespace-separated, at least two characters.
///
/// Words are returned as typed (no trimming, no lowercasing). The highlighter
/// matches case-insensitively on its own.
pub fn highlight_words(query: &str) -> Vec<&str> {
    query
        .split_whitespace()
        .filter(|word| word.chars().count() >= MIN_HIGHLIGHT_CHARS)
        .collect()
}
