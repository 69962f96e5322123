// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Splitting field text into index terms.
//!
//! A term is a maximal run of alphanumeric characters, lowercased. Everything
//! else (whitespace, punctuation, symbols) separates terms. No stop words, no
//! stemming, no diacritic folding: `café` and `cafe` are different terms.

/// Word boundary detection: checks if character is a word separator.
#[inline]
pub fn is_word_boundary(c: char) -> bool {
    !c.is_alphanumeric()
}

/// Tokenize text into lowercase terms, in order of appearance.
///
/// Repeated words are repeated in the output; the index counts them.
pub fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(is_word_boundary)
        .filter(|word| !word.is_empty())
        .map(str::to_lowercase)
}
