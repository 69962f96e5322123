// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types.
//!
//! None of these are fatal to the page. Corpus failures leave the engine in
//! the not-ready state, search failures become a `SearchOutcome::Error`, and
//! config failures are reported before an engine exists.

use thiserror::Error;

use crate::types::{DocId, Field};

/// The corpus could not be loaded.
#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("Failed to read corpus: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid corpus JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Corpus has {0} documents, more than a u32 id can address")]
    TooLarge(usize),
}

/// A configuration value is out of range.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Boost for field '{field}' must be positive and finite, got {value}")]
    InvalidBoost { field: Field, value: f64 },

    #[error("Result limit must be at least 1")]
    ZeroLimit,

    #[error("Snippet length must be at least 1 character")]
    ZeroSnippetLen,
}

/// Engine lifecycle misuse or a failed corpus.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Search index is already built")]
    AlreadyBuilt,

    #[error("Corpus already failed to load: {0}")]
    LoadFailed(String),

    #[error(transparent)]
    Corpus(#[from] CorpusError),
}

/// Something went wrong while ranking or rendering a single search.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("Document {0} is not in the store")]
    UnknownDocument(DocId),
}
