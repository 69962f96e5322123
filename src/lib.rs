// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Client-side full-text search for static sites.
//!
//! A site ships its pages as a JSON corpus. This crate indexes that corpus in
//! the browser (via WASM) or natively, answers search-as-you-type queries with
//! boosted prefix matching, and renders highlighted result snippets.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │   store.rs   │────▶│    index/    │────▶│   search/    │
//! │ (Document,   │     │ (tokenize,   │     │ (parse_query,│
//! │  ids by pos) │     │  BTreeMap)   │     │  rank)       │
//! └──────────────┘     └──────────────┘     └──────────────┘
//!                                                  │
//!        ┌─────────────────────────────────────────┘
//!        ▼
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │  engine.rs   │────▶│   render/    │     │    ui.rs     │
//! │ (lifecycle,  │     │ (snippet,    │◀────│ (SearchPanel,│
//! │  outcomes)   │     │  highlight)  │     │  controller) │
//! └──────────────┘     └──────────────┘     └──────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use sitesift::{SearchEngine, SearchOutcome};
//!
//! let mut engine = SearchEngine::default();
//! engine
//!     .load_corpus_json(r#"[{"title": "Rust Guide", "content": "Learn rust.", "url": "/rust/"}]"#)
//!     .unwrap();
//!
//! match engine.search("rus") {
//!     SearchOutcome::Results { results } => assert_eq!(results.len(), 1),
//!     other => panic!("unexpected {:?}", other),
//! }
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod index;
pub mod render;
pub mod search;
pub mod store;
pub mod testing;
pub mod types;
pub mod ui;

#[cfg(feature = "wasm")]
pub mod runtime;

pub use config::{FieldBoosts, SearchConfig};
pub use engine::{SearchEngine, SearchOutcome};
pub use error::{ConfigError, CorpusError, EngineError, SearchError};
pub use index::{FieldCounts, InvertedIndex};
pub use render::{extract_snippet, format_date, highlight, ResultView};
pub use search::{parse_query, rank, ParsedQuery, PrefixTerm, MIN_QUERY_CHARS};
pub use store::DocumentStore;
pub use types::{DocId, Document, Field, SearchResult};
pub use ui::{KeyAction, KeyInput, SearchController, SearchPanel};
