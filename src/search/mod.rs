// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search: where the index pays off.
//!
//! Two steps. The query processor turns what the user typed into prefix
//! terms (or says the input is too short to bother). The ranker expands each
//! prefix against the sorted term map and adds up boosted field counts.

pub mod query;
pub mod ranker;

pub use query::{highlight_words, parse_query, ParsedQuery, PrefixTerm, MIN_QUERY_CHARS};
pub use ranker::{compare_results, rank, rank_top};
