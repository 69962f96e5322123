// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Ranking: prefix terms in, score-ordered document references out.
//!
//! For every query term, every index term it is a prefix of contributes
//! `count × boost` per field to each document containing it. Scores add up
//! across query terms, so a document matching two terms beats one matching a
//! single term, all else equal. Repeated query terms add again.
//!
//! Ordering is score descending, then doc id ascending. No other tiebreaker,
//! so results are fully determined by the index and the query.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use crate::config::FieldBoosts;
use crate::index::InvertedIndex;
use crate::search::query::PrefixTerm;
use crate::types::{DocId, SearchResult};

/// Compare two search results for ranking.
///
/// Sort order:
/// 1. **Score** - descending (higher wins)
/// 2. **Doc ID** - ascending, for absolute determinism
pub fn compare_results(a: &SearchResult, b: &SearchResult) -> Ordering {
    match b.score.partial_cmp(&a.score) {
        Some(ord) if ord != Ordering::Equal => ord,
        _ => a.doc_id.cmp(&b.doc_id),
    }
}

/// Score every matching document, best first. Not truncated.
pub fn rank(index: &InvertedIndex, terms: &[PrefixTerm], boosts: &FieldBoosts) -> Vec<SearchResult> {
    let mut scores: BTreeMap<DocId, f64> = BTreeMap::new();

    for term in terms {
        for (_, postings) in index.prefix_matches(term.as_str()) {
            for (&doc_id, counts) in postings {
                *scores.entry(doc_id).or_insert(0.0) += counts.weighted(boosts);
            }
        }
    }

    let mut results: Vec<SearchResult> = scores
        .into_iter()
        .filter(|&(_, score)| score > 0.0)
        .map(|(doc_id, score)| SearchResult { doc_id, score })
        .collect();

    results.sort_by(compare_results);
    results
}

/// [`rank`], keeping only the best `limit` results.
pub fn rank_top(
    index: &InvertedIndex,
    terms: &[PrefixTerm],
    boosts: &FieldBoosts,
    limit: usize,
) -> Vec<SearchResult> {
    let mut results = rank(index, terms, boosts);
    results.truncate(limit);
    results
}
