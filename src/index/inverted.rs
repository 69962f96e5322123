// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Inverted index construction and prefix lookup.
//!
//! # INVARIANTS (DO NOT VIOLATE)
//!
//! 1. **TERM_PRESENT_IFF_OCCURS**: a term is a key iff it occurs at least once
//!    in a searchable field of at least one document.
//! 2. **NON_EMPTY**: every posting map is non-empty, and every `FieldCounts`
//!    in it has a non-zero total.
//! 3. **SORTED_KEYS**: terms live in a `BTreeMap`, so all terms sharing a
//!    prefix form one contiguous range. Prefix lookup depends on this.
//!
//! The index is built once and never mutated.

use std::collections::BTreeMap;
use std::ops::Bound;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::config::FieldBoosts;
use crate::index::tokenize::tokenize;
use crate::store::DocumentStore;
use crate::types::{DocId, Document, Field};

/// Occurrences of one term in one document, per field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldCounts([u32; Field::COUNT]);

impl FieldCounts {
    #[inline]
    pub fn get(&self, field: Field) -> u32 {
        self.0[field.slot()]
    }

    #[inline]
    fn bump(&mut self, field: Field) {
        self.0[field.slot()] += 1;
    }

    fn add(&mut self, other: &FieldCounts) {
        for (mine, theirs) in self.0.iter_mut().zip(other.0) {
            *mine += theirs;
        }
    }

    pub fn total(&self) -> u32 {
        self.0.iter().sum()
    }

    /// Fields with at least one occurrence.
    pub fn iter(&self) -> impl Iterator<Item = (Field, u32)> + '_ {
        Field::ALL
            .into_iter()
            .map(|field| (field, self.get(field)))
            .filter(|&(_, count)| count > 0)
    }

    /// `Σ count × boost` over all fields.
    pub fn weighted(&self, boosts: &FieldBoosts) -> f64 {
        self.iter()
            .map(|(field, count)| f64::from(count) * boosts.get(field))
            .sum()
    }
}

/// Documents containing a term, with per-field counts.
pub type Postings = BTreeMap<DocId, FieldCounts>;

/// Term → document → per-field occurrence counts.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InvertedIndex {
    terms: BTreeMap<String, Postings>,
}

/// Count every term of one document.
fn document_terms(doc: &Document) -> BTreeMap<String, FieldCounts> {
    let mut counts: BTreeMap<String, FieldCounts> = BTreeMap::new();
    for field in Field::ALL {
        for value in doc.field_values(field) {
            for term in tokenize(value) {
                counts.entry(term).or_default().bump(field);
            }
        }
    }
    counts
}

impl InvertedIndex {
    /// Build the index from every document in the store.
    pub fn build(store: &DocumentStore) -> Self {
        let mut index = Self::default();
        for doc in store.iter() {
            index.insert_document(doc.doc_id(), document_terms(doc));
        }
        index.log_stats();
        index
    }

    /// Same index as [`build`](Self::build), with tokenization spread over rayon.
    ///
    /// Per-document tables are merged in document order, so the result is
    /// identical to the sequential build.
    #[cfg(feature = "parallel")]
    pub fn build_parallel(store: &DocumentStore) -> Self {
        let tables: Vec<BTreeMap<String, FieldCounts>> =
            store.as_slice().par_iter().map(document_terms).collect();

        let mut index = Self::default();
        for (doc, table) in store.iter().zip(tables) {
            index.insert_document(doc.doc_id(), table);
        }
        index.log_stats();
        index
    }

    fn insert_document(&mut self, doc_id: DocId, table: BTreeMap<String, FieldCounts>) {
        for (term, counts) in table {
            self.terms
                .entry(term)
                .or_default()
                .entry(doc_id)
                .or_default()
                .add(&counts);
        }
    }

    fn log_stats(&self) {
        log::debug!(
            "built inverted index: {} terms, {} postings",
            self.terms.len(),
            self.posting_count()
        );
    }

    /// Postings for an exact term.
    pub fn get(&self, term: &str) -> Option<&Postings> {
        self.terms.get(term)
    }

    /// Every stored term starting with `prefix`, in sorted order.
    ///
    /// A range scan from `prefix` that stops at the first term that no longer
    /// starts with it. An empty prefix matches every term.
    pub fn prefix_matches<'a>(
        &'a self,
        prefix: &'a str,
    ) -> impl Iterator<Item = (&'a str, &'a Postings)> + 'a {
        self.terms
            .range::<str, _>((Bound::Included(prefix), Bound::Unbounded))
            .take_while(move |(term, _)| term.starts_with(prefix))
            .map(|(term, postings)| (term.as_str(), postings))
    }

    pub fn terms(&self) -> impl Iterator<Item = (&str, &Postings)> {
        self.terms.iter().map(|(term, postings)| (term.as_str(), postings))
    }

    /// Number of distinct terms.
    pub fn term_count(&self) -> usize {
        self.terms.len()
    }

    /// Number of (term, document) pairs.
    pub fn posting_count(&self) -> usize {
        self.terms.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}
