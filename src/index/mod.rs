// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Index construction: the data structure that makes search fast.
//!
//! One index type: a sorted inverted index from term to per-document,
//! per-field occurrence counts. Sorted because every query term is a prefix,
//! and in a sorted map all terms sharing a prefix sit next to each other.

mod inverted;
pub mod tokenize;

pub use inverted::*;
pub use tokenize::tokenize;
