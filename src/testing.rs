// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::types::Document;

/// Create a simple test document: title and content, nothing else.
///
/// This is the canonical implementation used across all tests.
pub fn make_doc(id: u32, title: &str, content: &str) -> Document {
    Document {
        id,
        title: title.to_string(),
        content: content.to_string(),
        excerpt: None,
        tags: vec![],
        category: None,
        date: None,
        url: format!("/doc/{}/", id),
    }
}

/// Create a test document and adjust the optional fields in a closure.
pub fn make_doc_with(
    id: u32,
    title: &str,
    content: &str,
    adjust: impl FnOnce(&mut Document),
) -> Document {
    let mut doc = make_doc(id, title, content);
    adjust(&mut doc);
    doc
}

/// Serialize documents as a corpus file would hold them.
pub fn corpus_json(docs: &[Document]) -> String {
    serde_json::to_string(docs).unwrap_or_else(|_| "[]".to_string())
}
