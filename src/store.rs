// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The document store: the corpus as loaded, read-only afterwards.
//!
//! The corpus is a JSON array of page records (usually served as a static
//! `search.json`). Loading assigns each record its position as id, so ids are
//! dense and zero-based no matter what the file says.

use std::fs;
use std::io::Read;
use std::path::Path;

use crate::error::CorpusError;
use crate::types::{DocId, Document};

/// The loaded corpus.
#[derive(Debug, Clone, Default)]
pub struct DocumentStore {
    docs: Vec<Document>,
}

impl DocumentStore {
    /// Take ownership of documents, renumbering ids by position.
    pub fn from_documents(mut docs: Vec<Document>) -> Result<Self, CorpusError> {
        if u32::try_from(docs.len()).is_err() {
            return Err(CorpusError::TooLarge(docs.len()));
        }
        for (position, doc) in docs.iter_mut().enumerate() {
            doc.id = position as u32;
        }
        Ok(Self { docs })
    }

    /// Parse a JSON array of documents.
    pub fn from_json(json: &str) -> Result<Self, CorpusError> {
        let docs: Vec<Document> = serde_json::from_str(json)?;
        Self::from_documents(docs)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CorpusError> {
        let docs: Vec<Document> = serde_json::from_reader(reader)?;
        Self::from_documents(docs)
    }

    pub fn from_path(path: &Path) -> Result<Self, CorpusError> {
        let file = fs::File::open(path)?;
        Self::from_reader(std::io::BufReader::new(file))
    }

    #[inline]
    pub fn get(&self, id: DocId) -> Option<&Document> {
        self.docs.get(id.as_usize())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.docs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Document> {
        self.docs.iter()
    }

    pub fn as_slice(&self) -> &[Document] {
        &self.docs
    }
}
