// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of a site search.
//!
//! Documents come in from the corpus, fields say which part of a document a
//! term came from, and results point back at documents by id.
//!
//! # Invariants
//!
//! - **Document**: `id` equals the document's position in the store. Ids are
//!   assigned at load time and are dense and zero-based.
//! - **Field**: every variant has a boost in [`FieldBoosts`](crate::FieldBoosts).
//!   Fields without a variant (url, date) are never searched.
//! - **SearchResult**: `score > 0` for anything the ranker returns.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

// =============================================================================
// NEWTYPES
// =============================================================================

/// Type-safe document identifier.
///
/// Prevents accidentally passing a result position or a term count where a
/// document id is expected. Ids are positions in the [`DocumentStore`](crate::DocumentStore).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(transparent)]
pub struct DocId(pub u32);

impl DocId {
    /// Get the underlying value.
    #[inline]
    pub fn get(self) -> u32 {
        self.0
    }

    /// Convert to usize for array indexing.
    #[inline]
    pub fn as_usize(self) -> usize {
        self.0 as usize
    }
}

impl From<u32> for DocId {
    fn from(id: u32) -> Self {
        DocId(id)
    }
}

impl From<DocId> for usize {
    fn from(id: DocId) -> Self {
        id.0 as usize
    }
}

impl fmt::Display for DocId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// DOCUMENT TYPES
// =============================================================================

/// Missing and `null` both mean empty. Site generators emit `null` for
/// untagged or bodiless pages.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// One page of the site, as it appears in the corpus.
///
/// `title` and `url` are required. Everything else defaults to empty so that
/// sparse corpus records still load. Any `id` in the input is never read,
/// whatever its type: the store assigns the record's position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    #[serde(skip_deserializing)]
    pub id: u32,
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub content: String,
    #[serde(default)]
    pub excerpt: Option<String>,
    /// Tags/labels for categorization
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    #[serde(default)]
    pub category: Option<String>,
    /// ISO-8601 date, e.g. `2024-01-05` or `2024-01-05T10:00:00Z`
    #[serde(default)]
    pub date: Option<String>,
    pub url: String,
}

impl Document {
    pub fn doc_id(&self) -> DocId {
        DocId(self.id)
    }

    /// Text of a searchable field, one entry per independently tokenized value.
    ///
    /// Tags yield one entry per tag so that adjacent tags never fuse into a token.
    pub fn field_values(&self, field: Field) -> Vec<&str> {
        match field {
            Field::Title => vec![self.title.as_str()],
            Field::Content => vec![self.content.as_str()],
            Field::Excerpt => self.excerpt.as_deref().into_iter().collect(),
            Field::Category => self.category.as_deref().into_iter().collect(),
            Field::Tags => self.tags.iter().map(String::as_str).collect(),
        }
    }
}

/// A searchable document field.
///
/// The declaration order is also the slot order in [`FieldCounts`](crate::index::FieldCounts).
/// It says nothing about importance: that is what boosts are for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Title,
    Excerpt,
    Content,
    Tags,
    Category,
}

impl Field {
    /// Number of searchable fields.
    pub const COUNT: usize = 5;

    /// All searchable fields in slot order.
    pub const ALL: [Field; Field::COUNT] = [
        Field::Title,
        Field::Excerpt,
        Field::Content,
        Field::Tags,
        Field::Category,
    ];

    /// Slot of this field in per-field arrays.
    #[inline]
    pub fn slot(self) -> usize {
        self as usize
    }

    /// Convert to lowercase string representation.
    ///
    /// Matches the serde `rename_all = "lowercase"` convention.
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Title => "title",
            Field::Excerpt => "excerpt",
            Field::Content => "content",
            Field::Tags => "tags",
            Field::Category => "category",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// RESULT TYPES
// =============================================================================

/// A ranked reference to a document.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub doc_id: DocId,
    pub score: f64,
}
