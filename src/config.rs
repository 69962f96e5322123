// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search configuration.
//!
//! Everything a host may reasonably tune: how many results to show, how long
//! snippets are, and how much each field counts. The minimum query length is
//! fixed at [`MIN_QUERY_CHARS`](crate::MIN_QUERY_CHARS).
//!
//! ```json
//! { "limit": 8, "snippetLen": 200, "boost": { "title": 10, "content": 5 } }
//! ```

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::types::Field;

/// Default maximum number of results.
pub const DEFAULT_LIMIT: usize = 8;

/// Default snippet length in characters.
pub const DEFAULT_SNIPPET_LEN: usize = 200;

pub const DEFAULT_TITLE_BOOST: f64 = 10.0;
pub const DEFAULT_EXCERPT_BOOST: f64 = 7.0;
pub const DEFAULT_CONTENT_BOOST: f64 = 5.0;
pub const DEFAULT_TAGS_BOOST: f64 = 3.0;
pub const DEFAULT_CATEGORY_BOOST: f64 = 3.0;

/// Per-field score multipliers.
///
/// Every [`Field`] has an entry, so a lookup can never miss.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldBoosts {
    pub title: f64,
    pub excerpt: f64,
    pub content: f64,
    pub tags: f64,
    pub category: f64,
}

impl Default for FieldBoosts {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE_BOOST,
            excerpt: DEFAULT_EXCERPT_BOOST,
            content: DEFAULT_CONTENT_BOOST,
            tags: DEFAULT_TAGS_BOOST,
            category: DEFAULT_CATEGORY_BOOST,
        }
    }
}

impl FieldBoosts {
    #[inline]
    pub fn get(&self, field: Field) -> f64 {
        match field {
            Field::Title => self.title,
            Field::Excerpt => self.excerpt,
            Field::Content => self.content,
            Field::Tags => self.tags,
            Field::Category => self.category,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for field in Field::ALL {
            let value = self.get(field);
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::InvalidBoost { field, value });
            }
        }
        Ok(())
    }
}

/// Search options, passed from the CLI config file or from JavaScript.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchConfig {
    /// Maximum number of results to return (default: 8)
    pub limit: usize,
    /// Snippet length in characters before the ellipsis (default: 200)
    pub snippet_len: usize,
    /// Field boost table
    pub boost: FieldBoosts,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            snippet_len: DEFAULT_SNIPPET_LEN,
            boost: FieldBoosts::default(),
        }
    }
}

impl SearchConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.limit == 0 {
            return Err(ConfigError::ZeroLimit);
        }
        if self.snippet_len == 0 {
            return Err(ConfigError::ZeroSnippetLen);
        }
        self.boost.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_boost_table() {
        let boosts = FieldBoosts::default();
        assert_eq!(boosts.get(Field::Title), 10.0);
        assert_eq!(boosts.get(Field::Excerpt), 7.0);
        assert_eq!(boosts.get(Field::Content), 5.0);
        assert_eq!(boosts.get(Field::Tags), 3.0);
        assert_eq!(boosts.get(Field::Category), 3.0);
        assert!(boosts.validate().is_ok());
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let json = r#"{"limit": 3, "boost": {"title": 20}}"#;
        let config: SearchConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.limit, 3);
        assert_eq!(config.snippet_len, DEFAULT_SNIPPET_LEN);
        assert_eq!(config.boost.title, 20.0);
        assert_eq!(config.boost.content, DEFAULT_CONTENT_BOOST);
    }

    #[test]
    fn test_rejects_non_positive_boost() {
        let mut config = SearchConfig::default();
        config.boost.tags = 0.0;
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidBoost {
                field: Field::Tags,
                value: 0.0
            })
        );

        config.boost.tags = f64::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_zero_limit() {
        let config = SearchConfig {
            limit: 0,
            ..SearchConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroLimit));
    }
}
