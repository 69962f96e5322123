// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The search engine: store + index + the operations a page calls.
//!
//! An engine starts out pending. Handing it a corpus builds the index once and
//! makes it ready for good. If the corpus fails to load the engine stays not
//! ready for the rest of its life, and the failure is logged exactly once.
//!
//! ```text
//!   Pending ──build_index──▶ Ready     (search works)
//!      │
//!      └──load failure──▶ Failed       (search says NotReady)
//! ```
//!
//! Every `search` call has a defined outcome, so the UI always has something
//! to render: too short, not ready, error, or a (possibly empty) result list.

use std::fmt;
use std::path::Path;

use html_escape::encode_text;
use serde::Serialize;

use crate::config::SearchConfig;
use crate::error::{ConfigError, CorpusError, EngineError, SearchError};
use crate::index::InvertedIndex;
use crate::render::highlight::highlight;
use crate::render::html::{
    format_date, render_error, render_no_results, render_not_ready, render_results, ResultView,
    DEFAULT_CATEGORY, MAX_TAGS_SHOWN,
};
use crate::render::snippet::extract_snippet;
use crate::search::query::{parse_query, ParsedQuery};
use crate::search::ranker::rank_top;
use crate::store::DocumentStore;
use crate::types::{DocId, Document, SearchResult};

/// What a single search produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum SearchOutcome {
    /// Input under two characters. Hide the results panel.
    TooShort,
    /// The corpus has not arrived (or never will).
    NotReady,
    /// Ranking or rendering failed. The message is for logs, not for users.
    Error { message: String },
    /// Best first, at most `limit` entries. May be empty.
    Results { results: Vec<SearchResult> },
}

struct ReadyIndex {
    store: DocumentStore,
    index: InvertedIndex,
}

enum IndexState {
    Pending,
    Ready(ReadyIndex),
    Failed(String),
}

/// The search engine a page owns.
pub struct SearchEngine {
    config: SearchConfig,
    state: IndexState,
}

impl Default for SearchEngine {
    fn default() -> Self {
        Self {
            config: SearchConfig::default(),
            state: IndexState::Pending,
        }
    }
}

impl fmt::Debug for SearchEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = match &self.state {
            IndexState::Pending => "pending".to_string(),
            IndexState::Ready(ready) => format!("ready ({} docs)", ready.store.len()),
            IndexState::Failed(reason) => format!("failed ({})", reason),
        };
        f.debug_struct("SearchEngine")
            .field("config", &self.config)
            .field("state", &state)
            .finish()
    }
}

impl SearchEngine {
    pub fn new(config: SearchConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            state: IndexState::Pending,
        })
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    // =========================================================================
    // LIFECYCLE
    // =========================================================================

    /// Index a corpus. Works once per engine.
    pub fn build_index(&mut self, documents: Vec<Document>) -> Result<(), EngineError> {
        self.ensure_pending()?;
        match DocumentStore::from_documents(documents) {
            Ok(store) => {
                self.install(store);
                Ok(())
            }
            Err(err) => Err(self.fail(err)),
        }
    }

    /// Parse a JSON corpus and index it.
    ///
    /// A parse failure leaves the engine permanently not ready.
    pub fn load_corpus_json(&mut self, json: &str) -> Result<(), EngineError> {
        self.ensure_pending()?;
        match DocumentStore::from_json(json) {
            Ok(store) => {
                self.install(store);
                Ok(())
            }
            Err(err) => Err(self.fail(err)),
        }
    }

    /// Read a JSON corpus from disk and index it.
    pub fn load_corpus_path(&mut self, path: &Path) -> Result<(), EngineError> {
        self.ensure_pending()?;
        match DocumentStore::from_path(path) {
            Ok(store) => {
                self.install(store);
                Ok(())
            }
            Err(err) => Err(self.fail(err)),
        }
    }

    /// Record that the corpus could not be fetched by the host (network
    /// failure and the like). Ignored unless the engine is still pending.
    pub fn record_load_failure(&mut self, reason: impl fmt::Display) {
        if matches!(self.state, IndexState::Pending) {
            let reason = reason.to_string();
            log::error!("Error loading search data: {}", reason);
            self.state = IndexState::Failed(reason);
        }
    }

    fn ensure_pending(&self) -> Result<(), EngineError> {
        match &self.state {
            IndexState::Pending => Ok(()),
            IndexState::Ready(_) => Err(EngineError::AlreadyBuilt),
            IndexState::Failed(reason) => Err(EngineError::LoadFailed(reason.clone())),
        }
    }

    fn fail(&mut self, err: CorpusError) -> EngineError {
        self.record_load_failure(&err);
        EngineError::Corpus(err)
    }

    fn install(&mut self, store: DocumentStore) {
        #[cfg(feature = "parallel")]
        let index = InvertedIndex::build_parallel(&store);
        #[cfg(not(feature = "parallel"))]
        let index = InvertedIndex::build(&store);

        log::info!(
            "search index ready: {} documents, {} terms",
            store.len(),
            index.term_count()
        );
        self.state = IndexState::Ready(ReadyIndex { store, index });
    }

    pub fn is_ready(&self) -> bool {
        matches!(self.state, IndexState::Ready(_))
    }

    /// Why the corpus failed to load, if it did.
    pub fn load_failure(&self) -> Option<&str> {
        match &self.state {
            IndexState::Failed(reason) => Some(reason),
            _ => None,
        }
    }

    fn ready(&self) -> Option<&ReadyIndex> {
        match &self.state {
            IndexState::Ready(ready) => Some(ready),
            _ => None,
        }
    }

    pub fn store(&self) -> Option<&DocumentStore> {
        self.ready().map(|r| &r.store)
    }

    pub fn index(&self) -> Option<&InvertedIndex> {
        self.ready().map(|r| &r.index)
    }

    pub fn document(&self, id: DocId) -> Option<&Document> {
        self.store().and_then(|store| store.get(id))
    }

    // =========================================================================
    // SEARCH
    // =========================================================================

    /// Run one search.
    ///
    /// The length check comes first: a one-character query is `TooShort` even
    /// while the index is still loading.
    pub fn search(&self, query: &str) -> SearchOutcome {
        let terms = match parse_query(query) {
            ParsedQuery::TooShort => return SearchOutcome::TooShort,
            ParsedQuery::Terms(terms) => terms,
        };
        let Some(ready) = self.ready() else {
            return SearchOutcome::NotReady;
        };

        let results = rank_top(&ready.index, &terms, &self.config.boost, self.config.limit);
        match Self::check_refs(&ready.store, &results) {
            Ok(()) => SearchOutcome::Results { results },
            Err(err) => {
                log::error!("Search error: {}", err);
                SearchOutcome::Error {
                    message: err.to_string(),
                }
            }
        }
    }

    /// Every ranked id must resolve in the store. `install` builds the index
    /// from the same store it keeps, so this holds for any engine built
    /// through the public API; a failure here means index and store diverged.
    fn check_refs(store: &DocumentStore, results: &[SearchResult]) -> Result<(), SearchError> {
        match results.iter().find(|r| store.get(r.doc_id).is_none()) {
            Some(missing) => Err(SearchError::UnknownDocument(missing.doc_id)),
            None => Ok(()),
        }
    }

    // =========================================================================
    // RENDERING
    // =========================================================================

    /// Best-matching excerpt of the document's content, escaped and highlighted.
    pub fn render_snippet(&self, doc: &Document, query: &str) -> String {
        let snippet = extract_snippet(&doc.content, query, self.config.snippet_len);
        highlight(&encode_text(&snippet), query)
    }

    /// The document's title, escaped and highlighted.
    pub fn render_title(&self, doc: &Document, query: &str) -> String {
        highlight(&encode_text(&doc.title), query)
    }

    /// Display data for each result, in result order.
    pub fn result_views(
        &self,
        results: &[SearchResult],
        query: &str,
    ) -> Result<Vec<ResultView>, SearchError> {
        results
            .iter()
            .map(|result| {
                let doc = self
                    .document(result.doc_id)
                    .ok_or(SearchError::UnknownDocument(result.doc_id))?;
                Ok(ResultView {
                    url: doc.url.clone(),
                    title_html: self.render_title(doc, query),
                    category: doc
                        .category
                        .clone()
                        .unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
                    date: doc.date.as_deref().and_then(format_date).unwrap_or_default(),
                    tags: doc.tags.iter().take(MAX_TAGS_SHOWN).cloned().collect(),
                    snippet_html: self.render_snippet(doc, query),
                })
            })
            .collect()
    }

    /// Search and render the result panel's markup in one go.
    ///
    /// Returns an empty string for a too-short query (the panel is hidden).
    pub fn render_html(&self, query: &str) -> String {
        match self.search(query) {
            SearchOutcome::TooShort => String::new(),
            SearchOutcome::NotReady => render_not_ready(),
            SearchOutcome::Error { .. } => render_error(),
            SearchOutcome::Results { results } if results.is_empty() => render_no_results(query),
            SearchOutcome::Results { results } => match self.result_views(&results, query) {
                Ok(views) => render_results(&views),
                Err(err) => {
                    log::error!("Search error: {}", err);
                    render_error()
                }
            },
        }
    }
}
