//! Shared test utilities and fixtures.

#![allow(dead_code)]

use sitesift::{Document, SearchEngine, SearchOutcome, SearchResult};
use std::sync::LazyLock;

// Re-export canonical test utilities from sitesift::testing
pub use sitesift::testing::{corpus_json, make_doc, make_doc_with};

/// Sample site corpus checked into the repo.
pub const FIXTURE_CORPUS: &str = "data/fixtures/search.json";

/// Fixture corpus text, read once.
pub static FIXTURE_JSON: LazyLock<String> = LazyLock::new(|| {
    std::fs::read_to_string(FIXTURE_CORPUS).expect("Failed to read fixture corpus")
});

// ============================================================================
// ENGINE BUILDERS
// ============================================================================

/// Engine with the fixture corpus loaded.
pub fn fixture_engine() -> SearchEngine {
    let mut engine = SearchEngine::default();
    engine
        .load_corpus_json(&FIXTURE_JSON)
        .expect("Fixture corpus must load");
    engine
}

/// Engine over the given documents.
pub fn engine_with(docs: Vec<Document>) -> SearchEngine {
    let mut engine = SearchEngine::default();
    engine.build_index(docs).expect("build_index failed");
    engine
}

/// Engine over title-only/content-only pairs, ids by position.
pub fn engine_of(docs: &[(&str, &str)]) -> SearchEngine {
    engine_with(
        docs.iter()
            .enumerate()
            .map(|(i, (title, content))| make_doc(i as u32, title, content))
            .collect(),
    )
}

// ============================================================================
// OUTCOME HELPERS
// ============================================================================

/// Results of a search, panicking on any other outcome.
pub fn results(engine: &SearchEngine, query: &str) -> Vec<SearchResult> {
    match engine.search(query) {
        SearchOutcome::Results { results } => results,
        other => panic!("query {:?}: expected results, got {:?}", query, other),
    }
}

/// Result doc ids in rank order.
pub fn result_ids(engine: &SearchEngine, query: &str) -> Vec<u32> {
    results(engine, query).iter().map(|r| r.doc_id.get()).collect()
}

/// Assert the invariants every result list must satisfy.
pub fn assert_well_ordered(results: &[SearchResult], limit: usize) {
    assert!(
        results.len() <= limit,
        "got {} results, limit {}",
        results.len(),
        limit
    );
    for pair in results.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        assert!(a.score > 0.0 && b.score > 0.0, "zero score in results");
        assert!(
            a.score > b.score || (a.score == b.score && a.doc_id < b.doc_id),
            "out of order: {:?} before {:?}",
            a,
            b
        );
    }
}
