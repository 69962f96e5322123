//! Ranking tests: field boosts, prefix expansion, score accumulation.
//!
//! Fixture scores below are worked out by hand from `data/fixtures/search.json`
//! with the default boosts (title 10, excerpt 7, content 5, tags 3, category 3).

use super::common::{
    assert_well_ordered, engine_of, engine_with, fixture_engine, make_doc, make_doc_with,
    result_ids, results,
};
use sitesift::{FieldBoosts, SearchConfig, SearchEngine};

// ============================================================================
// FIXTURE CORPUS
// ============================================================================

#[test]
fn test_fixture_rust_ranking() {
    let engine = fixture_engine();
    let results = results(&engine, "rust");
    let ranked: Vec<(u32, f64)> = results.iter().map(|r| (r.doc_id.get(), r.score)).collect();
    // doc 0: title + content + excerpt + tag; doc 1: excerpt + tag; doc 2: content
    assert_eq!(ranked, vec![(0, 25.0), (1, 10.0), (2, 5.0)]);
}

#[test]
fn test_fixture_tie_broken_by_doc_id() {
    let engine = fixture_engine();
    let results = results(&engine, "rust wasm");
    assert_eq!(results[0].score, results[1].score);
    assert_eq!(results[0].doc_id.get(), 0);
    assert_eq!(results[1].doc_id.get(), 1);
}

#[test]
fn test_fixture_category_and_title_fields() {
    let engine = fixture_engine();
    // doc 3 has it in the title, doc 0 in content + category, doc 4 in category only
    assert_eq!(result_ids(&engine, "guide"), vec![3, 0, 4]);
    assert_eq!(results(&engine, "kitchen")[0].score, 3.0);
}

#[test]
fn test_fixture_prefix_expansion() {
    let engine = fixture_engine();
    let results = results(&engine, "comp");
    // compiled + compile in content, Compiling in the excerpt
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].doc_id.get(), 1);
    assert_eq!(results[0].score, 17.0);
}

#[test]
fn test_fixture_no_match_is_empty() {
    let engine = fixture_engine();
    assert!(results(&engine, "zzzz").is_empty());
}

// ============================================================================
// FIELD BOOSTS
// ============================================================================

#[test]
fn test_title_match_outranks_content_match() {
    let engine = engine_of(&[
        ("Baking Bread", "a note on photography lighting"),
        ("Photography Basics", "bread is out of scope"),
    ]);
    assert_eq!(result_ids(&engine, "photography"), vec![1, 0]);
}

#[test]
fn test_excerpt_between_title_and_content() {
    let engine = engine_with(vec![
        make_doc(0, "Untitled", "lens"),
        make_doc_with(1, "Untitled", "", |d| d.excerpt = Some("lens".into())),
        make_doc(2, "Lens", ""),
    ]);
    assert_eq!(result_ids(&engine, "lens"), vec![2, 1, 0]);
}

#[test]
fn test_every_tag_is_indexed() {
    let engine = engine_with(vec![make_doc_with(0, "Post", "", |d| {
        d.tags = vec!["alpha".into(), "beta".into(), "gamma".into(), "delta".into()];
    })]);
    // Tags beyond the three shown in results are still searchable
    assert_eq!(result_ids(&engine, "delta"), vec![0]);
}

#[test]
fn test_custom_boosts_from_config() {
    let config = SearchConfig {
        boost: FieldBoosts {
            title: 1.0,
            content: 50.0,
            ..FieldBoosts::default()
        },
        ..SearchConfig::default()
    };
    let mut engine = SearchEngine::new(config).unwrap();
    engine
        .build_index(vec![
            make_doc(0, "Widgets", "gadgets"),
            make_doc(1, "Gadgets", "widgets"),
        ])
        .unwrap();
    assert_eq!(result_ids(&engine, "widgets"), vec![1, 0]);
}

// ============================================================================
// ACCUMULATION
// ============================================================================

#[test]
fn test_term_frequency_counts() {
    let engine = engine_of(&[("A", "tea"), ("B", "tea tea tea")]);
    let results = results(&engine, "tea");
    assert_eq!(results[0].doc_id.get(), 1);
    assert_eq!(results[0].score, 15.0);
    assert_eq!(results[1].score, 5.0);
}

#[test]
fn test_more_query_terms_matched_ranks_higher() {
    let engine = engine_of(&[
        ("Notes", "rust"),
        ("Notes", "rust and wasm"),
        ("Notes", "wasm"),
    ]);
    assert_eq!(result_ids(&engine, "rust wasm"), vec![1, 0, 2]);
}

#[test]
fn test_limit_caps_results() {
    let docs: Vec<(&str, &str)> = (0..30).map(|_| ("Page", "shared words here")).collect();
    let engine = engine_of(&docs);
    let results = results(&engine, "shared");
    assert_eq!(results.len(), 8);
    assert_well_ordered(&results, 8);
}

#[test]
fn test_configured_limit() {
    let config = SearchConfig {
        limit: 3,
        ..SearchConfig::default()
    };
    let mut engine = SearchEngine::new(config).unwrap();
    engine
        .build_index((0..10).map(|i| make_doc(i, "Page", "shared")).collect())
        .unwrap();
    assert_eq!(result_ids(&engine, "shared"), vec![0, 1, 2]);
}
