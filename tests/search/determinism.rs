//! Same corpus + same query = same results, however the index was built.

use super::common::{corpus_json, fixture_engine, make_doc, results};
use sitesift::SearchEngine;

const QUERIES: &[&str] = &["rust", "se", "guide", "rust wasm", "html escaping", "co"];

#[test]
fn test_repeated_search_identical() {
    let engine = fixture_engine();
    for query in QUERIES {
        assert_eq!(results(&engine, query), results(&engine, query));
    }
}

#[test]
fn test_independent_engines_agree() {
    let a = fixture_engine();
    let b = fixture_engine();
    for query in QUERIES {
        assert_eq!(results(&a, query), results(&b, query), "{}", query);
        assert_eq!(a.render_html(query), b.render_html(query));
    }
}

#[test]
fn test_json_and_documents_agree() {
    let docs: Vec<_> = (0..12)
        .map(|i| make_doc(i, &format!("Page {}", i), "shared body text"))
        .collect();
    let mut from_docs = SearchEngine::default();
    from_docs.build_index(docs.clone()).unwrap();
    let mut from_json = SearchEngine::default();
    from_json.load_corpus_json(&corpus_json(&docs)).unwrap();

    assert_eq!(results(&from_docs, "shared"), results(&from_json, "shared"));
}

#[cfg(feature = "parallel")]
#[test]
fn test_parallel_build_matches_sequential() {
    use super::common::FIXTURE_JSON;
    use sitesift::{DocumentStore, InvertedIndex};

    let store = DocumentStore::from_json(&FIXTURE_JSON).unwrap();
    let sequential = InvertedIndex::build(&store);
    let parallel = InvertedIndex::build_parallel(&store);
    assert_eq!(sequential, parallel);
}

#[test]
fn test_equal_scores_order_by_id() {
    let docs: Vec<_> = (0..5).map(|i| make_doc(i, "Same", "same")).collect();
    let mut engine = SearchEngine::default();
    engine.build_index(docs).unwrap();
    let ids: Vec<u32> = results(&engine, "same")
        .iter()
        .map(|r| r.doc_id.get())
        .collect();
    assert_eq!(ids, vec![0, 1, 2, 3, 4]);
}
