//! Guard tests: too-short queries, not-ready states, odd input.

use super::common::{engine_of, fixture_engine, result_ids, results};
use sitesift::{EngineError, SearchEngine, SearchOutcome};

#[test]
fn test_short_queries_never_search() {
    let engine = fixture_engine();
    for query in ["", " ", "r", "  r  ", "\t\n", "é"] {
        assert_eq!(engine.search(query), SearchOutcome::TooShort, "{:?}", query);
    }
}

#[test]
fn test_two_chars_search() {
    let engine = fixture_engine();
    assert!(matches!(engine.search("ru"), SearchOutcome::Results { .. }));
}

#[test]
fn test_too_short_wins_over_not_ready() {
    let engine = SearchEngine::default();
    assert_eq!(engine.search("x"), SearchOutcome::TooShort);
    assert_eq!(engine.search("xy"), SearchOutcome::NotReady);
}

#[test]
fn test_failed_corpus_is_permanently_not_ready() {
    let mut engine = SearchEngine::default();
    let err = engine.load_corpus_json("{ truncated").unwrap_err();
    assert!(matches!(err, EngineError::Corpus(_)));
    assert_eq!(engine.search("anything"), SearchOutcome::NotReady);
    assert!(engine.render_html("anything").contains("not ready"));
}

#[test]
fn test_host_reported_failure() {
    let mut engine = SearchEngine::default();
    engine.record_load_failure("HTTP 404");
    assert_eq!(engine.load_failure(), Some("HTTP 404"));
    assert!(matches!(
        engine.load_corpus_json("[]"),
        Err(EngineError::LoadFailed(_))
    ));
}

#[test]
fn test_empty_corpus_gives_empty_results() {
    let mut engine = SearchEngine::default();
    engine.load_corpus_json("[]").unwrap();
    assert!(engine.is_ready());
    assert!(results(&engine, "anything").is_empty());
    assert!(engine.render_html("anything").contains("No results found"));
}

#[test]
fn test_punctuation_only_query() {
    let engine = fixture_engine();
    assert!(results(&engine, "?!").is_empty());
}

#[test]
fn test_query_case_and_padding_ignored() {
    let engine = fixture_engine();
    assert_eq!(result_ids(&engine, "  RUST  "), result_ids(&engine, "rust"));
}

#[test]
fn test_regex_metacharacters_are_plain_text() {
    let engine = engine_of(&[("Page", "plain words")]);
    for query in ["(unclosed", "a.*b", "[x", "\\d+", "$^"] {
        assert!(
            matches!(engine.search(query), SearchOutcome::Results { .. }),
            "{:?}",
            query
        );
        // Rendering must not choke either
        let _ = engine.render_html(query);
    }
}

#[test]
fn test_trailing_punctuation_trimmed() {
    let engine = fixture_engine();
    assert_eq!(result_ids(&engine, "rust,"), result_ids(&engine, "rust"));
}

#[test]
fn test_non_ascii_terms() {
    let engine = engine_of(&[("Café Culture", "Über alles")]);
    assert_eq!(result_ids(&engine, "CAFÉ"), vec![0]);
    assert_eq!(result_ids(&engine, "üb"), vec![0]);
}

#[test]
fn test_title_word_typed_verbatim_is_found() {
    let engine = engine_of(&[
        ("Using rust-lang tooling", "Setup notes."),
        ("Don't panic", "A calm guide."),
        ("Unrelated", "Nothing to see."),
    ]);
    assert_eq!(result_ids(&engine, "rust-lang"), vec![0]);
    assert_eq!(result_ids(&engine, "rust-lang tooling"), vec![0]);
    assert_eq!(result_ids(&engine, "don't")[0], 1);
}
