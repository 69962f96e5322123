//! Controller tests: panel visibility and keyboard shortcuts over the fixture corpus.

use super::common::FIXTURE_JSON;
use sitesift::{KeyAction, KeyInput, SearchController, SearchEngine, SearchPanel};
use std::cell::RefCell;

#[derive(Default)]
struct Panel {
    visible: RefCell<bool>,
    focused: RefCell<bool>,
}

impl SearchPanel for Panel {
    fn show(&self) {
        *self.visible.borrow_mut() = true;
    }
    fn hide(&self) {
        *self.visible.borrow_mut() = false;
        *self.focused.borrow_mut() = false;
    }
    fn focus(&self) {
        *self.focused.borrow_mut() = true;
    }
}

fn visible(ctl: &SearchController<Panel>) -> bool {
    *ctl.panel().visible.borrow()
}

#[test]
fn test_typing_session() {
    let mut ctl = SearchController::new(SearchEngine::default(), Panel::default());

    // Corpus still in flight
    let html = ctl.on_input("ru").unwrap();
    assert!(html.contains("not ready"));
    assert!(visible(&ctl));

    ctl.engine_mut().load_corpus_json(&FIXTURE_JSON).unwrap();

    assert_eq!(ctl.on_input("r"), None);
    assert!(!visible(&ctl));

    let html = ctl.on_input("rust").unwrap();
    assert!(visible(&ctl));
    assert!(html.contains("/posts/getting-started-with-rust/"));
    assert!(html.contains("<mark>Rust</mark>"));

    let html = ctl.on_input("qwertyuiop").unwrap();
    assert!(html.contains("No results found"));
    assert!(html.contains("qwertyuiop"));
}

#[test]
fn test_shortcuts() {
    let ctl = SearchController::new(SearchEngine::default(), Panel::default());

    let open = KeyInput {
        key: "K",
        ctrl: true,
        meta: false,
    };
    assert_eq!(ctl.on_key(open), KeyAction::PreventDefault);
    assert!(visible(&ctl));
    assert!(*ctl.panel().focused.borrow());

    assert_eq!(ctl.on_key(KeyInput::plain("Escape")), KeyAction::Blur);
    assert!(!visible(&ctl));
    assert!(!*ctl.panel().focused.borrow());

    assert_eq!(ctl.on_key(KeyInput::plain("a")), KeyAction::Ignore);
}

#[test]
fn test_focus_reopens_and_outside_click_closes() {
    let ctl = SearchController::new(SearchEngine::default(), Panel::default());
    ctl.on_focus();
    assert!(visible(&ctl));
    ctl.on_outside_click();
    assert!(!visible(&ctl));
}
