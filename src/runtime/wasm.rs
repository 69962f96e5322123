// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! WebAssembly bindings for sitesift.
//!
//! This is the browser-facing API. Fetch the corpus however you like, hand the
//! JSON text to `loadCorpus`, and call `search` or `renderHtml` per keystroke.
//! If the fetch fails, tell the searcher with `markLoadFailed` so it reports
//! "not ready" instead of waiting forever.
//!
//! ```js
//! const searcher = new SiftSearcher({ limit: 8 });
//! fetch('/search.json')
//!     .then(r => r.text())
//!     .then(json => searcher.loadCorpus(json))
//!     .catch(e => searcher.markLoadFailed(String(e)));
//!
//! const controller = new SiftController(searcher, {
//!     show: () => container.classList.add('active'),
//!     hide: () => container.classList.remove('active'),
//!     focus: () => input.focus(),
//! });
//! input.addEventListener('input', () => {
//!     const html = controller.onInput(input.value);
//!     if (html !== undefined) results.innerHTML = html;
//! });
//! ```

use js_sys::{Function, Reflect};
use serde_wasm_bindgen::{from_value, to_value};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::config::SearchConfig;
use crate::engine::{SearchEngine, SearchOutcome};
use crate::types::{DocId, Document};
use crate::ui::{KeyAction, KeyInput, SearchController, SearchPanel};

fn to_js_error(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// WASM searcher - thin wrapper around SearchEngine.
#[wasm_bindgen]
pub struct SiftSearcher {
    engine: SearchEngine,
}

#[wasm_bindgen]
impl SiftSearcher {
    /// Create a searcher. `config` is optional: `{ limit, snippetLen, boost }`.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<SiftSearcher, JsValue> {
        let config: SearchConfig = if config.is_undefined() || config.is_null() {
            SearchConfig::default()
        } else {
            from_value(config).map_err(|e| JsValue::from_str(&format!("Invalid config: {}", e)))?
        };
        let engine = SearchEngine::new(config).map_err(to_js_error)?;
        Ok(SiftSearcher { engine })
    }

    /// Index a corpus given as JSON text. Returns the document count.
    #[wasm_bindgen(js_name = "loadCorpus")]
    pub fn load_corpus(&mut self, json: &str) -> Result<usize, JsValue> {
        self.engine.load_corpus_json(json).map_err(to_js_error)?;
        Ok(self.doc_count())
    }

    /// Index a corpus given as an array of document objects.
    #[wasm_bindgen(js_name = "buildIndex")]
    pub fn build_index(&mut self, docs: JsValue) -> Result<usize, JsValue> {
        let docs: Vec<Document> = match from_value(docs) {
            Ok(docs) => docs,
            Err(e) => {
                self.engine.record_load_failure(&e);
                return Err(to_js_error(e));
            }
        };
        self.engine.build_index(docs).map_err(to_js_error)?;
        Ok(self.doc_count())
    }

    /// The host could not fetch the corpus. Searches will report not ready.
    #[wasm_bindgen(js_name = "markLoadFailed")]
    pub fn mark_load_failed(&mut self, reason: &str) {
        self.engine.record_load_failure(reason);
    }

    #[wasm_bindgen(js_name = "isReady")]
    pub fn is_ready(&self) -> bool {
        self.engine.is_ready()
    }

    /// Number of documents (0 until ready).
    #[wasm_bindgen(js_name = "docCount")]
    pub fn doc_count(&self) -> usize {
        self.engine.store().map_or(0, |store| store.len())
    }

    /// Search, returning `{ status, results?, message? }`.
    ///
    /// `status` is one of `"tooShort"`, `"notReady"`, `"error"`, `"results"`.
    #[wasm_bindgen]
    pub fn search(&self, query: &str) -> Result<JsValue, JsValue> {
        to_value(&self.engine.search(query)).map_err(to_js_error)
    }

    /// Search and return display data for each result (empty unless results).
    #[wasm_bindgen(js_name = "resultViews")]
    pub fn result_views(&self, query: &str) -> Result<JsValue, JsValue> {
        let views = match self.engine.search(query) {
            SearchOutcome::Results { results } => self
                .engine
                .result_views(&results, query)
                .map_err(to_js_error)?,
            _ => Vec::new(),
        };
        to_value(&views).map_err(to_js_error)
    }

    /// Search and render the result panel's HTML.
    #[wasm_bindgen(js_name = "renderHtml")]
    pub fn render_html(&self, query: &str) -> String {
        self.engine.render_html(query)
    }

    /// Highlighted title of a document, or undefined for an unknown id.
    #[wasm_bindgen(js_name = "renderTitle")]
    pub fn render_title(&self, doc_id: u32, query: &str) -> Option<String> {
        let doc = self.engine.document(DocId(doc_id))?;
        Some(self.engine.render_title(doc, query))
    }

    /// Highlighted snippet of a document, or undefined for an unknown id.
    #[wasm_bindgen(js_name = "renderSnippet")]
    pub fn render_snippet(&self, doc_id: u32, query: &str) -> Option<String> {
        let doc = self.engine.document(DocId(doc_id))?;
        Some(self.engine.render_snippet(doc, query))
    }
}

/// A JS object with `show`, `hide` and `focus` functions.
struct JsPanel {
    target: JsValue,
    show: Function,
    hide: Function,
    focus: Function,
}

impl JsPanel {
    fn from_object(panel: JsValue) -> Result<Self, JsValue> {
        let method = |name: &str| -> Result<Function, JsValue> {
            Reflect::get(&panel, &JsValue::from_str(name))?
                .dyn_into::<Function>()
                .map_err(|_| JsValue::from_str(&format!("panel.{} must be a function", name)))
        };
        let show = method("show")?;
        let hide = method("hide")?;
        let focus = method("focus")?;
        Ok(Self {
            target: panel,
            show,
            hide,
            focus,
        })
    }

    fn call(&self, name: &str, function: &Function) {
        if let Err(err) = function.call0(&self.target) {
            log::warn!("panel.{} threw: {:?}", name, err);
        }
    }
}

impl SearchPanel for JsPanel {
    fn show(&self) {
        self.call("show", &self.show);
    }

    fn hide(&self) {
        self.call("hide", &self.hide);
    }

    fn focus(&self) {
        self.call("focus", &self.focus);
    }
}

/// WASM controller - routes page events to a searcher and a JS panel.
#[wasm_bindgen]
pub struct SiftController {
    inner: SearchController<JsPanel>,
}

#[wasm_bindgen]
impl SiftController {
    /// Takes ownership of the searcher.
    #[wasm_bindgen(constructor)]
    pub fn new(searcher: SiftSearcher, panel: JsValue) -> Result<SiftController, JsValue> {
        let panel = JsPanel::from_object(panel)?;
        Ok(SiftController {
            inner: SearchController::new(searcher.engine, panel),
        })
    }

    #[wasm_bindgen(js_name = "loadCorpus")]
    pub fn load_corpus(&mut self, json: &str) -> Result<(), JsValue> {
        self.inner
            .engine_mut()
            .load_corpus_json(json)
            .map_err(to_js_error)
    }

    #[wasm_bindgen(js_name = "markLoadFailed")]
    pub fn mark_load_failed(&mut self, reason: &str) {
        self.inner.engine_mut().record_load_failure(reason);
    }

    /// Returns the HTML for the results panel, or undefined if it was hidden.
    #[wasm_bindgen(js_name = "onInput")]
    pub fn on_input(&self, text: &str) -> Option<String> {
        self.inner.on_input(text)
    }

    #[wasm_bindgen(js_name = "onFocus")]
    pub fn on_focus(&self) {
        self.inner.on_focus();
    }

    #[wasm_bindgen(js_name = "onOutsideClick")]
    pub fn on_outside_click(&self) {
        self.inner.on_outside_click();
    }

    /// Returns `"ignore"`, `"preventDefault"` or `"blur"`.
    #[wasm_bindgen(js_name = "onKey")]
    pub fn on_key(&self, key: &str, ctrl: bool, meta: bool) -> String {
        let action = self.inner.on_key(KeyInput { key, ctrl, meta });
        match action {
            KeyAction::Ignore => "ignore",
            KeyAction::PreventDefault => "preventDefault",
            KeyAction::Blur => "blur",
        }
        .to_string()
    }
}
