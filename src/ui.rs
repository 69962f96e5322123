// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The thin layer between page events and the engine.
//!
//! The host page implements [`SearchPanel`] for whatever shows the results
//! (usually a dropdown container plus the search input) and feeds events to a
//! [`SearchController`]. The controller decides when the panel opens, closes
//! or takes focus, and produces the markup to put in it. Nothing here touches
//! a DOM directly.

use crate::engine::SearchEngine;
use crate::search::query::{parse_query, ParsedQuery};

/// What the host can do with its search UI.
pub trait SearchPanel {
    fn show(&self);
    fn hide(&self);
    /// Move keyboard focus to the search input.
    fn focus(&self);
}

impl<P: SearchPanel + ?Sized> SearchPanel for &P {
    fn show(&self) {
        (**self).show();
    }

    fn hide(&self) {
        (**self).hide();
    }

    fn focus(&self) {
        (**self).focus();
    }
}

/// A key press, as much of it as the controller cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyInput<'a> {
    /// The `KeyboardEvent.key` value, e.g. `"k"` or `"Escape"`
    pub key: &'a str,
    pub ctrl: bool,
    pub meta: bool,
}

impl<'a> KeyInput<'a> {
    pub fn plain(key: &'a str) -> Self {
        Self {
            key,
            ctrl: false,
            meta: false,
        }
    }
}

/// What the host should do with the key event afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Not ours; let it through.
    Ignore,
    /// Handled; suppress the browser default (Ctrl+K would focus the URL bar).
    PreventDefault,
    /// Handled; take focus away from the search input.
    Blur,
}

/// Drives a [`SearchPanel`] from input, focus and keyboard events.
pub struct SearchController<P> {
    engine: SearchEngine,
    panel: P,
}

impl<P: SearchPanel> SearchController<P> {
    pub fn new(engine: SearchEngine, panel: P) -> Self {
        Self { engine, panel }
    }

    pub fn engine(&self) -> &SearchEngine {
        &self.engine
    }

    /// For delivering the corpus after the controller is wired up.
    pub fn engine_mut(&mut self) -> &mut SearchEngine {
        &mut self.engine
    }

    pub fn panel(&self) -> &P {
        &self.panel
    }

    /// The input text changed.
    ///
    /// Too-short input closes the panel and returns `None`. Anything else opens
    /// the panel and returns the markup to show in it. Every call is a full
    /// search; there is no debouncing here.
    pub fn on_input(&self, text: &str) -> Option<String> {
        if parse_query(text) == ParsedQuery::TooShort {
            self.panel.hide();
            return None;
        }
        self.panel.show();
        Some(self.engine.render_html(text))
    }

    pub fn on_focus(&self) {
        self.panel.show();
    }

    /// A click landed outside the search container.
    pub fn on_outside_click(&self) {
        self.panel.hide();
    }

    /// Global shortcuts: Ctrl/Cmd+K opens search, Escape closes it.
    pub fn on_key(&self, input: KeyInput<'_>) -> KeyAction {
        if (input.ctrl || input.meta) && input.key.eq_ignore_ascii_case("k") {
            self.panel.focus();
            self.panel.show();
            return KeyAction::PreventDefault;
        }
        if input.key == "Escape" {
            self.panel.hide();
            return KeyAction::Blur;
        }
        KeyAction::Ignore
    }
}
