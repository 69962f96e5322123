// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the sitesift CLI.
//!
//! OneDark for dark terminals, One Light for light ones. Highlighted result
//! markup (`<mark>`) is turned into colored text and HTML entities are decoded,
//! so terminal output reads like the page would. Respects `NO_COLOR` and falls
//! back to plain text when stdout is not a TTY.
//!
//! # Theme detection order
//!
//! 1. `SITESIFT_THEME` env var ("dark" or "light")
//! 2. `COLORFGBG` env var (terminal background hint)
//! 3. Default to dark theme

use std::sync::OnceLock;

use sitesift::render::highlight::{MARK_CLOSE, MARK_OPEN};

/// Inner width of result boxes, between the two `│` borders.
pub const BOX_WIDTH: usize = 72;

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";

/// Terminal background, as far as we can tell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    fn detect() -> Self {
        let forced = std::env::var("SITESIFT_THEME").ok().and_then(|v| {
            match v.to_ascii_lowercase().as_str() {
                "light" | "l" => Some(Theme::Light),
                "dark" | "d" => Some(Theme::Dark),
                _ => None,
            }
        });
        // COLORFGBG is "fg;bg"; backgrounds 7 and 9-15 are light
        let hinted = || {
            let bg: u8 = std::env::var("COLORFGBG").ok()?.rsplit(';').next()?.parse().ok()?;
            (bg == 7 || (9..=15).contains(&bg)).then_some(Theme::Light)
        };
        forced.or_else(hinted).unwrap_or(Theme::Dark)
    }

    /// OneDark / One Light, as (r, g, b) per role.
    fn palette(self) -> &'static Palette {
        match self {
            Theme::Dark => &ONEDARK,
            Theme::Light => &ONELIGHT,
        }
    }
}

type Rgb = (u8, u8, u8);

struct Palette {
    error: Rgb,
    score: Rgb,
    mark: Rgb,
    link: Rgb,
    heading: Rgb,
    muted: Rgb,
}

const ONEDARK: Palette = Palette {
    error: (224, 108, 117),
    score: (152, 195, 121),
    mark: (229, 192, 123),
    link: (97, 175, 239),
    heading: (86, 182, 194),
    muted: (92, 99, 112),
};

const ONELIGHT: Palette = Palette {
    error: (228, 86, 73),
    score: (80, 161, 79),
    mark: (193, 132, 1),
    link: (64, 120, 242),
    heading: (1, 132, 188),
    muted: (160, 161, 167),
};

pub fn theme() -> Theme {
    static THEME: OnceLock<Theme> = OnceLock::new();
    *THEME.get_or_init(Theme::detect)
}

/// A color role, resolved against the detected theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Error,
    Score,
    Mark,
    Link,
    Heading,
    Muted,
}

impl Role {
    pub fn ansi(self) -> String {
        let p = theme().palette();
        let (r, g, b) = match self {
            Role::Error => p.error,
            Role::Score => p.score,
            Role::Mark => p.mark,
            Role::Link => p.link,
            Role::Heading => p.heading,
            Role::Muted => p.muted,
        };
        format!("\x1b[38;2;{};{};{}m", r, g, b)
    }
}

/// Colors only for a TTY, and never with `NO_COLOR` set.
pub fn use_colors() -> bool {
    std::env::var_os("NO_COLOR").is_none() && atty::is(atty::Stream::Stdout)
}

/// `text` in `role` color (plus modifiers), or plain when colors are off.
pub fn paint(role: Role, modifiers: &str, text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", modifiers, role.ansi(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Printed width: ANSI escape sequences take no columns.
pub fn visible_len(s: &str) -> usize {
    let mut width = 0;
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c == '\x1b' {
            chars.by_ref().find(|&c| c == 'm');
        } else {
            width += 1;
        }
    }
    width
}

/// Render highlighted HTML for the terminal: marks become colored spans,
/// entities are decoded.
pub fn marks_to_terminal(html: &str, colors: bool) -> String {
    let (open, close) = if colors {
        (format!("{}{}", BOLD, Role::Mark.ansi()), RESET.to_string())
    } else {
        (String::new(), String::new())
    };
    let marked = html.replace(MARK_OPEN, &open).replace(MARK_CLOSE, &close);
    html_escape::decode_html_entities(&marked).into_owned()
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

/// Print a content line: │ content          │
pub fn row(content: &str) {
    let border = paint(Role::Muted, "", "│");
    let pad = BOX_WIDTH.saturating_sub(visible_len(content));
    println!("{}{}{}{}", border, content, " ".repeat(pad), border);
}

/// Print section header: ┌─ LABEL ──────────┐
pub fn section_top(label: &str) {
    let label_part = format!("─ {} ", paint(Role::Heading, BOLD, label));
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!(
        "{}{}{}",
        paint(Role::Muted, "", "┌"),
        label_part,
        paint(Role::Muted, "", &format!("{}┐", "─".repeat(remaining)))
    );
}

/// Print section footer: └──────────────────┘
pub fn section_bot() {
    println!("{}", paint(Role::Muted, "", &format!("└{}┘", "─".repeat(BOX_WIDTH))));
}

/// Key/value line inside a box.
pub fn stat_row(label: &str, value: impl std::fmt::Display) {
    row(&format!(" {:<20}{}", paint(Role::Muted, "", label), value));
}

// ═══════════════════════════════════════════════════════════════════════════
// SEARCH OUTPUT
// ═══════════════════════════════════════════════════════════════════════════

/// Colored prefix for fatal CLI errors.
pub fn error_prefix() -> String {
    paint(Role::Error, BOLD, "error:")
}

/// One status line (not ready, no results, ...).
pub fn status(message: &str) {
    println!("{}", paint(Role::Muted, DIM, message));
}

/// One ranked result: rank, score, title, meta line, snippet.
pub fn print_result(rank: usize, score: f64, view: &sitesift::ResultView) {
    let colors = use_colors();
    println!(
        "{} {} {}",
        paint(Role::Muted, "", &format!("{:>2}.", rank)),
        marks_to_terminal(&view.title_html, colors),
        paint(Role::Score, DIM, &format!("({:.1})", score)),
    );

    let mut meta = vec![view.category.clone()];
    if !view.date.is_empty() {
        meta.push(view.date.clone());
    }
    if !view.tags.is_empty() {
        meta.push(view.tags.join(", "));
    }
    println!(
        "    {}  {}",
        paint(Role::Link, "", &view.url),
        paint(Role::Muted, "", &meta.join(" · "))
    );
    println!("    {}", marks_to_terminal(&view.snippet_html, colors));
    println!();
}
