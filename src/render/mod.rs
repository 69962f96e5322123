// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Turning ranked references into something a person can read.
//!
//! Snippets pick the sentence that explains a match, the highlighter marks
//! the query words in it, and `html` lays out the result list.

pub mod highlight;
pub mod html;
pub mod snippet;

pub use highlight::highlight;
pub use html::{format_date, ResultView};
pub use snippet::extract_snippet;
