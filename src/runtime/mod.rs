// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime bindings.
//!
//! The WASM module is what actually runs in production: the same engine,
//! wrapped for JavaScript.

pub mod wasm;
