//! Search behavior tests.

mod common;

#[path = "search/ranking.rs"]
mod ranking;

#[path = "search/guards.rs"]
mod guards;

#[path = "search/determinism.rs"]
mod determinism;

#[path = "search/controller.rs"]
mod controller;
