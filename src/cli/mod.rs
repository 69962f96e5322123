// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the sitesift command-line interface.
//!
//! Two subcommands: `search` runs a query against a corpus file exactly as
//! the browser would, and `inspect` summarizes what the index looks like.
//! Handy for checking a site's `search.json` before deploying it.

pub mod display;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "sitesift",
    about = "Client-side site search: query and inspect a JSON corpus",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search a corpus file and display ranked, highlighted results
    Search {
        /// Path to the corpus JSON (an array of page records)
        corpus: PathBuf,

        /// Search query
        query: String,

        /// Maximum number of results (overrides the config file)
        #[arg(short, long)]
        limit: Option<usize>,

        /// JSON config file: `{ "limit": 8, "snippetLen": 200, "boost": {...} }`
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Print the result panel HTML instead of terminal output
        #[arg(long)]
        html: bool,
    },

    /// Summarize a corpus and its index
    Inspect {
        /// Path to the corpus JSON
        corpus: PathBuf,

        /// How many of the most widespread terms to list
        #[arg(short, long, default_value = "10")]
        top: usize,
    },
}
