// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use sitesift::{SearchConfig, SearchEngine, SearchOutcome};

mod cli;
use cli::{display, Cli, Commands};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("{} {:#}", display::error_prefix(), e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Search {
            corpus,
            query,
            limit,
            config,
            html,
        } => {
            let mut config = load_config(config.as_deref())?;
            if let Some(limit) = limit {
                config.limit = limit;
            }
            let engine = load_engine(&corpus, config)?;
            if html {
                println!("{}", engine.render_html(&query));
                Ok(())
            } else {
                print_search(&engine, &query)
            }
        }
        Commands::Inspect { corpus, top } => {
            let engine = load_engine(&corpus, SearchConfig::default())?;
            print_inspect(&engine, top);
            Ok(())
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<SearchConfig> {
    let Some(path) = path else {
        return Ok(SearchConfig::default());
    };
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("Invalid config JSON in {}", path.display()))
}

fn load_engine(corpus: &Path, config: SearchConfig) -> Result<SearchEngine> {
    let mut engine = SearchEngine::new(config).context("Invalid search config")?;
    engine
        .load_corpus_path(corpus)
        .with_context(|| format!("Failed to load corpus {}", corpus.display()))?;
    Ok(engine)
}

fn print_search(engine: &SearchEngine, query: &str) -> Result<()> {
    match engine.search(query) {
        SearchOutcome::TooShort => display::status("Query too short: type at least 2 characters"),
        SearchOutcome::NotReady => display::status("Search index not ready"),
        SearchOutcome::Error { message } => anyhow::bail!("Search error: {}", message),
        SearchOutcome::Results { results } if results.is_empty() => {
            display::status(&format!("No results found for \"{}\"", query.trim()));
        }
        SearchOutcome::Results { results } => {
            let views = engine.result_views(&results, query)?;
            for (rank, (result, view)) in results.iter().zip(&views).enumerate() {
                display::print_result(rank + 1, result.score, view);
            }
        }
    }
    Ok(())
}

fn print_inspect(engine: &SearchEngine, top: usize) {
    let (Some(store), Some(index)) = (engine.store(), engine.index()) else {
        display::status("Search index not ready");
        return;
    };

    display::section_top("CORPUS");
    display::stat_row("documents", store.len());
    display::stat_row(
        "with excerpt",
        store.iter().filter(|d| d.excerpt.is_some()).count(),
    );
    display::stat_row("with tags", store.iter().filter(|d| !d.tags.is_empty()).count());
    display::stat_row(
        "with date",
        store.iter().filter(|d| d.date.is_some()).count(),
    );
    display::section_bot();

    display::section_top("INDEX");
    display::stat_row("terms", index.term_count());
    display::stat_row("postings", index.posting_count());
    display::section_bot();

    let mut widespread: Vec<(&str, usize)> = index
        .terms()
        .map(|(term, postings)| (term, postings.len()))
        .collect();
    widespread.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

    display::section_top("MOST WIDESPREAD TERMS");
    for (term, docs) in widespread.into_iter().take(top) {
        display::stat_row(term, format!("{} docs", docs));
    }
    display::section_bot();
}
