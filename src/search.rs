//! Substring search over verse text.
//!
//! Backs `lectio find` (texts only) and `lectio search` (texts with
//! locations). Matching is the core's literal, case-sensitive substring
//! test. A result cap comes from `--limit`, falling back to
//! `[search] limit` in the config; with neither, every match is printed.

use anyhow::{bail, Result};
use lectio_core::{Bible, Book, SearchScope, Verse};

use crate::config::Config;
use crate::source;

/// Turn the mutually exclusive `--scope`/`--book` flags into a search scope.
pub fn select_scope(scope: Option<&str>, book: Option<&str>) -> Result<SearchScope> {
    match (scope, book) {
        (Some(_), Some(_)) => bail!("--scope and --book cannot be combined"),
        (Some(name), None) => Ok(SearchScope::named(name)?),
        (None, Some(name)) => Ok(SearchScope::Book(name.parse::<Book>()?)),
        (None, None) => Ok(SearchScope::All),
    }
}

fn effective_limit(config: &Config, limit: Option<usize>) -> Result<Option<usize>> {
    if limit == Some(0) {
        bail!("--limit must be >= 1");
    }
    Ok(limit.or(config.search.limit))
}

fn truncate<T>(mut hits: Vec<T>, limit: Option<usize>) -> Vec<T> {
    if let Some(limit) = limit {
        hits.truncate(limit);
    }
    hits
}

/// Core search returning located verses, capped at `limit`.
pub fn search_verses(
    bible: &Bible,
    query: &str,
    scope: &SearchScope,
    limit: Option<usize>,
) -> Result<Vec<Verse>> {
    Ok(truncate(bible.search(query, scope)?, limit))
}

/// CLI entry point for `lectio find`.
pub fn run_find(
    config: &Config,
    query: &str,
    scope: &SearchScope,
    limit: Option<usize>,
) -> Result<()> {
    let limit = effective_limit(config, limit)?;
    let bible = source::open_bible(config)?;
    let hits = truncate(bible.find(query, scope)?, limit);

    if hits.is_empty() {
        println!("No results.");
        return Ok(());
    }
    for text in &hits {
        println!("{}", text);
    }
    Ok(())
}

/// CLI entry point for `lectio search`.
pub fn run_search(
    config: &Config,
    query: &str,
    scope: &SearchScope,
    limit: Option<usize>,
    json: bool,
) -> Result<()> {
    let limit = effective_limit(config, limit)?;
    let bible = source::open_bible(config)?;
    let hits = search_verses(&bible, query, scope, limit)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&hits)?);
        return Ok(());
    }

    if hits.is_empty() {
        println!("No results.");
        return Ok(());
    }
    for verse in &hits {
        println!("{}  {}", verse.location, verse.text);
    }
    Ok(())
}
