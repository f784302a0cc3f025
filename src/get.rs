//! Verse and chapter retrieval by reference.
//!
//! Backs `lectio verse` and `lectio chapter`. References are parsed
//! syntactically here and validated against the canon by the core, so an
//! out-of-range address surfaces as the core's range error.

use anyhow::{Context, Result};
use lectio_core::{Bible, ChapterLocation, Location, Verse};

use crate::config::Config;
use crate::source;

/// Parse and resolve a single verse reference.
pub fn get_verse(bible: &Bible, reference: &str) -> Result<Verse> {
    let location: Location = reference
        .parse()
        .with_context(|| format!("Invalid verse reference: {}", reference))?;
    let text = bible.get_verse(&location)?;
    Ok(Verse { location, text })
}

/// Parse and resolve a chapter reference, returning the indexed text vector.
pub fn get_chapter(bible: &Bible, reference: &str, zero_based: bool) -> Result<Vec<String>> {
    let location: ChapterLocation = reference
        .parse()
        .with_context(|| format!("Invalid chapter reference: {}", reference))?;
    Ok(bible.get_chapter(&location, zero_based)?)
}

/// CLI entry point for `lectio verse`.
pub fn run_verse(config: &Config, reference: &str, json: bool) -> Result<()> {
    let bible = source::open_bible(config)?;
    let verse = get_verse(&bible, reference)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&verse)?);
    } else {
        println!("{}", verse.text);
    }
    Ok(())
}

/// CLI entry point for `lectio chapter`.
///
/// Prints one numbered line per verse. With `raw`, prints the indexed
/// vector itself as JSON, honouring `zero_based` (or the config default).
pub fn run_chapter(config: &Config, reference: &str, zero_based: bool, raw: bool) -> Result<()> {
    let bible = source::open_bible(config)?;

    if raw {
        let zero_based = zero_based || config.chapters.zero_based;
        let texts = get_chapter(&bible, reference, zero_based)?;
        println!("{}", serde_json::to_string_pretty(&texts)?);
        return Ok(());
    }

    let texts = get_chapter(&bible, reference, false)?;
    if texts.len() <= 1 {
        println!("No verses.");
        return Ok(());
    }
    for (number, text) in texts.iter().enumerate().skip(1) {
        println!("{:>3}  {}", number, text);
    }
    Ok(())
}
