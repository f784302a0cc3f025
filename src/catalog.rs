//! Static catalogue commands: `lectio books`, `lectio scopes`, `lectio parse`.
//!
//! These read only the built-in canon and scope tables, so they run
//! without a config file or corpus.

use anyhow::{bail, Result};
use lectio_core::{canon, Book, ChapterLocation, Location, Scope, Testament};

/// A reference normalised and checked against the canon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedReference {
    Verse(Location),
    Chapter(ChapterLocation),
}

impl ParsedReference {
    /// Canonical form, e.g. `1 John 4:8` or `Psalms 119`.
    pub fn display(&self) -> String {
        match self {
            ParsedReference::Verse(loc) => loc.to_string(),
            ParsedReference::Chapter(loc) => loc.to_string(),
        }
    }

    /// Resource-style key, e.g. `Jo1|4|8` or `Psa|119`.
    pub fn record_key(&self) -> String {
        match self {
            ParsedReference::Verse(loc) => {
                format!("{}|{}|{}", loc.book.code(), loc.chapter, loc.verse)
            }
            ParsedReference::Chapter(loc) => format!("{}|{}", loc.book.code(), loc.chapter),
        }
    }
}

/// Parse `reference` as a verse (`Book C:V`) or chapter (`Book C`) address
/// and validate it against the canon.
pub fn parse_reference(reference: &str) -> Result<ParsedReference> {
    let parsed = if reference.contains(':') {
        let loc: Location = reference.parse()?;
        loc.validate()?;
        ParsedReference::Verse(loc)
    } else {
        let loc: ChapterLocation = reference.parse()?;
        loc.validate()?;
        ParsedReference::Chapter(loc)
    };
    Ok(parsed)
}

pub fn run_books() -> Result<()> {
    println!(
        "{:>2}  {:<4} {:<20} {:<18} {:<3} {:>4} {:>6}",
        "#", "code", "name", "title", "T", "ch", "verses"
    );
    for book in Book::ALL {
        let testament = match book.testament() {
            Testament::Old => "OT",
            Testament::New => "NT",
        };
        println!(
            "{:>2}  {:<4} {:<20} {:<18} {:<3} {:>4} {:>6}",
            book.ordinal() + 1,
            book.code(),
            book.name(),
            book.title(),
            testament,
            canon::chapter_count(book),
            canon::book_verse_count(book),
        );
    }
    Ok(())
}

pub fn run_scopes() -> Result<()> {
    for scope in Scope::ALL {
        let books = scope.books();
        let first = books.first().map(|b| b.title()).unwrap_or("-");
        let last = books.last().map(|b| b.title()).unwrap_or("-");
        println!(
            "{:<32} {:<34} {:>2} books  ({} .. {})",
            scope.name(),
            scope.title(),
            books.len(),
            first,
            last
        );
    }
    Ok(())
}

pub fn run_parse(reference: &str) -> Result<()> {
    if reference.trim().is_empty() {
        bail!("empty reference");
    }
    let parsed = parse_reference(reference)?;
    println!("{}\t{}", parsed.display(), parsed.record_key());
    Ok(())
}
