//! Corpus index: the parsed verse records plus their lookup structures.
//!
//! # Resource format
//!
//! One verse per line, four `|`-separated fields:
//!
//! ```text
//! Gen|1|1| In the beginning God created the heaven and the earth.~
//! ```
//!
//! The text field carries one leading space and a trailing `~`
//! terminator, both stripped on parse. Blank lines are skipped.
//!
//! # Guarantees
//!
//! - A malformed line aborts the whole parse; no partial index is built.
//! - Point lookup is O(1); chapter retrieval is O(chapter length).
//! - Records keep source order for full scans.
//! - The index does not consult the canon table while parsing. Use
//!   [`Corpus::check_canon`] to compare the two.

use std::collections::{HashMap, HashSet};

use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::book::Book;
use crate::canon;
use crate::error::{LectioError, Result};
use crate::reference::{ChapterLocation, Location};

const FIELD_DELIMITER: char = '|';
const TEXT_TERMINATOR: char = '~';

/// A verse and where it lives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Verse {
    pub location: Location,
    pub text: String,
}

/// Immutable index over a fully parsed corpus.
#[derive(Debug)]
pub struct Corpus {
    verses: Vec<Verse>,
    by_location: HashMap<Location, usize>,
    /// Positions into `verses`, sorted by verse number.
    by_chapter: HashMap<ChapterLocation, Vec<usize>>,
    digest: String,
}

/// Summary counts for a loaded corpus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CorpusStats {
    pub verses: usize,
    pub chapters: usize,
    pub books: usize,
    /// Hex SHA-256 of the raw resource text.
    pub digest: String,
}

/// Differences between the corpus and the canon table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CanonReport {
    /// Canon says the verse exists; the corpus has no record.
    pub missing: Vec<Location>,
    /// The corpus has a record the canon does not allow.
    pub extra: Vec<Location>,
}

impl CanonReport {
    pub fn is_consistent(&self) -> bool {
        self.missing.is_empty() && self.extra.is_empty()
    }
}

fn load_error(line: usize, reason: impl Into<String>) -> LectioError {
    LectioError::LoadFailure {
        line,
        reason: reason.into(),
    }
}

/// Parse one resource line into a verse.
fn parse_line(line_no: usize, line: &str) -> Result<Verse> {
    let fields: Vec<&str> = line.split(FIELD_DELIMITER).collect();
    if fields.len() != 4 {
        return Err(load_error(
            line_no,
            format!("expected 4 fields, found {}", fields.len()),
        ));
    }

    let book = Book::from_code(fields[0])
        .ok_or_else(|| load_error(line_no, format!("unknown book code '{}'", fields[0])))?;

    let number = |field: &str, what: &str| -> Result<u32> {
        match field.parse::<u32>() {
            Ok(0) => Err(load_error(line_no, format!("{} number must be positive", what))),
            Ok(n) => Ok(n),
            Err(_) => Err(load_error(
                line_no,
                format!("{} number '{}' is not numeric", what, field),
            )),
        }
    };
    let chapter = number(fields[1], "chapter")?;
    let verse = number(fields[2], "verse")?;

    let raw = fields[3];
    let text = raw
        .strip_prefix(' ')
        .unwrap_or(raw)
        .trim_end_matches(TEXT_TERMINATOR);

    Ok(Verse {
        location: Location::new(book, chapter, verse),
        text: text.to_string(),
    })
}

impl Corpus {
    /// Parse the full resource text and build the index.
    ///
    /// Fails with [`LectioError::LoadFailure`] on the first malformed line
    /// or on a location that appears twice.
    pub fn parse(raw: &str) -> Result<Corpus> {
        let mut verses = Vec::new();
        let mut by_location = HashMap::new();

        // A UTF-8 byte-order mark would otherwise glue onto the first book code.
        let body = raw.strip_prefix('\u{feff}').unwrap_or(raw);
        for (i, line) in body.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let line_no = i + 1;
            let verse = parse_line(line_no, line)?;
            if by_location.insert(verse.location, verses.len()).is_some() {
                return Err(load_error(
                    line_no,
                    format!("duplicate record for {}", verse.location),
                ));
            }
            verses.push(verse);
        }

        let mut by_chapter: HashMap<ChapterLocation, Vec<usize>> = HashMap::new();
        for (idx, verse) in verses.iter().enumerate() {
            by_chapter
                .entry(verse.location.chapter_location())
                .or_default()
                .push(idx);
        }
        for positions in by_chapter.values_mut() {
            positions.sort_by_key(|&idx| verses[idx].location.verse);
        }

        let digest = format!("{:x}", Sha256::digest(raw.as_bytes()));

        tracing::debug!(
            verses = verses.len(),
            chapters = by_chapter.len(),
            "parsed corpus"
        );

        Ok(Corpus {
            verses,
            by_location,
            by_chapter,
            digest,
        })
    }

    /// Number of verse records.
    pub fn len(&self) -> usize {
        self.verses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.verses.is_empty()
    }

    /// All records in source order.
    pub fn verses(&self) -> &[Verse] {
        &self.verses
    }

    /// O(1) lookup of a single record.
    pub fn verse(&self, location: &Location) -> Option<&Verse> {
        self.by_location
            .get(location)
            .map(|&idx| &self.verses[idx])
    }

    /// Records of one chapter in verse order, or `None` if the corpus has
    /// no verse for that chapter.
    pub fn chapter(&self, location: &ChapterLocation) -> Option<impl Iterator<Item = &Verse>> {
        self.by_chapter
            .get(location)
            .map(|positions| positions.iter().map(|&idx| &self.verses[idx]))
    }

    /// Hex SHA-256 of the resource the index was built from.
    pub fn digest(&self) -> &str {
        &self.digest
    }

    pub fn stats(&self) -> CorpusStats {
        let books: HashSet<Book> = self.verses.iter().map(|v| v.location.book).collect();
        CorpusStats {
            verses: self.verses.len(),
            chapters: self.by_chapter.len(),
            books: books.len(),
            digest: self.digest.clone(),
        }
    }

    /// Compare every canon location with the index, and every record with
    /// the canon. Both lists come back in canonical order.
    pub fn check_canon(&self) -> CanonReport {
        let mut report = CanonReport::default();

        for book in Book::ALL {
            for (i, &count) in canon::chapters(book).iter().enumerate() {
                let chapter = i as u32 + 1;
                for verse in 1..=count {
                    let location = Location::new(book, chapter, verse);
                    if !self.by_location.contains_key(&location) {
                        report.missing.push(location);
                    }
                }
            }
        }

        report.extra = self
            .verses
            .iter()
            .map(|v| v.location)
            .filter(|l| l.validate().is_err())
            .collect();
        report.extra.sort();

        report
    }
}
