//! Typed failures for every core operation.

use thiserror::Error;

use crate::book::Book;
use crate::reference::Location;

/// Convenience alias used across the core crate.
pub type Result<T> = std::result::Result<T, LectioError>;

/// Everything the canon, corpus, and query layers can reject.
///
/// None of these are transient: inputs are static tables or an in-memory
/// index, so callers should surface them rather than retry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LectioError {
    /// Chapter is zero or past the book's last chapter.
    #[error("chapter {chapter} is out of range for {book} (1..={max})")]
    ChapterOutOfRange { book: Book, chapter: u32, max: u32 },

    /// Verse is zero or past the chapter's last verse. Only raised once the
    /// chapter itself is known to be valid.
    #[error("verse {verse} is out of range for {book} {chapter} (1..={max})")]
    VerseOutOfRange {
        book: Book,
        chapter: u32,
        verse: u32,
        max: u32,
    },

    #[error("unknown scope: {0}")]
    UnknownScope(String),

    #[error("unknown book: {0}")]
    UnknownBook(String),

    #[error("invalid reference: {0}")]
    InvalidReference(String),

    #[error("corpus is not loaded")]
    NotLoaded,

    #[error("corpus is already loaded")]
    AlreadyLoaded,

    /// The raw resource is malformed. `line` is 1-based.
    #[error("corpus load failed at line {line}: {reason}")]
    LoadFailure { line: usize, reason: String },

    /// The corpus source could not produce its text at all.
    #[error("corpus source '{name}' is unavailable: {reason}")]
    SourceUnavailable { name: String, reason: String },

    /// The location passed canon validation but the corpus has no record
    /// for it.
    #[error("no verse recorded at {0}")]
    VerseNotFound(Location),
}
