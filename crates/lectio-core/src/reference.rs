//! Verse and chapter addresses, and their validation against the canon.
//!
//! Parsing (`"John 3:16"`) checks syntax only. Whether the address exists is
//! decided by [`validate_chapter`] / [`validate_verse`], which always check
//! the chapter before the verse.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::book::Book;
use crate::canon;
use crate::error::{LectioError, Result};

/// A single verse: (book, chapter, verse), all 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Location {
    pub book: Book,
    pub chapter: u32,
    pub verse: u32,
}

/// A whole chapter: (book, chapter), 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct ChapterLocation {
    pub book: Book,
    pub chapter: u32,
}

impl Location {
    pub fn new(book: Book, chapter: u32, verse: u32) -> Self {
        Self {
            book,
            chapter,
            verse,
        }
    }

    /// The chapter this verse belongs to.
    pub fn chapter_location(&self) -> ChapterLocation {
        ChapterLocation::new(self.book, self.chapter)
    }

    pub fn validate(&self) -> Result<()> {
        validate_verse(self.book, self.chapter, self.verse)
    }
}

impl ChapterLocation {
    pub fn new(book: Book, chapter: u32) -> Self {
        Self { book, chapter }
    }

    pub fn validate(&self) -> Result<()> {
        validate_chapter(self.book, self.chapter)
    }
}

/// Accept `chapter` iff `1 <= chapter <= chapter_count(book)`.
pub fn validate_chapter(book: Book, chapter: u32) -> Result<()> {
    canon::verse_count(book, chapter).map(|_| ())
}

/// Accept `verse` iff its chapter is valid and `1 <= verse <= verse_count`.
///
/// A [`LectioError::VerseOutOfRange`] is never produced for an invalid
/// chapter; the chapter check short-circuits.
pub fn validate_verse(book: Book, chapter: u32, verse: u32) -> Result<()> {
    let max = canon::verse_count(book, chapter)?;
    if verse == 0 || verse > max {
        return Err(LectioError::VerseOutOfRange {
            book,
            chapter,
            verse,
            max,
        });
    }
    Ok(())
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}:{}", self.book, self.chapter, self.verse)
    }
}

impl fmt::Display for ChapterLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.book, self.chapter)
    }
}

/// Split `"1 John 4:8"` into `("1 John", "4:8")`.
fn split_reference(s: &str) -> Result<(Book, &str)> {
    let trimmed = s.trim();
    let (book_part, numbers) = trimmed
        .rsplit_once(char::is_whitespace)
        .ok_or_else(|| LectioError::InvalidReference(s.to_string()))?;
    let book = book_part.trim().parse::<Book>()?;
    Ok((book, numbers))
}

fn parse_number(field: &str, whole: &str) -> Result<u32> {
    field
        .parse::<u32>()
        .map_err(|_| LectioError::InvalidReference(whole.to_string()))
}

impl FromStr for Location {
    type Err = LectioError;

    /// Parses `"<book> <chapter>:<verse>"`, where `<book>` is anything
    /// [`Book::from_str`] accepts.
    fn from_str(s: &str) -> Result<Location> {
        let (book, numbers) = split_reference(s)?;
        let (chapter, verse) = numbers
            .split_once(':')
            .ok_or_else(|| LectioError::InvalidReference(s.to_string()))?;
        Ok(Location::new(
            book,
            parse_number(chapter, s)?,
            parse_number(verse, s)?,
        ))
    }
}

impl FromStr for ChapterLocation {
    type Err = LectioError;

    /// Parses `"<book> <chapter>"`.
    fn from_str(s: &str) -> Result<ChapterLocation> {
        let (book, numbers) = split_reference(s)?;
        Ok(ChapterLocation::new(book, parse_number(numbers, s)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chapter_bounds() {
        assert!(validate_chapter(Book::Genesis, 1).is_ok());
        assert!(validate_chapter(Book::Genesis, 50).is_ok());
        assert!(matches!(
            validate_chapter(Book::Genesis, 0),
            Err(LectioError::ChapterOutOfRange { .. })
        ));
        assert!(matches!(
            validate_chapter(Book::Genesis, 51),
            Err(LectioError::ChapterOutOfRange { .. })
        ));
    }

    #[test]
    fn test_verse_bounds() {
        assert!(validate_verse(Book::Genesis, 1, 1).is_ok());
        assert!(validate_verse(Book::Genesis, 1, 31).is_ok());
        assert_eq!(
            validate_verse(Book::Genesis, 1, 32),
            Err(LectioError::VerseOutOfRange {
                book: Book::Genesis,
                chapter: 1,
                verse: 32,
                max: 31
            })
        );
        assert!(matches!(
            validate_verse(Book::Genesis, 1, 0),
            Err(LectioError::VerseOutOfRange { .. })
        ));
    }

    #[test]
    fn test_chapter_checked_before_verse() {
        // Both chapter and verse are bad; only the chapter is reported.
        assert!(matches!(
            validate_verse(Book::Genesis, 51, 0),
            Err(LectioError::ChapterOutOfRange { .. })
        ));
        assert!(matches!(
            validate_verse(Book::Jude, 2, 999),
            Err(LectioError::ChapterOutOfRange { .. })
        ));
    }

    #[test]
    fn test_parse_location() {
        let loc: Location = "John 3:16".parse().unwrap();
        assert_eq!(loc, Location::new(Book::John, 3, 16));

        let loc: Location = "1 John 4:8".parse().unwrap();
        assert_eq!(loc, Location::new(Book::FirstJohn, 4, 8));

        let loc: Location = "  Song of Solomon 2:1 ".parse().unwrap();
        assert_eq!(loc, Location::new(Book::SongOfSolomon, 2, 1));

        let loc: Location = "Sa1 3:4".parse().unwrap();
        assert_eq!(loc, Location::new(Book::FirstSamuel, 3, 4));
    }

    #[test]
    fn test_parse_is_syntax_only() {
        // Out of range, but well formed.
        let loc: Location = "Genesis 99:1".parse().unwrap();
        assert!(loc.validate().is_err());
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert!(matches!(
            "John".parse::<Location>(),
            Err(LectioError::InvalidReference(_))
        ));
        assert!(matches!(
            "John 3".parse::<Location>(),
            Err(LectioError::InvalidReference(_))
        ));
        assert!(matches!(
            "John 3:x".parse::<Location>(),
            Err(LectioError::InvalidReference(_))
        ));
        assert!(matches!(
            "John -3:1".parse::<Location>(),
            Err(LectioError::InvalidReference(_))
        ));
        assert!(matches!(
            "Hezekiah 1:1".parse::<Location>(),
            Err(LectioError::UnknownBook(_))
        ));
    }

    #[test]
    fn test_parse_chapter_location() {
        let loc: ChapterLocation = "Psalms 119".parse().unwrap();
        assert_eq!(loc, ChapterLocation::new(Book::Psalms, 119));
        assert!("Psalms 119:1".parse::<ChapterLocation>().is_err());
    }

    #[test]
    fn test_display_roundtrip() {
        let loc = Location::new(Book::SecondTimothy, 3, 16);
        assert_eq!(loc.to_string(), "2 Timothy 3:16");
        assert_eq!(loc.to_string().parse::<Location>().unwrap(), loc);
        assert_eq!(loc.chapter_location().to_string(), "2 Timothy 3");
    }
}
