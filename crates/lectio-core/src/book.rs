//! The 66 books of the canon.
//!
//! Every piece of per-book constant data (canonical identifier, display
//! title, three-letter corpus code) lives in a single table indexed by the
//! book's ordinal, so a [`Book`] never needs to be cast into a parallel
//! enumeration to find its code.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::{LectioError, Result};

/// Number of books in the canon.
pub const BOOK_COUNT: usize = 66;

/// Number of Old Testament books; they occupy ordinals `0..OLD_TESTAMENT_LEN`.
const OLD_TESTAMENT_LEN: usize = 39;

/// A book of the canon, in canonical order (Genesis = 0 … Revelation = 65).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Book {
    Genesis,
    Exodus,
    Leviticus,
    Numbers,
    Deuteronomy,
    Joshua,
    Judges,
    Ruth,
    FirstSamuel,
    SecondSamuel,
    FirstKings,
    SecondKings,
    FirstChronicles,
    SecondChronicles,
    Ezra,
    Nehemiah,
    Esther,
    Job,
    Psalms,
    Proverbs,
    Ecclesiastes,
    SongOfSolomon,
    Isaiah,
    Jeremiah,
    Lamentations,
    Ezekiel,
    Daniel,
    Hosea,
    Joel,
    Amos,
    Obadiah,
    Jonah,
    Micah,
    Nahum,
    Habakkuk,
    Zephaniah,
    Haggai,
    Zechariah,
    Malachi,
    Matthew,
    Mark,
    Luke,
    John,
    Acts,
    Romans,
    FirstCorinthians,
    SecondCorinthians,
    Galatians,
    Ephesians,
    Philippians,
    Colossians,
    FirstThessalonians,
    SecondThessalonians,
    FirstTimothy,
    SecondTimothy,
    Titus,
    Philemon,
    Hebrews,
    James,
    FirstPeter,
    SecondPeter,
    FirstJohn,
    SecondJohn,
    ThirdJohn,
    Jude,
    Revelation,
}

/// Which half of the canon a book belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Testament {
    Old,
    New,
}

struct BookMeta {
    /// Stable identifier, e.g. `First_Samuel`.
    name: &'static str,
    /// Human title, e.g. `1 Samuel`.
    title: &'static str,
    /// Code used by the corpus resource, e.g. `Sa1`.
    code: &'static str,
}

#[rustfmt::skip]
const META: [BookMeta; BOOK_COUNT] = [
    BookMeta { name: "Genesis", title: "Genesis", code: "Gen" },
    BookMeta { name: "Exodus", title: "Exodus", code: "Exo" },
    BookMeta { name: "Leviticus", title: "Leviticus", code: "Lev" },
    BookMeta { name: "Numbers", title: "Numbers", code: "Num" },
    BookMeta { name: "Deuteronomy", title: "Deuteronomy", code: "Deu" },
    BookMeta { name: "Joshua", title: "Joshua", code: "Jos" },
    BookMeta { name: "Judges", title: "Judges", code: "Jdg" },
    BookMeta { name: "Ruth", title: "Ruth", code: "Rut" },
    BookMeta { name: "First_Samuel", title: "1 Samuel", code: "Sa1" },
    BookMeta { name: "Second_Samuel", title: "2 Samuel", code: "Sa2" },
    BookMeta { name: "First_Kings", title: "1 Kings", code: "Kg1" },
    BookMeta { name: "Second_Kings", title: "2 Kings", code: "Kg2" },
    BookMeta { name: "First_Chronicles", title: "1 Chronicles", code: "Ch1" },
    BookMeta { name: "Second_Chronicles", title: "2 Chronicles", code: "Ch2" },
    BookMeta { name: "Ezra", title: "Ezra", code: "Ezr" },
    BookMeta { name: "Nehemiah", title: "Nehemiah", code: "Neh" },
    BookMeta { name: "Esther", title: "Esther", code: "Est" },
    BookMeta { name: "Job", title: "Job", code: "Job" },
    BookMeta { name: "Psalms", title: "Psalms", code: "Psa" },
    BookMeta { name: "Proverbs", title: "Proverbs", code: "Pro" },
    BookMeta { name: "Ecclesiastes", title: "Ecclesiastes", code: "Ecc" },
    BookMeta { name: "SongofSolomon", title: "Song of Solomon", code: "Sol" },
    BookMeta { name: "Isaiah", title: "Isaiah", code: "Isa" },
    BookMeta { name: "Jeremiah", title: "Jeremiah", code: "Jer" },
    BookMeta { name: "Lamentations", title: "Lamentations", code: "Lam" },
    BookMeta { name: "Ezekiel", title: "Ezekiel", code: "Eze" },
    BookMeta { name: "Daniel", title: "Daniel", code: "Dan" },
    BookMeta { name: "Hosea", title: "Hosea", code: "Hos" },
    BookMeta { name: "Joel", title: "Joel", code: "Joe" },
    BookMeta { name: "Amos", title: "Amos", code: "Amo" },
    BookMeta { name: "Obadiah", title: "Obadiah", code: "Oba" },
    BookMeta { name: "Jonah", title: "Jonah", code: "Jon" },
    BookMeta { name: "Micah", title: "Micah", code: "Mic" },
    BookMeta { name: "Nahum", title: "Nahum", code: "Nah" },
    BookMeta { name: "Habakkuk", title: "Habakkuk", code: "Hab" },
    BookMeta { name: "Zephaniah", title: "Zephaniah", code: "Zep" },
    BookMeta { name: "Haggai", title: "Haggai", code: "Hag" },
    BookMeta { name: "Zechariah", title: "Zechariah", code: "Zac" },
    BookMeta { name: "Malachi", title: "Malachi", code: "Mal" },
    BookMeta { name: "Matthew", title: "Matthew", code: "Mat" },
    BookMeta { name: "Mark", title: "Mark", code: "Mar" },
    BookMeta { name: "Luke", title: "Luke", code: "Luk" },
    BookMeta { name: "John", title: "John", code: "Joh" },
    BookMeta { name: "Acts", title: "Acts", code: "Act" },
    BookMeta { name: "Romans", title: "Romans", code: "Rom" },
    BookMeta { name: "First_Corinthians", title: "1 Corinthians", code: "Co1" },
    BookMeta { name: "Second_Corinthians", title: "2 Corinthians", code: "Co2" },
    BookMeta { name: "Galatians", title: "Galatians", code: "Gal" },
    BookMeta { name: "Ephesians", title: "Ephesians", code: "Eph" },
    BookMeta { name: "Philippians", title: "Philippians", code: "Phi" },
    BookMeta { name: "Colossians", title: "Colossians", code: "Col" },
    BookMeta { name: "First_Thessalonians", title: "1 Thessalonians", code: "Th1" },
    BookMeta { name: "Second_Thessalonians", title: "2 Thessalonians", code: "Th2" },
    BookMeta { name: "First_Timothy", title: "1 Timothy", code: "Ti1" },
    BookMeta { name: "Second_Timothy", title: "2 Timothy", code: "Ti2" },
    BookMeta { name: "Titus", title: "Titus", code: "Tit" },
    BookMeta { name: "Philemon", title: "Philemon", code: "Phm" },
    BookMeta { name: "Hebrews", title: "Hebrews", code: "Heb" },
    BookMeta { name: "James", title: "James", code: "Jam" },
    BookMeta { name: "First_Peter", title: "1 Peter", code: "Pe1" },
    BookMeta { name: "Second_Peter", title: "2 Peter", code: "Pe2" },
    BookMeta { name: "First_John", title: "1 John", code: "Jo1" },
    BookMeta { name: "Second_John", title: "2 John", code: "Jo2" },
    BookMeta { name: "Third_John", title: "3 John", code: "Jo3" },
    BookMeta { name: "Jude", title: "Jude", code: "Jde" },
    BookMeta { name: "Revelation", title: "Revelation", code: "Rev" },
];

impl Book {
    /// All books in canonical order.
    pub const ALL: [Book; BOOK_COUNT] = [
        Book::Genesis,
        Book::Exodus,
        Book::Leviticus,
        Book::Numbers,
        Book::Deuteronomy,
        Book::Joshua,
        Book::Judges,
        Book::Ruth,
        Book::FirstSamuel,
        Book::SecondSamuel,
        Book::FirstKings,
        Book::SecondKings,
        Book::FirstChronicles,
        Book::SecondChronicles,
        Book::Ezra,
        Book::Nehemiah,
        Book::Esther,
        Book::Job,
        Book::Psalms,
        Book::Proverbs,
        Book::Ecclesiastes,
        Book::SongOfSolomon,
        Book::Isaiah,
        Book::Jeremiah,
        Book::Lamentations,
        Book::Ezekiel,
        Book::Daniel,
        Book::Hosea,
        Book::Joel,
        Book::Amos,
        Book::Obadiah,
        Book::Jonah,
        Book::Micah,
        Book::Nahum,
        Book::Habakkuk,
        Book::Zephaniah,
        Book::Haggai,
        Book::Zechariah,
        Book::Malachi,
        Book::Matthew,
        Book::Mark,
        Book::Luke,
        Book::John,
        Book::Acts,
        Book::Romans,
        Book::FirstCorinthians,
        Book::SecondCorinthians,
        Book::Galatians,
        Book::Ephesians,
        Book::Philippians,
        Book::Colossians,
        Book::FirstThessalonians,
        Book::SecondThessalonians,
        Book::FirstTimothy,
        Book::SecondTimothy,
        Book::Titus,
        Book::Philemon,
        Book::Hebrews,
        Book::James,
        Book::FirstPeter,
        Book::SecondPeter,
        Book::FirstJohn,
        Book::SecondJohn,
        Book::ThirdJohn,
        Book::Jude,
        Book::Revelation,
    ];

    /// Zero-based canonical position.
    pub fn ordinal(self) -> usize {
        self as usize
    }

    pub fn from_ordinal(ordinal: usize) -> Option<Book> {
        Self::ALL.get(ordinal).copied()
    }

    /// Canonical identifier, e.g. `"First_Samuel"` or `"SongofSolomon"`.
    pub fn name(self) -> &'static str {
        META[self.ordinal()].name
    }

    /// Display title, e.g. `"1 Samuel"` or `"Song of Solomon"`.
    pub fn title(self) -> &'static str {
        META[self.ordinal()].title
    }

    /// Three-letter code used in the corpus resource, e.g. `"Sa1"`.
    pub fn code(self) -> &'static str {
        META[self.ordinal()].code
    }

    /// Look a book up by its exact corpus code.
    pub fn from_code(code: &str) -> Option<Book> {
        META.iter()
            .position(|m| m.code == code)
            .and_then(Book::from_ordinal)
    }

    pub fn testament(self) -> Testament {
        if self.ordinal() < OLD_TESTAMENT_LEN {
            Testament::Old
        } else {
            Testament::New
        }
    }
}

/// Lowercase and drop spaces/underscores so `"1 samuel"`, `"First_Samuel"`
/// and `"firstsamuel"` compare equal to the table entries.
fn fold(s: &str) -> String {
    s.chars()
        .filter(|c| !c.is_whitespace() && *c != '_')
        .flat_map(char::to_lowercase)
        .collect()
}

impl FromStr for Book {
    type Err = LectioError;

    /// Accepts the canonical identifier, the title, or the corpus code,
    /// ignoring case, spaces and underscores.
    fn from_str(s: &str) -> Result<Book> {
        let key = fold(s);
        if key.is_empty() {
            return Err(LectioError::UnknownBook(s.to_string()));
        }
        META.iter()
            .position(|m| fold(m.name) == key || fold(m.title) == key || fold(m.code) == key)
            .and_then(Book::from_ordinal)
            .ok_or_else(|| LectioError::UnknownBook(s.to_string()))
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

impl Serialize for Book {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}
