//! Named book groupings used to narrow a search.
//!
//! The ten scopes are fixed editorial groupings. Whether they overlap or
//! partition the canon is checked by the tests below rather than assumed.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::book::Book;
use crate::error::{LectioError, Result};

/// A named, fixed set of books.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scope {
    NewTestament,
    OldTestament,
    Pentateuch,
    HistoricalBooks,
    PoeticalAndWisdomBooks,
    TheProphets,
    TheGospels,
    TheActs,
    PaulsLetters,
    GeneralEpistlesAndRevelation,
}

use Book::*;

const NEW_TESTAMENT: &[Book] = &[
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
];

const OLD_TESTAMENT: &[Book] = &[
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
];

const PENTATEUCH: &[Book] = &[Genesis, Exodus, Leviticus, Numbers, Deuteronomy];

const HISTORICAL_BOOKS: &[Book] = &[
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
];

// Lamentations is grouped with the poetry here, not with the prophets.
const POETICAL_AND_WISDOM_BOOKS: &[Book] = &[
    Job,
    Psalms,
    Proverbs,
    Ecclesiastes,
    SongOfSolomon,
    Lamentations,
];

const THE_PROPHETS: &[Book] = &[
    Isaiah, Jeremiah, Ezekiel, Daniel, Hosea, Joel, Amos, Obadiah, Jonah, Micah, Nahum,
    Habakkuk, Zephaniah, Haggai, Zechariah, Malachi,
];

const THE_GOSPELS: &[Book] = &[Matthew, Mark, Luke, John];

const THE_ACTS: &[Book] = &[Acts];

const PAULS_LETTERS: &[Book] = &[
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
];

const GENERAL_EPISTLES_AND_REVELATION: &[Book] = &[
    Hebrews,
    James,
    FirstPeter,
    SecondPeter,
    FirstJohn,
    SecondJohn,
    ThirdJohn,
    Jude,
    Revelation,
];

impl Scope {
    pub const ALL: [Scope; 10] = [
        Scope::NewTestament,
        Scope::OldTestament,
        Scope::Pentateuch,
        Scope::HistoricalBooks,
        Scope::PoeticalAndWisdomBooks,
        Scope::TheProphets,
        Scope::TheGospels,
        Scope::TheActs,
        Scope::PaulsLetters,
        Scope::GeneralEpistlesAndRevelation,
    ];

    /// Stable identifier, e.g. `"The_Gospels"`.
    pub fn name(self) -> &'static str {
        match self {
            Scope::NewTestament => "New_Testament",
            Scope::OldTestament => "Old_Testament",
            Scope::Pentateuch => "Pentateuch",
            Scope::HistoricalBooks => "Historical_Books",
            Scope::PoeticalAndWisdomBooks => "Poetical_and_Wisdom_Books",
            Scope::TheProphets => "The_Prophets",
            Scope::TheGospels => "The_Gospels",
            Scope::TheActs => "The_Acts",
            Scope::PaulsLetters => "Pauls_Letters",
            Scope::GeneralEpistlesAndRevelation => "General_Epistles_and_Revelation",
        }
    }

    /// Human title, e.g. `"Paul's Letters"`.
    pub fn title(self) -> &'static str {
        match self {
            Scope::NewTestament => "New Testament",
            Scope::OldTestament => "Old Testament",
            Scope::Pentateuch => "Pentateuch",
            Scope::HistoricalBooks => "Historical Books",
            Scope::PoeticalAndWisdomBooks => "Poetical and Wisdom Books",
            Scope::TheProphets => "The Prophets",
            Scope::TheGospels => "The Gospels",
            Scope::TheActs => "The Acts",
            Scope::PaulsLetters => "Paul's Letters",
            Scope::GeneralEpistlesAndRevelation => "General Epistles and Revelation",
        }
    }

    /// The scope's books in canonical order. Never empty.
    pub fn books(self) -> &'static [Book] {
        match self {
            Scope::NewTestament => NEW_TESTAMENT,
            Scope::OldTestament => OLD_TESTAMENT,
            Scope::Pentateuch => PENTATEUCH,
            Scope::HistoricalBooks => HISTORICAL_BOOKS,
            Scope::PoeticalAndWisdomBooks => POETICAL_AND_WISDOM_BOOKS,
            Scope::TheProphets => THE_PROPHETS,
            Scope::TheGospels => THE_GOSPELS,
            Scope::TheActs => THE_ACTS,
            Scope::PaulsLetters => PAULS_LETTERS,
            Scope::GeneralEpistlesAndRevelation => GENERAL_EPISTLES_AND_REVELATION,
        }
    }

    pub fn contains(self, book: Book) -> bool {
        self.books().contains(&book)
    }

    /// Resolve a scope by exact identifier (`"The_Gospels"`) or exact title
    /// (`"The Gospels"`). Matching is case-sensitive.
    pub fn resolve(name: &str) -> Result<Scope> {
        Self::ALL
            .into_iter()
            .find(|s| s.name() == name || s.title() == name)
            .ok_or_else(|| LectioError::UnknownScope(name.to_string()))
    }
}

impl FromStr for Scope {
    type Err = LectioError;

    fn from_str(s: &str) -> Result<Scope> {
        Scope::resolve(s)
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

impl Serialize for Scope {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// Which books a `find`/`search` scan considers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchScope {
    #[default]
    All,
    Scope(Scope),
    Book(Book),
}

impl SearchScope {
    /// Build a [`SearchScope::Scope`] from a scope name.
    pub fn named(name: &str) -> Result<SearchScope> {
        Scope::resolve(name).map(SearchScope::Scope)
    }

    pub fn includes(&self, book: Book) -> bool {
        match self {
            SearchScope::All => true,
            SearchScope::Scope(scope) => scope.contains(book),
            SearchScope::Book(b) => *b == book,
        }
    }
}

impl From<Scope> for SearchScope {
    fn from(scope: Scope) -> Self {
        SearchScope::Scope(scope)
    }
}

impl From<Book> for SearchScope {
    fn from(book: Book) -> Self {
        SearchScope::Book(book)
    }
}
