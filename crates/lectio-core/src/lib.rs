//! # Lectio Core
//!
//! Reference resolution and query engine for a fixed scripture corpus:
//! the canon table, reference validation, the corpus index, named scopes,
//! and the four query families (verse, chapter, find, search).
//!
//! This crate performs no filesystem or network I/O. Raw corpus text
//! arrives through the [`source::CorpusSource`] trait.
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`book`] | The 66 books, their codes and titles |
//! | [`canon`] | Chapter and verse counts per book |
//! | [`reference`] | Verse/chapter addresses and validation |
//! | [`scope`] | Named book groupings for scoped search |
//! | [`corpus`] | Parsed, indexed verse records |
//! | [`query`] | Lookup and substring search over a corpus |
//! | [`engine`] | [`Bible`]: load/close lifecycle around the queries |
//! | [`source`] | Corpus text providers |

pub mod book;
pub mod canon;
pub mod corpus;
pub mod engine;
pub mod error;
pub mod query;
pub mod reference;
pub mod scope;
pub mod source;

pub use book::{Book, Testament};
pub use corpus::{CanonReport, Corpus, CorpusStats, Verse};
pub use engine::Bible;
pub use error::{LectioError, Result};
pub use reference::{ChapterLocation, Location};
pub use scope::{Scope, SearchScope};
pub use source::{CorpusSource, StaticSource};
