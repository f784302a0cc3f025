//! The public query surface and its load/close lifecycle.
//!
//! A [`Bible`] is either unloaded or holds one fully built [`Corpus`]:
//!
//! ```text
//!   new() ──▶ unloaded ──load()──▶ loaded ──close()──▶ unloaded
//!                │                   │
//!             close() → NotLoaded  load() → AlreadyLoaded
//! ```
//!
//! The corpus is parsed without holding any lock and then published as an
//! `Arc` under a short write lock. Each query clones the `Arc` under a read
//! lock and runs against that snapshot, so a concurrent `close()` never
//! tears an index out from under an in-flight query.
//!
//! ```rust
//! use lectio_core::{Bible, Book, Location, SearchScope};
//!
//! let bible = Bible::new();
//! bible.load_str("Joh|11|35| Jesus wept.~").unwrap();
//! let text = bible.get_verse(&Location::new(Book::John, 11, 35)).unwrap();
//! assert_eq!(text, "Jesus wept.");
//! assert_eq!(bible.find("wept", &SearchScope::All).unwrap().len(), 1);
//! ```

use std::sync::{Arc, PoisonError, RwLock};

use crate::corpus::{Corpus, Verse};
use crate::error::{LectioError, Result};
use crate::query;
use crate::reference::{ChapterLocation, Location};
use crate::scope::SearchScope;
use crate::source::{CorpusSource, StaticSource};

/// Owned handle over an optionally loaded corpus. `Send + Sync`.
#[derive(Debug, Default)]
pub struct Bible {
    state: RwLock<Option<Arc<Corpus>>>,
}

impl Bible {
    /// A handle in the unloaded state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read, parse, and publish the corpus from `source`.
    ///
    /// Rejects with [`LectioError::AlreadyLoaded`] if a corpus is already
    /// published. Read or parse failures leave the handle unloaded.
    pub fn load<S: CorpusSource + ?Sized>(&self, source: &S) -> Result<()> {
        if self.is_loaded() {
            tracing::debug!(source = source.name(), "load rejected: already loaded");
            return Err(LectioError::AlreadyLoaded);
        }

        let raw = source.read()?;
        let corpus = Corpus::parse(&raw).inspect_err(|e| {
            tracing::warn!(source = source.name(), error = %e, "corpus load failed");
        })?;
        let (verses, digest) = (corpus.len(), corpus.digest().to_string());

        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        // Another caller may have published while we were parsing.
        if state.is_some() {
            tracing::debug!(source = source.name(), "load rejected: already loaded");
            return Err(LectioError::AlreadyLoaded);
        }
        *state = Some(Arc::new(corpus));

        tracing::info!(
            source = source.name(),
            verses,
            digest = &digest[..12],
            "corpus loaded"
        );
        Ok(())
    }

    /// Load from text already in memory.
    pub fn load_str(&self, raw: &str) -> Result<()> {
        self.load(&StaticSource::new("inline", raw.to_string()))
    }

    /// Drop the loaded corpus. Fails with [`LectioError::NotLoaded`] when
    /// nothing is loaded. Queries already running keep their snapshot.
    pub fn close(&self) -> Result<()> {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        match state.take() {
            Some(_) => {
                tracing::info!("corpus closed");
                Ok(())
            }
            None => Err(LectioError::NotLoaded),
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    /// A shared snapshot of the loaded corpus.
    pub fn corpus(&self) -> Result<Arc<Corpus>> {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
            .ok_or(LectioError::NotLoaded)
    }

    pub fn get_verse(&self, location: &Location) -> Result<String> {
        query::get_verse(&*self.corpus()?, location)
    }

    /// See [`query::get_chapter`] for the `zero_based` convention.
    pub fn get_chapter(&self, location: &ChapterLocation, zero_based: bool) -> Result<Vec<String>> {
        query::get_chapter(&*self.corpus()?, location, zero_based)
    }

    pub fn find(&self, query: &str, scope: &SearchScope) -> Result<Vec<String>> {
        Ok(query::find(&*self.corpus()?, query, scope))
    }

    /// Unscoped [`find`](Bible::find).
    pub fn find_all(&self, query: &str) -> Result<Vec<String>> {
        self.find(query, &SearchScope::All)
    }

    pub fn search(&self, query: &str, scope: &SearchScope) -> Result<Vec<Verse>> {
        Ok(query::search(&*self.corpus()?, query, scope))
    }

    /// Unscoped [`search`](Bible::search).
    pub fn search_all(&self, query: &str) -> Result<Vec<Verse>> {
        self.search(query, &SearchScope::All)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::book::Book;

    const SAMPLE: &str = "Gen|1|1| In the beginning.~\nGen|1|2| And the earth.~\n";

    #[test]
    fn test_queries_before_load_fail() {
        let bible = Bible::new();
        assert!(!bible.is_loaded());
        let loc = Location::new(Book::Genesis, 1, 1);
        assert_eq!(bible.get_verse(&loc), Err(LectioError::NotLoaded));
        assert_eq!(
            bible.get_chapter(&loc.chapter_location(), false),
            Err(LectioError::NotLoaded)
        );
        assert_eq!(bible.find_all(""), Err(LectioError::NotLoaded));
        assert_eq!(bible.search_all(""), Err(LectioError::NotLoaded));
    }

    #[test]
    fn test_close_unloaded_fails() {
        let bible = Bible::new();
        assert_eq!(bible.close(), Err(LectioError::NotLoaded));
    }

    #[test]
    fn test_load_close_query() {
        let bible = Bible::new();
        bible.load_str(SAMPLE).unwrap();
        assert!(bible.is_loaded());
        assert_eq!(bible.find_all("").unwrap().len(), 2);

        bible.close().unwrap();
        assert!(!bible.is_loaded());
        assert_eq!(bible.find_all(""), Err(LectioError::NotLoaded));
        assert_eq!(bible.close(), Err(LectioError::NotLoaded));
    }

    #[test]
    fn test_queries_run_against_loaded_corpus() {
        let bible = Bible::new();
        bible.load_str(SAMPLE).unwrap();

        let loc = Location::new(Book::Genesis, 1, 2);
        assert_eq!(bible.get_verse(&loc).unwrap(), "And the earth.");
        assert_eq!(
            bible.get_chapter(&loc.chapter_location(), true).unwrap(),
            vec!["In the beginning.".to_string(), "And the earth.".to_string()]
        );
        assert_eq!(
            bible.find("earth", &SearchScope::Book(Book::Genesis)).unwrap(),
            vec!["And the earth.".to_string()]
        );
        let hits = bible.search("beginning", &SearchScope::All).unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].location, Location::new(Book::Genesis, 1, 1));
    }

    #[test]
    fn test_reload_is_rejected_without_duplication() {
        let bible = Bible::new();
        bible.load_str(SAMPLE).unwrap();
        assert_eq!(bible.load_str(SAMPLE), Err(LectioError::AlreadyLoaded));
        assert_eq!(bible.find_all("").unwrap().len(), 2);
    }

    #[test]
    fn test_reload_after_close() {
        let bible = Bible::new();
        bible.load_str(SAMPLE).unwrap();
        bible.close().unwrap();
        bible.load_str("Rev|22|21| Amen.~").unwrap();
        assert_eq!(bible.find_all("").unwrap(), vec!["Amen.".to_string()]);
    }

    #[test]
    fn test_failed_load_leaves_unloaded() {
        let bible = Bible::new();
        let err = bible.load_str("Gen|1|1| ok~\nbroken line\n").unwrap_err();
        assert!(matches!(err, LectioError::LoadFailure { line: 2, .. }));
        assert!(!bible.is_loaded());
        assert_eq!(bible.close(), Err(LectioError::NotLoaded));
        bible.load_str(SAMPLE).unwrap();
    }

    #[test]
    fn test_snapshot_survives_close() {
        let bible = Bible::new();
        bible.load_str(SAMPLE).unwrap();
        let snapshot = bible.corpus().unwrap();
        bible.close().unwrap();
        assert_eq!(snapshot.len(), 2);
    }

    struct FailingSource;

    impl CorpusSource for FailingSource {
        fn name(&self) -> &str {
            "failing"
        }

        fn read(&self) -> Result<std::borrow::Cow<'_, str>> {
            Err(LectioError::SourceUnavailable {
                name: "failing".to_string(),
                reason: "offline".to_string(),
            })
        }
    }

    #[test]
    fn test_unavailable_source() {
        let bible = Bible::new();
        assert!(matches!(
            bible.load(&FailingSource),
            Err(LectioError::SourceUnavailable { .. })
        ));
        assert!(!bible.is_loaded());
    }
}
