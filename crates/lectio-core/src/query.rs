//! Query algorithms over a [`Corpus`].
//!
//! These functions know nothing about load state; [`Bible`](crate::engine::Bible)
//! wraps them with the loaded/unloaded lifecycle. Every call returns a fresh
//! result vector, so concurrent callers never share a buffer.
//!
//! | Function | Validation | Cost |
//! |----------|------------|------|
//! | [`get_verse`] | chapter, then verse | O(1) |
//! | [`get_chapter`] | chapter | O(chapter length) |
//! | [`find`] | none | O(corpus) |
//! | [`search`] | none | O(corpus) |

use crate::corpus::{Corpus, Verse};
use crate::error::{LectioError, Result};
use crate::reference::{ChapterLocation, Location};
use crate::scope::SearchScope;

/// Text of the verse at `location`.
///
/// Fails with `ChapterOutOfRange`/`VerseOutOfRange` for addresses outside
/// the canon, and `VerseNotFound` when the address is valid but the corpus
/// has no record for it.
pub fn get_verse(corpus: &Corpus, location: &Location) -> Result<String> {
    location.validate()?;
    corpus
        .verse(location)
        .map(|v| v.text.clone())
        .ok_or(LectioError::VerseNotFound(*location))
}

/// Texts of every verse in a chapter, in verse order.
///
/// With `zero_based == false`, index 0 is an empty placeholder so that
/// `result[k]` is verse `k`. With `zero_based == true`, `result[0]` is
/// verse 1. A valid chapter the corpus has no records for yields just the
/// placeholder (or nothing).
pub fn get_chapter(
    corpus: &Corpus,
    location: &ChapterLocation,
    zero_based: bool,
) -> Result<Vec<String>> {
    location.validate()?;

    let mut texts = Vec::new();
    if !zero_based {
        texts.push(String::new());
    }
    if let Some(verses) = corpus.chapter(location) {
        texts.extend(verses.map(|v| v.text.clone()));
    }
    Ok(texts)
}

fn matching<'a>(
    corpus: &'a Corpus,
    query: &'a str,
    scope: &'a SearchScope,
) -> impl Iterator<Item = &'a Verse> {
    corpus
        .verses()
        .iter()
        .filter(move |v| scope.includes(v.location.book) && v.text.contains(query))
}

/// Texts of verses within `scope` whose text contains `query`, in corpus
/// order. Matching is a literal, case-sensitive substring test; the empty
/// query matches every verse in scope.
pub fn find(corpus: &Corpus, query: &str, scope: &SearchScope) -> Vec<String> {
    let hits: Vec<String> = matching(corpus, query, scope)
        .map(|v| v.text.clone())
        .collect();
    tracing::debug!(query, ?scope, hits = hits.len(), "find");
    hits
}

/// Same matching as [`find`], returning each verse with its location.
pub fn search(corpus: &Corpus, query: &str, scope: &SearchScope) -> Vec<Verse> {
    let hits: Vec<Verse> = matching(corpus, query, scope).cloned().collect();
    tracing::debug!(query, ?scope, hits = hits.len(), "search");
    hits
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::book::Book;
    use crate::scope::Scope;

    fn corpus() -> Corpus {
        Corpus::parse(
            "\
Gen|1|1| In the beginning God created the heaven and the earth.~
Gen|1|2| And the earth was without form, and void.~
Gen|1|3| And God said, Let there be light: and there was light.~
Mat|5|44| But I say unto you, Love your enemies.~
Joh|3|16| For God so loved the world.~
Act|1|1| The former treatise have I made.~
Jo1|4|8| He that loveth not knoweth not God; for God is love.~
",
        )
        .unwrap()
    }

    #[test]
    fn test_get_verse() {
        let c = corpus();
        let text = get_verse(&c, &Location::new(Book::John, 3, 16)).unwrap();
        assert_eq!(text, "For God so loved the world.");
    }

    #[test]
    fn test_get_verse_validates_first() {
        let c = corpus();
        assert!(matches!(
            get_verse(&c, &Location::new(Book::Genesis, 0, 1)),
            Err(LectioError::ChapterOutOfRange { .. })
        ));
        assert!(matches!(
            get_verse(&c, &Location::new(Book::Genesis, 1, 32)),
            Err(LectioError::VerseOutOfRange { .. })
        ));
    }

    #[test]
    fn test_get_verse_gap_is_not_found() {
        let c = corpus();
        let loc = Location::new(Book::Genesis, 1, 4);
        assert_eq!(get_verse(&c, &loc), Err(LectioError::VerseNotFound(loc)));
    }

    #[test]
    fn test_get_chapter_one_based() {
        let c = corpus();
        let ch = get_chapter(&c, &ChapterLocation::new(Book::Genesis, 1), false).unwrap();
        assert_eq!(ch.len(), 4);
        assert_eq!(ch[0], "");
        assert!(ch[1].starts_with("In the beginning"));
        assert!(ch[3].ends_with("there was light."));
    }

    #[test]
    fn test_get_chapter_zero_based() {
        let c = corpus();
        let ch = get_chapter(&c, &ChapterLocation::new(Book::Genesis, 1), true).unwrap();
        assert_eq!(ch.len(), 3);
        assert!(ch[0].starts_with("In the beginning"));
    }

    #[test]
    fn test_get_chapter_rejects_bad_chapter() {
        let c = corpus();
        assert!(matches!(
            get_chapter(&c, &ChapterLocation::new(Book::Genesis, 51), false),
            Err(LectioError::ChapterOutOfRange { .. })
        ));
        assert!(matches!(
            get_chapter(&c, &ChapterLocation::new(Book::Obadiah, 0), true),
            Err(LectioError::ChapterOutOfRange { .. })
        ));
    }

    #[test]
    fn test_find_is_case_sensitive_substring() {
        let c = corpus();
        let hits = find(&c, "love", &SearchScope::All);
        assert_eq!(
            hits,
            vec![
                "For God so loved the world.".to_string(),
                "He that loveth not knoweth not God; for God is love.".to_string(),
            ]
        );
        let hits = find(&c, "Love", &SearchScope::All);
        assert_eq!(hits, vec!["But I say unto you, Love your enemies.".to_string()]);
    }

    #[test]
    fn test_find_matches_text_not_record_prefix() {
        let c = corpus();
        assert!(find(&c, "Gen", &SearchScope::All).is_empty());
        assert!(find(&c, "|", &SearchScope::All).is_empty());
    }

    #[test]
    fn test_empty_query_matches_everything_in_scope() {
        let c = corpus();
        assert_eq!(find(&c, "", &SearchScope::All).len(), c.len());
        assert_eq!(find(&c, "", &SearchScope::Book(Book::Genesis)).len(), 3);
        assert_eq!(find(&c, "", &SearchScope::Scope(Scope::TheActs)).len(), 1);
    }

    #[test]
    fn test_search_scoped() {
        let c = corpus();
        let hits = search(&c, "love", &SearchScope::Scope(Scope::TheGospels));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].location, Location::new(Book::John, 3, 16));

        let hits = search(&c, "God", &SearchScope::Book(Book::FirstJohn));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].location, Location::new(Book::FirstJohn, 4, 8));
    }

    #[test]
    fn test_results_are_independent() {
        let c = corpus();
        let mut first = find(&c, "God", &SearchScope::All);
        let second = find(&c, "light", &SearchScope::All);
        first.clear();
        assert_eq!(second.len(), 1);
        assert_eq!(find(&c, "God", &SearchScope::All).len(), 4);
    }
}
