//! Where the raw corpus text comes from.
//!
//! The [`CorpusSource`] trait is the seam between the index and whatever
//! holds the resource bytes: an `include_str!` blob, a file on disk, a
//! download. The core ships only [`StaticSource`]; the application crate
//! provides a file-backed implementation.

use std::borrow::Cow;

use crate::error::Result;

/// A provider of raw corpus text in the `code|chapter|verse| text~` format.
///
/// Implementations must be `Send + Sync` so a loaded [`Bible`](crate::engine::Bible)
/// can be shared across threads together with its source.
pub trait CorpusSource: Send + Sync {
    /// Short label used in logs and errors (e.g. a file path).
    fn name(&self) -> &str;

    /// Produce the full resource text.
    ///
    /// Should fail with [`LectioError::SourceUnavailable`](crate::error::LectioError::SourceUnavailable)
    /// when the text cannot be obtained at all.
    fn read(&self) -> Result<Cow<'_, str>>;
}

/// Corpus text already held in memory.
///
/// ```rust
/// use lectio_core::source::{CorpusSource, StaticSource};
///
/// let source = StaticSource::new("inline", "Gen|1|1| In the beginning.~");
/// assert_eq!(source.read().unwrap(), "Gen|1|1| In the beginning.~");
/// ```
#[derive(Debug, Clone)]
pub struct StaticSource {
    name: String,
    text: Cow<'static, str>,
}

impl StaticSource {
    pub fn new(name: impl Into<String>, text: impl Into<Cow<'static, str>>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }
}

impl CorpusSource for StaticSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn read(&self) -> Result<Cow<'_, str>> {
        Ok(Cow::Borrowed(self.text.as_ref()))
    }
}
