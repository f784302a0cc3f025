//! File-backed corpus source.
//!
//! Reads the configured corpus file as UTF-8 and hands it to the core
//! index. Every command that needs verse text goes through [`open_bible`].

use std::borrow::Cow;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use lectio_core::{Bible, CorpusSource, LectioError};

use crate::config::Config;

/// A corpus stored as a single text file on disk.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
    label: String,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let label = path.display().to_string();
        Self { path, label }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CorpusSource for FileSource {
    fn name(&self) -> &str {
        &self.label
    }

    fn read(&self) -> lectio_core::Result<Cow<'_, str>> {
        std::fs::read_to_string(&self.path)
            .map(Cow::Owned)
            .map_err(|e| LectioError::SourceUnavailable {
                name: self.label.clone(),
                reason: e.to_string(),
            })
    }
}

/// Load the corpus named by `config` into a fresh [`Bible`].
pub fn open_bible(config: &Config) -> Result<Bible> {
    let source = FileSource::new(&config.corpus.path);
    let bible = Bible::new();
    bible
        .load(&source)
        .with_context(|| format!("Failed to load corpus: {}", source.path().display()))?;
    Ok(bible)
}
