//! TOML configuration for the `lectio` binary.
//!
//! ```toml
//! [corpus]
//! path = "./data/kjv.dat"
//!
//! [search]
//! limit = 50
//!
//! [chapters]
//! zero_based = false
//! ```
//!
//! Only `[corpus] path` is required. A relative corpus path is resolved
//! against the directory containing the config file, so a config can be
//! shipped next to its data.

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub corpus: CorpusConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub chapters: ChaptersConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CorpusConfig {
    pub path: PathBuf,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct SearchConfig {
    /// Default result cap for `find`/`search`. Unlimited when absent.
    #[serde(default)]
    pub limit: Option<usize>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct ChaptersConfig {
    #[serde(default)]
    pub zero_based: bool,
}

pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let mut config: Config =
        toml::from_str(&content).with_context(|| "Failed to parse config file")?;

    if config.search.limit == Some(0) {
        bail!("search.limit must be >= 1");
    }

    if config.corpus.path.as_os_str().is_empty() {
        bail!("corpus.path must not be empty");
    }

    if config.corpus.path.is_relative() {
        let base = path.parent().unwrap_or_else(|| Path::new("."));
        config.corpus.path = base.join(&config.corpus.path);
    }

    tracing::debug!(corpus = %config.corpus.path.display(), "config loaded");
    Ok(config)
}
