//! Corpus statistics and canon consistency.
//!
//! `lectio stats` gives a quick summary of what was loaded; `lectio check`
//! compares the corpus record by record against the canon table and exits
//! non-zero when they disagree, which makes it usable as a gate when a new
//! corpus file is dropped in.

use anyhow::{bail, Result};
use lectio_core::{canon, CanonReport, Location};

use crate::config::Config;
use crate::source;

/// How many missing/extra locations `lectio check` lists before eliding.
const REPORT_SAMPLE: usize = 20;

pub fn run_stats(config: &Config) -> Result<()> {
    let bible = source::open_bible(config)?;
    let stats = bible.corpus()?.stats();

    println!("Lectio — Corpus Stats");
    println!("=====================");
    println!();
    println!("  Corpus:      {}", config.corpus.path.display());
    println!("  SHA-256:     {}", stats.digest);
    println!();
    println!("  Books:       {} / 66", stats.books);
    println!(
        "  Chapters:    {} / {}",
        stats.chapters,
        canon::TOTAL_CHAPTERS
    );
    println!("  Verses:      {} / {}", stats.verses, canon::TOTAL_VERSES);
    Ok(())
}

fn print_sample(label: &str, locations: &[Location]) {
    if locations.is_empty() {
        return;
    }
    println!("  {} ({}):", label, locations.len());
    for loc in locations.iter().take(REPORT_SAMPLE) {
        println!("    {}", loc);
    }
    if locations.len() > REPORT_SAMPLE {
        println!("    ... {} more", locations.len() - REPORT_SAMPLE);
    }
}

pub fn print_report(report: &CanonReport) {
    print_sample("missing", &report.missing);
    print_sample("extra", &report.extra);
}

pub fn run_check(config: &Config) -> Result<()> {
    let bible = source::open_bible(config)?;
    let corpus = bible.corpus()?;
    let report = corpus.check_canon();

    if report.is_consistent() {
        println!("ok: {} verses match the canon", corpus.len());
        return Ok(());
    }

    print_report(&report);
    bail!(
        "corpus differs from canon: {} missing, {} extra",
        report.missing.len(),
        report.extra.len()
    );
}
