//! # Lectio CLI (`lectio`)
//!
//! ## Usage
//!
//! ```bash
//! lectio --config ./config/lectio.toml <command>
//! ```
//!
//! ## Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `lectio verse <REF>` | Print one verse |
//! | `lectio chapter <REF>` | Print a chapter, one numbered verse per line |
//! | `lectio find <QUERY>` | Print the text of every matching verse |
//! | `lectio search <QUERY>` | Print matching verses with their references |
//! | `lectio books` | List the 66 books with codes and counts |
//! | `lectio scopes` | List the named search scopes |
//! | `lectio parse <REF>` | Normalise and validate a reference |
//! | `lectio stats` | Corpus counts and digest |
//! | `lectio check` | Compare the corpus against the canon table |
//!
//! ## Examples
//!
//! ```bash
//! lectio verse "1 John 4:8"
//! lectio chapter "Psalms 23"
//! lectio chapter "Gen 1" --raw --zero-based
//! lectio find "begotten" --book John
//! lectio search love --scope The_Gospels --json
//! LECTIO_LOG=lectio_core=debug lectio stats
//! ```

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use lectio::{catalog, config, get, logging, search, stats};

/// Lectio — reference lookup and scoped search over the King James Bible.
///
/// Commands that read verse text need a config file naming the corpus.
/// See `config/lectio.example.toml`.
#[derive(Parser)]
#[command(
    name = "lectio",
    about = "Lectio — reference lookup and scoped search over the King James Bible",
    version
)]
struct Cli {
    /// Path to configuration file (TOML).
    ///
    /// Defaults to `./config/lectio.toml`.
    #[arg(long, global = true, default_value = "./config/lectio.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

/// Arguments shared by `find` and `search`.
#[derive(clap::Args)]
struct SearchArgs {
    /// Literal, case-sensitive substring. An empty query matches every verse.
    query: String,

    /// Restrict to a named scope (see `lectio scopes`), e.g. `The_Gospels`.
    #[arg(long, conflicts_with = "book")]
    scope: Option<String>,

    /// Restrict to a single book, e.g. `John` or `1 Samuel`.
    #[arg(long)]
    book: Option<String>,

    /// Maximum number of results. Overrides `[search] limit`.
    #[arg(long)]
    limit: Option<usize>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the text of one verse, e.g. `John 3:16`.
    Verse {
        reference: String,

        /// Print `{location, text}` as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Print every verse of a chapter, e.g. `Psalms 23`.
    Chapter {
        reference: String,

        /// Index 0 is verse 1 instead of an empty placeholder. Needs `--raw`.
        #[arg(long, requires = "raw")]
        zero_based: bool,

        /// Print the indexed text vector as JSON.
        #[arg(long)]
        raw: bool,
    },

    /// Print the text of every verse containing the query.
    Find(SearchArgs),

    /// Print every verse containing the query, with its reference.
    Search {
        #[command(flatten)]
        args: SearchArgs,

        /// Print results as a JSON array.
        #[arg(long)]
        json: bool,
    },

    /// List the books of the canon.
    Books,

    /// List the named search scopes.
    Scopes,

    /// Normalise a verse or chapter reference and check it against the canon.
    Parse { reference: String },

    /// Show corpus statistics.
    Stats,

    /// Compare the corpus against the canon table; exits non-zero on any difference.
    Check,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init_tracing()?;

    // Commands that don't require config
    match &cli.command {
        Commands::Books => return catalog::run_books(),
        Commands::Scopes => return catalog::run_scopes(),
        Commands::Parse { reference } => return catalog::run_parse(reference),
        _ => {}
    }

    let cfg = config::load_config(&cli.config)?;

    match cli.command {
        Commands::Verse { reference, json } => {
            get::run_verse(&cfg, &reference, json)?;
        }
        Commands::Chapter {
            reference,
            zero_based,
            raw,
        } => {
            get::run_chapter(&cfg, &reference, zero_based, raw)?;
        }
        Commands::Find(args) => {
            let scope = search::select_scope(args.scope.as_deref(), args.book.as_deref())?;
            search::run_find(&cfg, &args.query, &scope, args.limit)?;
        }
        Commands::Search { args, json } => {
            let scope = search::select_scope(args.scope.as_deref(), args.book.as_deref())?;
            search::run_search(&cfg, &args.query, &scope, args.limit, json)?;
        }
        Commands::Stats => {
            stats::run_stats(&cfg)?;
        }
        Commands::Check => {
            stats::run_check(&cfg)?;
        }
        Commands::Books | Commands::Scopes | Commands::Parse { .. } => {
            // Handled above (before config loading)
            unreachable!()
        }
    }

    Ok(())
}
