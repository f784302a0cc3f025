//! # Lectio
//!
//! Command-line access to the King James Bible: resolve a reference to its
//! verse text, print a chapter, or search the text within a named group of
//! books.
//!
//! The reference rules, canon table, scopes and query engine live in the
//! I/O-free [`lectio_core`] crate. This crate adds the parts that touch the
//! outside world: configuration, the corpus file, logging, and the CLI
//! commands.
//!
//! ```text
//! ┌──────────────┐   ┌──────────────┐   ┌──────────────────┐
//! │ lectio.toml  │──▶│  FileSource  │──▶│ lectio_core::    │
//! │ [corpus]     │   │  (kjv.dat)   │   │ Bible (index)    │
//! └──────────────┘   └──────────────┘   └────────┬─────────┘
//!                                                │
//!                                 verse / chapter / find / search
//!                                                ▼
//!                                          ┌──────────┐
//!                                          │   CLI    │
//!                                          │ (lectio) │
//!                                          └──────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```bash
//! lectio verse "John 3:16"
//! lectio chapter "Psalms 23"
//! lectio search love --scope The_Gospels --limit 10
//! lectio check
//! ```
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | TOML configuration parsing |
//! | [`source`] | File-backed corpus source |
//! | [`logging`] | `tracing` subscriber setup |
//! | [`get`] | Verse and chapter retrieval |
//! | [`search`] | Scoped substring search |
//! | [`catalog`] | Book and scope listings, reference parsing |
//! | [`stats`] | Corpus statistics and canon check |

pub mod catalog;
pub mod config;
pub mod get;
pub mod logging;
pub mod search;
pub mod source;
pub mod stats;
