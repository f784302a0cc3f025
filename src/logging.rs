//! Diagnostic logging for the CLI.
//!
//! Events go to stderr so stdout stays clean for verse text and JSON.
//! The filter comes from `LECTIO_LOG` (e.g. `LECTIO_LOG=lectio_core=debug`)
//! and defaults to `warn`.

use anyhow::Result;
use tracing_subscriber::{fmt, layer::SubscriberExt, EnvFilter, Registry};

pub const LOG_ENV: &str = "LECTIO_LOG";

pub fn init_tracing() -> Result<()> {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true);
    let subscriber = Registry::default().with(filter).with(fmt_layer);
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}
