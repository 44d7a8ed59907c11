//! Diagnostic logging to stderr.
//!
//! Quiet by default (`warn`). `RUST_LOG` takes precedence over the level
//! passed on the command line:
//! ```bash
//! RUST_LOG=debug greeter
//! summer --log-level debug 1 2 3
//! ```

use std::sync::Once;

use anyhow::{Context, Result};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: Once = Once::new();

pub const DEFAULT_LEVEL: &str = "warn";

/// Filter for `level`, unless `RUST_LOG` is set
fn build_filter(level: &str) -> Result<EnvFilter> {
    if std::env::var("RUST_LOG").is_ok() {
        Ok(EnvFilter::from_default_env())
    } else {
        parse_level(level)
    }
}

/// Parse a level or directive list such as `debug` or `snippets=trace`
pub fn parse_level(level: &str) -> Result<EnvFilter> {
    EnvFilter::try_new(level).with_context(|| format!("invalid log level '{level}'"))
}

/// Initialize logging. Only the first call takes effect.
pub fn init(level: &str) -> Result<()> {
    let filter = build_filter(level)?;
    INIT.call_once(|| {
        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .without_time()
            .with_filter(filter);

        tracing_subscriber::registry().with(fmt_layer).init();
    });
    Ok(())
}
