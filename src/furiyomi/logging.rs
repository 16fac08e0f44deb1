//! Diagnostics on stderr through `tracing`.
//!
//! The library only emits events; the binary installs the subscriber once at
//! startup. `RUST_LOG` overrides the level picked from the verbosity flag,
//! e.g. `RUST_LOG=furiyomi::analyzer=trace` to see every analyzer round trip.

use crate::error::Result;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

/// Filter directive for a `-v` count.
pub fn level_for_verbosity(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Installs the global stderr subscriber.
pub fn init_logging(verbosity: u8) -> Result<()> {
    let level = level_for_verbosity(verbosity);
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = tracing_subscriber::registry().with(env_filter).with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_file(false)
            .with_line_number(false)
            .without_time(),
    );
    tracing::subscriber::set_global_default(subscriber)?;

    tracing::debug!(level, "logging initialized");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_raises_level() {
        assert_eq!(level_for_verbosity(0), "warn");
        assert_eq!(level_for_verbosity(1), "info");
        assert_eq!(level_for_verbosity(2), "debug");
        assert_eq!(level_for_verbosity(9), "trace");
    }
}
