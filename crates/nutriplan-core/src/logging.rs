//! Tracing subscriber setup for hosts that don't install their own.

use std::io;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_FILTER: &str = "nutriplan_core=info";

/// Install a global fmt subscriber writing to stderr.
///
/// `filter` uses `EnvFilter` directive syntax (e.g. `"nutriplan_core=debug"`).
/// An empty filter falls back to `RUST_LOG`, then to `nutriplan_core=info`;
/// an unparsable one falls back to the default. Returns `false` when a global
/// subscriber was already installed, so repeated calls are harmless.
pub fn init_logging(filter: &str, json: bool) -> bool {
    let env_filter = if filter.trim().is_empty() {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    } else {
        EnvFilter::try_new(filter.trim()).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    };

    let registry = tracing_subscriber::registry().with(env_filter);

    let installed = if json {
        registry
            .with(fmt::layer().with_target(true).with_writer(io::stderr).json())
            .try_init()
    } else {
        registry
            .with(fmt::layer().with_target(true).with_writer(io::stderr))
            .try_init()
    };

    installed.is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_idempotent() {
        // Whichever call wins, the second must not panic and must report false
        let _ = init_logging("nutriplan_core=debug", false);
        assert!(!init_logging("not a == valid filter", true));
    }
}
