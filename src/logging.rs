//! Tracing setup for the binary
//!
//! The library only emits `tracing` events. The binary installs a subscriber
//! once at startup; `RUST_LOG` replaces the default filter when set.

use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

/// Filter used when `RUST_LOG` is unset
pub const DEFAULT_DIRECTIVE: &str = "budget_tracker=warn";

static TRACING_INIT: Once = Once::new();

/// Install the stderr subscriber. Safe to call more than once.
pub fn init() {
    TRACING_INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

        // Another subscriber may already be installed, e.g. by a test harness
        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_idempotent() {
        init();
        init();
        tracing::warn!("logging initialised twice without panicking");
    }
}
