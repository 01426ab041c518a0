//! Logging bootstrap.
//!
//! The engine only emits `tracing` events; nothing is printed unless the
//! host installs a subscriber. These helpers install the usual one: an
//! `EnvFilter` read from `RUST_LOG` (default `info`) and a fmt layer.

use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_FILTER: &str = "info";

/// Installs the global subscriber.
///
/// # Panics
/// If a global subscriber is already set. Use [`try_init`] when that can
/// happen (tests, embedding).
///
/// # Example
///
/// ```no_run
/// impostor::logging::init();
/// tracing::info!("game starting");
/// ```
pub fn init() {
    registry().init();
    tracing::debug!("logging initialized");
}

/// Installs the global subscriber unless one is already set.
pub fn try_init() -> Result<(), TryInitError> {
    registry().try_init()
}

fn registry() -> impl SubscriberInitExt {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_file(false)
        .with_line_number(false);

    tracing_subscriber::registry().with(env_filter).with(fmt_layer)
}
