//! Diagnostic logging setup.
//!
//! The host calls [`init`] once at startup; services then emit plain
//! `tracing` events without checking any enablement flag themselves.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber for diagnostic output.
///
/// `RUST_LOG` takes precedence when set. Without it, `debug` selects
/// between per-operation output and warnings only. Calling this when a
/// subscriber is already installed is a no-op, so hosts that configure
/// their own tracing can skip it entirely.
pub fn init(debug: bool) {
    let default = if debug {
        "multicat=debug,sqlx=warn"
    } else {
        "multicat=warn,sqlx=warn"
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}
