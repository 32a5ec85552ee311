//! Observability and logging setup.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initializes tracing with an env-filter and a fmt layer.
///
/// Intended for host binaries embedding the pipeline; honors `RUST_LOG` and
/// defaults to debug-level output for this crate. Safe to call more than
/// once (later calls are no-ops), so tests can use it freely.
pub fn init_tracing() {
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lead_enrichment=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}
