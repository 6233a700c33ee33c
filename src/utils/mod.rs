pub mod paths;
pub mod persistence;

use std::sync::Once;

use tracing_subscriber::EnvFilter;

static TRACING_INIT: Once = Once::new();

const DEFAULT_DIRECTIVE: &str = "pocket_ledger=info";

/// Initializes the global tracing subscriber with sensible defaults.
///
/// `RUST_LOG` replaces the default `pocket_ledger=info` filter when set.
/// Events go to stderr so command output on stdout stays machine-readable.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();
        let _ = tracing_subscriber::fmt()
            .with_env_filter(build_filter(directives.as_deref()))
            .with_writer(std::io::stderr)
            .try_init();
    });
}

/// Filter for `directives`, falling back to the default when absent or unparsable.
fn build_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .filter(|raw| !raw.trim().is_empty())
        .and_then(|raw| EnvFilter::try_new(raw).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_DIRECTIVE))
}
