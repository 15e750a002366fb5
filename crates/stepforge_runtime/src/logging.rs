//! Log output for the binary.
//!
//! Library crates only emit `tracing` events. The binary installs a
//! subscriber that writes them to stderr, leaving stdout for generated code.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "stepforge=info";

/// Filter used for `--verbose`.
pub const VERBOSE_FILTER: &str = "stepforge=debug";

/// Installs the global subscriber.
///
/// `RUST_LOG` takes precedence over both defaults. Calling this twice is
/// harmless: the second subscriber is not installed.
pub fn init_logging(verbose: bool) {
    let fallback = if verbose { VERBOSE_FILTER } else { DEFAULT_FILTER };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init();

    if installed.is_err() {
        tracing::debug!("logging already initialized");
    }
}
