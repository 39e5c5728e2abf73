//! Log subscriber setup.

use tracing_subscriber::EnvFilter;

/// Install the fmt subscriber.
///
/// `RUST_LOG` wins when set; otherwise the level is `debug` with `verbose`
/// and `info` without.
pub fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
