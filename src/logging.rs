//! Logger setup for binaries and tests.

use env_logger::{Builder, Env};
use log::LevelFilter;

/// Initializes the global logger.
///
/// When `verbose` is `true`, debug messages from this crate are printed.
/// Otherwise only info level and above are shown. `RUST_LOG` overrides both,
/// e.g. `RUST_LOG=sidescroll=trace` to follow every frame.
pub fn init(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let env = Env::default().default_filter_or(level.to_string());
    let mut builder = Builder::from_env(env);
    builder.format_timestamp_millis();

    // `try_init` only fails if a logger was already set; repeated calls from
    // tests are expected.
    if builder.try_init().is_err() {
        log::trace!("logger already initialised");
    }
}
