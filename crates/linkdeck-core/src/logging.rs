//! Console logging shared by the desktop app and the CLI.

use tracing_subscriber::EnvFilter;

/// Map a `-v` count onto a default filter directive
pub fn filter_for_verbosity(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global fmt subscriber, writing to stderr.
///
/// `RUST_LOG` takes precedence over the verbosity count. Calling this twice
/// is harmless; the second subscriber is ignored.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_for_verbosity(verbosity)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
