//! Logging setup for the command-line tool.
//!
//! Library code emits `tracing` events (and `log` records from the config
//! loader, which the subscriber also captures). Nothing is printed until
//! [`init_logging`] installs a subscriber, so embedding the library stays
//! silent by default.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter directive for a `-v` count.
pub fn verbosity_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "bindcheck=warn",
        1 => "bindcheck=info",
        2 => "bindcheck=debug",
        _ => "bindcheck=trace",
    }
}

/// Install a stderr subscriber. `RUST_LOG` wins over the verbosity flag.
///
/// Calling this twice is harmless; the second call keeps the first subscriber.
pub fn init_logging(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity_directive(verbosity)));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init();
}
