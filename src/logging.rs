//! Diagnostic logging on stderr.

use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Default level for a given `-v` count: warn, info, then debug.
#[must_use]
pub const fn level_for_verbosity(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    }
}

/// Install the global subscriber. `RUST_LOG` directives are honored on top
/// of the verbosity level. Calling this more than once is a no-op.
pub fn init(verbose: u8) {
    let filter = EnvFilter::from_default_env().add_directive(level_for_verbosity(verbose).into());
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(filter)
        .try_init();
}
