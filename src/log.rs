// src/log.rs
use tracing::Level;

#[cfg(debug_assertions)]
const MAX_LEVEL: Level = Level::DEBUG;
#[cfg(not(debug_assertions))]
const MAX_LEVEL: Level = Level::INFO;

/// Install the stderr subscriber. Safe to call more than once; only the
/// first call wins.
pub fn init() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(MAX_LEVEL)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
