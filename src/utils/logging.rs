use std::io;
use tracing::Level;

/// Install the fmt subscriber on stderr; stdout is reserved for the JSON document.
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(Level::INFO)
        .with_target(false)
        .init();
}
