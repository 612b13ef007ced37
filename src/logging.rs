//! Diagnostic logging.
//!
//! Off unless `--verbose` is given. HTTP requests and lifecycle anomalies are
//! logged at debug/warn level to stderr.

use tracing::Level;
use tracing_subscriber::fmt;

pub fn init(verbose: bool) {
    if !verbose {
        return;
    }
    let _ = fmt()
        .with_max_level(Level::DEBUG)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .try_init();
}
