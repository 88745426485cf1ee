use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// Forwards domain log lines to `tracing` under a single target.
pub struct TracingLogger;

const TARGET: &str = "agricore::catalog";

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: TARGET, "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: TARGET, "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: TARGET, "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: TARGET, "{}", message);
    }
}
