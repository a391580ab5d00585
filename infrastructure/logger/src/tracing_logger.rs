use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "JewelryApi -- ", "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "JewelryApi -- ", "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "JewelryApi -- ", "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "JewelryApi -- ", "{}", message);
    }
}
