//! Structured logging for fault traffic
//!
//! Library code logs through the `log` facade; `env_logger` is the backend,
//! configured with `RUST_LOG`:
//! - `RUST_LOG=debug` - every absorbed fault
//! - `RUST_LOG=warn` - faults crossing a region that could not absorb them
//! - `RUST_LOG=error` - faults raised with no region to catch them

use crate::fault::Fault;
use log::{debug, error, info, warn};
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Logging entry points used by the rewriters
pub struct FaultLog;

impl FaultLog {
    /// Initialize logging (call once at application startup)
    pub fn init() {
        INIT_LOGGER.call_once(|| {
            env_logger::Builder::from_default_env()
                .format_timestamp_micros()
                .init();

            info!("Structured logging initialized");
        });
    }

    /// Initialize logging for test environments
    ///
    /// Safe to call from every test
    pub fn init_test() {
        let _ = env_logger::Builder::from_default_env()
            .is_test(true)
            .try_init();
    }

    /// A region converted a fault back into an error return
    pub fn fault_absorbed(fault: &Fault) {
        debug!(
            "Fault absorbed: {:?} (payload_type: {}, raised_at: {})",
            fault.kind(),
            fault.payload_type(),
            fault.location()
        );
    }

    /// A fault reached a region declared for another error type
    pub fn fault_crossed(fault: &Fault, expected: &str) {
        warn!(
            "Fault crossed region: {:?} (payload_type: {}, expected: {}, raised_at: {})",
            fault.kind(),
            fault.payload_type(),
            expected,
            fault.location()
        );
    }

    /// A fault was raised with no region on the stack to catch it
    pub fn fault_unhandled(fault: &Fault) {
        error!("Unhandled fault at {}: {}", fault.location(), fault.message());
    }
}
