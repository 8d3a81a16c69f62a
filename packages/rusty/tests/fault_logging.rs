//! Log events emitted while faults move through regions

use log::{Level, LevelFilter, Log, Metadata, Record};
use rusty::{catch, catch_effect, err, unwrap, Effect, Result};
use std::sync::Mutex;

static RECORDS: Mutex<Vec<(Level, String)>> = Mutex::new(Vec::new());

struct CaptureLogger;

impl Log for CaptureLogger {
    fn enabled(&self, _metadata: &Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &Record<'_>) {
        if let Ok(mut records) = RECORDS.lock() {
            records.push((record.level(), record.args().to_string()));
        }
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SyncError {
    Conflict,
}

fn captured(level: Level, needle: &str) -> bool {
    RECORDS
        .lock()
        .map(|records| {
            records
                .iter()
                .any(|(l, message)| *l == level && message.contains(needle))
        })
        .unwrap_or(false)
}

#[test]
fn test_fault_crossing_a_region_of_another_kind_is_logged() {
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(LevelFilter::Trace);

    let outcome = catch(|| -> Result<(), SyncError> {
        let _effect = catch_effect(|| -> Effect<SyncError> {
            let failed: Result<(), SyncError> = err(SyncError::Conflict);
            unwrap(failed);
            Effect::Success
        });
        rusty::ok(())
    });

    assert_eq!(outcome, err(SyncError::Conflict));
    assert!(captured(Level::Warn, "Fault crossed region: Unwrap"));
    assert!(captured(Level::Debug, "Fault absorbed: Unwrap"));
}
