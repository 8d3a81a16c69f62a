//! Raising faults and catching them again

use super::region::{self, Region};
use super::types::Fault;
use crate::logging::FaultLog;
use std::panic::{self, AssertUnwindSafe};

/// Raise `fault`, unwinding to the nearest catching region
///
/// Inside a region the fault unwinds without invoking the panic hook.
/// Outside every region it is logged, written to stderr and raised with
/// `panic_any`, so it surfaces like any other panic at the caller's line.
#[track_caller]
pub fn raise(fault: Fault) -> ! {
    if region::active() {
        panic::resume_unwind(Box::new(fault))
    }
    FaultLog::fault_unhandled(&fault);
    // The default hook can only print `Box<dyn Any>` for a Fault payload
    eprintln!("unhandled fault at {}: {}", fault.location(), fault.message());
    panic::panic_any(fault)
}

/// Run `body` inside a catching region
///
/// Returns the fault if `body` raised one. Panics that are not faults are
/// resumed unchanged.
pub(crate) fn catch_fault<R, F>(body: F) -> std::result::Result<R, Fault>
where
    F: FnOnce() -> R,
{
    let outcome = {
        let _region = Region::enter();
        panic::catch_unwind(AssertUnwindSafe(body))
    };

    match outcome {
        Ok(value) => Ok(value),
        Err(payload) => match payload.downcast::<Fault>() {
            Ok(fault) => Err(*fault),
            Err(other) => panic::resume_unwind(other),
        },
    }
}

impl Fault {
    /// Run `body`, returning any fault it raises instead of unwinding
    ///
    /// For callers that want to inspect faults without a rewriter. Panics
    /// that are not faults pass through unchanged.
    ///
    /// # Errors
    ///
    /// Returns the raised [`Fault`] when `body` unwrapped an error.
    pub fn catch<R, F>(body: F) -> std::result::Result<R, Fault>
    where
        F: FnOnce() -> R,
    {
        catch_fault(body)
    }

    /// Raise this fault from the current location
    #[track_caller]
    pub fn raise(self) -> ! {
        raise(self)
    }
}
