//! Per-thread tracking of active rewriter regions
//!
//! Faults raised inside a region are control flow and unwind quietly.
//! Faults raised outside every region are programmer errors and go through
//! the panic hook. The depth is thread-local and maintained by a drop guard,
//! so it is restored on normal return, caught fault and propagated panic
//! alike.

use std::cell::Cell;
use std::marker::PhantomData;

thread_local! {
    static DEPTH: Cell<usize> = const { Cell::new(0) };
}

/// Guard held for the lifetime of one catching region
pub(crate) struct Region {
    // Tied to the thread whose counter it bumped
    _thread: PhantomData<*const ()>,
}

impl Region {
    pub(crate) fn enter() -> Self {
        let _ = DEPTH.try_with(|depth| depth.set(depth.get() + 1));
        Self {
            _thread: PhantomData,
        }
    }
}

impl Drop for Region {
    fn drop(&mut self) {
        let _ = DEPTH.try_with(|depth| depth.set(depth.get().saturating_sub(1)));
    }
}

/// Number of catching regions active on the current thread
#[must_use]
pub fn depth() -> usize {
    DEPTH.try_with(Cell::get).unwrap_or(0)
}

/// Whether a fault raised now would be caught by some region on this thread
#[must_use]
pub fn active() -> bool {
    depth() > 0
}
