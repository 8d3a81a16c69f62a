//! Raised faults and the regions that absorb them
//!
//! A [`Fault`] is the value that travels up the stack when `unwrap` meets an
//! `Err` (or `success` meets a `Failure`). It unwinds like a panic and is
//! turned back into a plain return value by the nearest rewriter region.

pub mod display;
pub mod raise;
pub mod region;
pub mod types;

pub use types::{Fault, FaultKind, PayloadMismatch};
