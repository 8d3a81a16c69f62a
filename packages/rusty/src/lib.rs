//! Explicit results with a short-circuiting unwrap
//!
//! This crate provides:
//! - [`Result`], a two-variant container consumed by matching or unwrapping
//! - [`unwrap`], which returns the success payload or raises a [`Fault`]
//! - [`catch`], [`rewrap`] and [`rewrap!`], which turn a raised fault back
//!   into the enclosing function's own `Err` return value
//! - [`Effect`] with [`success`] and [`catch_effect`], the same pair for
//!   operations that return no value
//!
//! Expected failures travel as plain `Err` values. A fault is the shortcut
//! for code that would rather not branch on every step: inside a rewriter it
//! is ordinary control flow, outside one it is a loud programmer error.

pub mod effect;
pub mod fault;
pub mod handlers;
pub mod logging;
#[doc(hidden)]
pub mod macros;
pub mod result;
pub mod rewrap;
pub mod unwrap;

pub use effect::{failure, success, success_or_handle, Effect};
pub use fault::{Fault, FaultKind, PayloadMismatch};
pub use handlers::{ErrHandlers, FailureHandlers};
pub use logging::FaultLog;
pub use result::{err, ok, Result, Tag};
pub use rewrap::{
    catch, catch_effect, catch_effect_strict, catch_strict, rewrap, rewrap_effect,
    rewrap_effect_strict, rewrap_strict,
};
pub use unwrap::{unwrap, unwrap_or_handle};

/// Everything needed to write rewritten functions
///
/// Importing the prelude replaces the standard `Result` in scope.
pub mod prelude {
    pub use crate::{
        catch, catch_effect, err, failure, ok, rewrap, rewrap_effect, success, unwrap, Effect,
        Fault, Result,
    };
}
