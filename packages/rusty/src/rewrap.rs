//! Fault-to-result rewriting
//!
//! A rewriter runs a function inside a catching region. A [`Fault`] raised
//! by `unwrap` anywhere below it, whose payload is the function's own error
//! type, becomes that function's `Err` return value. Everything else keeps
//! unwinding:
//! - faults carrying another payload type
//! - faults raised by `success` (those belong to effect rewriters)
//! - ordinary panics
//!
//! ```
//! use rusty::{err, ok, rewrap, unwrap, Result};
//!
//! #[derive(Debug, Clone, Copy, PartialEq)]
//! enum MathError {
//!     DivideByZero,
//! }
//!
//! fn divide(a: i32, b: i32) -> Result<i32, MathError> {
//!     if b == 0 {
//!         err(MathError::DivideByZero)
//!     } else {
//!         ok(a / b)
//!     }
//! }
//!
//! let safe_divide = rewrap(|(a, b): (i32, i32)| -> Result<i32, MathError> {
//!     ok(unwrap(divide(a, b)) * 2)
//! });
//! assert_eq!(safe_divide((10, 2)), ok(10));
//! assert_eq!(safe_divide((10, 0)), err(MathError::DivideByZero));
//! ```

use crate::effect::Effect;
use crate::fault::raise::{catch_fault, raise};
use crate::fault::{Fault, FaultKind};
use crate::logging::FaultLog;
use crate::result::Result;

/// How a region treats a fault whose payload is not its error type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mismatch {
    /// Let the fault keep unwinding
    Propagate,
    /// Replace the fault with a panic naming both types
    Defect,
}

/// Run `body` in a region that turns its own faults into `Err`
///
/// A result returned normally is passed through untouched.
pub fn catch<T, E, F>(body: F) -> Result<T, E>
where
    F: FnOnce() -> Result<T, E>,
    E: 'static,
{
    absorb::<_, E, _>(FaultKind::Unwrap, Mismatch::Propagate, body, Result::Err)
}

/// Like [`catch`], but a fault carrying a foreign payload is a defect
///
/// # Panics
///
/// Panics when `body` raises an unwrap fault whose payload is not an `E`.
pub fn catch_strict<T, E, F>(body: F) -> Result<T, E>
where
    F: FnOnce() -> Result<T, E>,
    E: 'static,
{
    absorb::<_, E, _>(FaultKind::Unwrap, Mismatch::Defect, body, Result::Err)
}

/// Wrap `f` so each call runs inside [`catch`]
///
/// Functions of several arguments take them as a tuple; for a named
/// function with its exact signature use [`crate::rewrap!`].
pub fn rewrap<A, T, E, F>(f: F) -> impl Fn(A) -> Result<T, E>
where
    F: Fn(A) -> Result<T, E>,
    E: 'static,
{
    move |args| catch(|| f(args))
}

/// Wrap `f` so each call runs inside [`catch_strict`]
pub fn rewrap_strict<A, T, E, F>(f: F) -> impl Fn(A) -> Result<T, E>
where
    F: Fn(A) -> Result<T, E>,
    E: 'static,
{
    move |args| catch_strict(|| f(args))
}

/// Run `body` in a region that turns its own `success` faults into `Failure`
pub fn catch_effect<E, F>(body: F) -> Effect<E>
where
    F: FnOnce() -> Effect<E>,
    E: 'static,
{
    absorb::<_, E, _>(FaultKind::Success, Mismatch::Propagate, body, Effect::Failure)
}

/// Wrap `f` so each call runs inside [`catch_effect`]
pub fn rewrap_effect<A, E, F>(f: F) -> impl Fn(A) -> Effect<E>
where
    F: Fn(A) -> Effect<E>,
    E: 'static,
{
    move |args| catch_effect(|| f(args))
}

/// Like [`catch_effect`], but a `success` fault carrying a foreign payload
/// is a defect
///
/// # Panics
///
/// Panics when `body` raises a `success` fault whose payload is not an `E`.
pub fn catch_effect_strict<E, F>(body: F) -> Effect<E>
where
    F: FnOnce() -> Effect<E>,
    E: 'static,
{
    absorb::<_, E, _>(FaultKind::Success, Mismatch::Defect, body, Effect::Failure)
}

/// Wrap `f` so each call runs inside [`catch_effect_strict`]
pub fn rewrap_effect_strict<A, E, F>(f: F) -> impl Fn(A) -> Effect<E>
where
    F: Fn(A) -> Effect<E>,
    E: 'static,
{
    move |args| catch_effect_strict(|| f(args))
}

fn absorb<R, E, F>(kind: FaultKind, mismatch: Mismatch, body: F, into_return: fn(E) -> R) -> R
where
    F: FnOnce() -> R,
    E: 'static,
{
    let fault = match catch_fault(body) {
        Ok(returned) => return returned,
        Err(fault) => fault,
    };

    let expected = std::any::type_name::<E>();
    if fault.kind() != kind {
        FaultLog::fault_crossed(&fault, expected);
        raise(fault)
    }

    if !fault.carries::<E>() {
        reject(fault, expected, mismatch)
    }

    FaultLog::fault_absorbed(&fault);
    match fault.try_into_payload::<E>() {
        Ok(error) => into_return(error),
        Err(mismatch) => raise(mismatch.into_fault()),
    }
}

fn reject(fault: Fault, expected: &'static str, mismatch: Mismatch) -> ! {
    FaultLog::fault_crossed(&fault, expected);
    match mismatch {
        Mismatch::Propagate => raise(fault),
        Mismatch::Defect => panic!(
            "fault carrying `{}` escaped a function returning `{expected}` errors: {}",
            fault.payload_type(),
            fault.message()
        ),
    }
}
