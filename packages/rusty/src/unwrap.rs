//! Extracting success payloads, raising faults on errors

use crate::fault::{raise::raise, Fault, FaultKind};
use crate::handlers::ErrHandlers;
use crate::result::Result;
use std::fmt;
use std::panic::Location;

/// Return the success payload, or raise a [`Fault`] carrying the error
///
/// The fault unwinds to the nearest [`crate::catch`] region whose error type
/// matches, where it becomes that function's `Err` return value. With no
/// such region it surfaces as a panic.
#[track_caller]
pub fn unwrap<T, E>(result: Result<T, E>) -> T
where
    E: fmt::Debug + Send + 'static,
{
    match result {
        Result::Ok(value) => value,
        Result::Err(error) => raise(Fault::new(FaultKind::Unwrap, error, Location::caller())),
    }
}

/// Like [`unwrap`], but consult `handlers` before raising
///
/// A handler registered for an error equal to the payload wins over the
/// fallback; with neither, the fault is raised exactly as `unwrap` would.
#[track_caller]
pub fn unwrap_or_handle<T, E>(result: Result<T, E>, handlers: &ErrHandlers<'_, E, T>) -> T
where
    E: PartialEq + fmt::Debug + Send + 'static,
{
    match result {
        Result::Ok(value) => value,
        Result::Err(error) => match handlers.handle(&error) {
            Some(value) => value,
            None => raise(Fault::new(FaultKind::Unwrap, error, Location::caller())),
        },
    }
}

impl<T, E> Result<T, E>
where
    E: fmt::Debug + Send + 'static,
{
    /// Method form of [`unwrap`]
    #[track_caller]
    pub fn unwrap(self) -> T {
        unwrap(self)
    }
}
