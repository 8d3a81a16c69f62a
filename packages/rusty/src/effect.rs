//! Value-less outcome: an operation either succeeded or failed with an error

use crate::fault::{raise::raise, Fault, FaultKind};
use crate::handlers::FailureHandlers;
use crate::result::{Result, Tag};
use std::fmt;
use std::panic::Location;

/// Outcome of an operation that produces no value
#[must_use = "this `Effect` may be a `Failure` variant, which should be handled"]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Effect<E> {
    /// The operation succeeded
    Success,
    /// The operation failed with an error payload
    Failure(E),
}

/// Build a failed effect
pub fn failure<E>(error: E) -> Effect<E> {
    Effect::Failure(error)
}

impl<E> Effect<E> {
    /// Create a successful effect
    pub fn success() -> Self {
        Self::Success
    }

    /// Create a failed effect
    pub fn failure(error: E) -> Self {
        Self::Failure(error)
    }

    /// Which variant is held
    #[must_use]
    pub fn tag(&self) -> Tag {
        match self {
            Self::Success => Tag::Success,
            Self::Failure(_) => Tag::Error,
        }
    }

    /// Returns `true` for `Success`
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }

    /// Returns `true` for `Failure`
    #[must_use]
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Error payload of a failed effect
    #[must_use]
    pub fn err(self) -> Option<E> {
        match self {
            Self::Success => None,
            Self::Failure(error) => Some(error),
        }
    }
}

/// Return normally on `Success`, raise a [`Fault`] on `Failure`
///
/// The fault is only absorbed by effect regions ([`crate::catch_effect`]),
/// never by result regions.
#[track_caller]
pub fn success<E>(effect: Effect<E>)
where
    E: fmt::Debug + Send + 'static,
{
    if let Effect::Failure(error) = effect {
        raise(Fault::new(FaultKind::Success, error, Location::caller()));
    }
}

/// Like [`success`], but run a matching handler instead of raising
///
/// Returns `true` when the effect succeeded and `false` when a handler ran
/// in place of the failure.
#[track_caller]
pub fn success_or_handle<E>(effect: Effect<E>, handlers: &FailureHandlers<'_, E>) -> bool
where
    E: PartialEq + fmt::Debug + Send + 'static,
{
    match effect {
        Effect::Success => true,
        Effect::Failure(error) => match handlers.handle(&error) {
            Some(()) => false,
            None => raise(Fault::new(FaultKind::Success, error, Location::caller())),
        },
    }
}

impl<E: fmt::Display> fmt::Display for Effect<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success => f.write_str("Success"),
            Self::Failure(error) => write!(f, "Failure({error})"),
        }
    }
}

impl<E> From<Result<(), E>> for Effect<E> {
    fn from(result: Result<(), E>) -> Self {
        match result {
            Result::Ok(()) => Self::Success,
            Result::Err(error) => Self::Failure(error),
        }
    }
}

impl<E> From<Effect<E>> for Result<(), E> {
    fn from(effect: Effect<E>) -> Self {
        match effect {
            Effect::Success => Result::Ok(()),
            Effect::Failure(error) => Result::Err(error),
        }
    }
}

impl<E> From<std::result::Result<(), E>> for Effect<E> {
    fn from(result: std::result::Result<(), E>) -> Self {
        match result {
            Ok(()) => Self::Success,
            Err(error) => Self::Failure(error),
        }
    }
}

impl<E> From<Effect<E>> for std::result::Result<(), E> {
    fn from(effect: Effect<E>) -> Self {
        match effect {
            Effect::Success => Ok(()),
            Effect::Failure(error) => Err(error),
        }
    }
}
