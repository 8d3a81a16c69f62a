//! Result constructors and inspection methods

use super::types::{Result, Tag};

/// Build a success-tagged result
pub fn ok<T, E>(value: T) -> Result<T, E> {
    Result::Ok(value)
}

/// Build an error-tagged result
pub fn err<T, E>(error: E) -> Result<T, E> {
    Result::Err(error)
}

impl<T, E> Result<T, E> {
    /// Create a success-tagged result
    pub fn success(value: T) -> Self {
        Self::Ok(value)
    }

    /// Create an error-tagged result
    pub fn failure(error: E) -> Self {
        Self::Err(error)
    }

    /// Which variant is held
    #[must_use]
    pub fn tag(&self) -> Tag {
        match self {
            Self::Ok(_) => Tag::Success,
            Self::Err(_) => Tag::Error,
        }
    }

    /// Returns `true` for the `Ok` variant
    #[must_use]
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    /// Returns `true` for the `Err` variant
    #[must_use]
    pub fn is_err(&self) -> bool {
        matches!(self, Self::Err(_))
    }

    /// Borrow the payload without consuming the result
    pub fn as_ref(&self) -> Result<&T, &E> {
        match self {
            Self::Ok(value) => Result::Ok(value),
            Self::Err(error) => Result::Err(error),
        }
    }

    /// Success payload, discarding any error
    #[must_use]
    pub fn ok(self) -> Option<T> {
        match self {
            Self::Ok(value) => Some(value),
            Self::Err(_) => None,
        }
    }

    /// Error payload, discarding any success value
    #[must_use]
    pub fn err(self) -> Option<E> {
        match self {
            Self::Ok(_) => None,
            Self::Err(error) => Some(error),
        }
    }

    /// Transform the success payload, leaving an error untouched
    pub fn map<U, F>(self, op: F) -> Result<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Ok(value) => Result::Ok(op(value)),
            Self::Err(error) => Result::Err(error),
        }
    }

    /// Transform the error payload, leaving a success untouched
    pub fn map_err<F, O>(self, op: O) -> Result<T, F>
    where
        O: FnOnce(E) -> F,
    {
        match self {
            Self::Ok(value) => Result::Ok(value),
            Self::Err(error) => Result::Err(op(error)),
        }
    }
}
