//! Core fault types

use std::any::Any;
use std::fmt;
use std::panic::Location;
use thiserror::Error;

/// Which operation raised a [`Fault`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FaultKind {
    /// `unwrap` applied to an `Err` result
    Unwrap,
    /// `success` applied to a `Failure` effect
    Success,
}

impl FaultKind {
    fn prefix(self) -> &'static str {
        match self {
            Self::Unwrap => "called unwrap on an Err value",
            Self::Success => "called success on a Failure value",
        }
    }
}

/// Fault raised when an error payload is unwrapped
///
/// The payload is type-erased so the fault can travel as a panic payload;
/// [`Fault::payload`] and [`Fault::try_into_payload`] recover it with the
/// type the caller expects.
pub struct Fault {
    payload: Box<dyn Any + Send>,
    payload_type: &'static str,
    kind: FaultKind,
    message: String,
    location: &'static Location<'static>,
    #[cfg(feature = "full-backtrace")]
    backtrace: backtrace::Backtrace,
}

impl Fault {
    /// Create a fault carrying `payload`, rendered with the payload's `Debug`
    #[must_use]
    pub fn new<E>(kind: FaultKind, payload: E, location: &'static Location<'static>) -> Self
    where
        E: fmt::Debug + Send + 'static,
    {
        let message = format!("{}: {payload:?}", kind.prefix());
        Self {
            payload: Box::new(payload),
            payload_type: std::any::type_name::<E>(),
            kind,
            message,
            location,
            #[cfg(feature = "full-backtrace")]
            backtrace: backtrace::Backtrace::new_unresolved(),
        }
    }

    /// Operation that raised this fault
    #[must_use]
    pub fn kind(&self) -> FaultKind {
        self.kind
    }

    /// Rendered message: fixed prefix plus the payload's `Debug` output
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Type name of the carried payload
    #[must_use]
    pub fn payload_type(&self) -> &'static str {
        self.payload_type
    }

    /// Source location of the `unwrap`/`success` call that raised the fault
    #[must_use]
    pub fn location(&self) -> &'static Location<'static> {
        self.location
    }

    /// Whether the payload is an `E`
    #[must_use]
    pub fn carries<E: 'static>(&self) -> bool {
        self.payload.is::<E>()
    }

    /// Borrow the payload as an `E`, if that is its type
    #[must_use]
    pub fn payload<E: 'static>(&self) -> Option<&E> {
        self.payload.downcast_ref::<E>()
    }

    /// Take the payload out as an `E`
    ///
    /// # Errors
    ///
    /// Returns [`PayloadMismatch`], which gives the fault back, when the
    /// payload is of another type.
    pub fn try_into_payload<E: 'static>(mut self) -> Result<E, PayloadMismatch> {
        match self.payload.downcast::<E>() {
            Ok(payload) => Ok(*payload),
            Err(payload) => {
                self.payload = payload;
                Err(PayloadMismatch {
                    expected: std::any::type_name::<E>(),
                    fault: self,
                })
            }
        }
    }

    /// Backtrace captured where the fault was raised, unresolved
    ///
    /// Clone it and call `resolve()` to get symbol names.
    #[cfg(feature = "full-backtrace")]
    #[must_use]
    pub fn backtrace(&self) -> &backtrace::Backtrace {
        &self.backtrace
    }
}

/// A fault's payload was not of the requested type
#[derive(Debug, Error)]
#[error("fault carries a `{}` payload, not `{expected}`", .fault.payload_type())]
pub struct PayloadMismatch {
    expected: &'static str,
    fault: Fault,
}

impl PayloadMismatch {
    /// Type name that was requested
    #[must_use]
    pub fn expected(&self) -> &'static str {
        self.expected
    }

    /// Borrow the untouched fault
    #[must_use]
    pub fn fault(&self) -> &Fault {
        &self.fault
    }

    /// Recover the untouched fault
    #[must_use]
    pub fn into_fault(self) -> Fault {
        self.fault
    }
}
