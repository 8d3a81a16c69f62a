//! Error handlers consulted before a fault is raised
//!
//! Handlers are keyed by error value. Error payloads are usually a small
//! set of codes, so lookup is a linear scan in registration order.

/// Fallback producers keyed by error value
///
/// ```
/// use rusty::{err, unwrap_or_handle, ErrHandlers, Result};
///
/// #[derive(Debug, PartialEq)]
/// enum Lookup {
///     Missing,
///     Corrupt,
/// }
///
/// let handlers = ErrHandlers::new()
///     .on(Lookup::Missing, || 0)
///     .otherwise(|_| -1);
///
/// let missing: Result<i32, Lookup> = err(Lookup::Missing);
/// let corrupt: Result<i32, Lookup> = err(Lookup::Corrupt);
/// assert_eq!(unwrap_or_handle(missing, &handlers), 0);
/// assert_eq!(unwrap_or_handle(corrupt, &handlers), -1);
/// ```
pub struct ErrHandlers<'a, E, T> {
    handlers: Vec<(E, Box<dyn Fn() -> T + 'a>)>,
    otherwise: Option<Box<dyn Fn(&E) -> T + 'a>>,
}

/// Handlers run in place of a failed effect
pub type FailureHandlers<'a, E> = ErrHandlers<'a, E, ()>;

impl<'a, E, T> ErrHandlers<'a, E, T> {
    /// Create an empty handler set
    #[must_use]
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
            otherwise: None,
        }
    }

    /// Register `handler` for errors equal to `error`
    #[must_use]
    pub fn on<F>(mut self, error: E, handler: F) -> Self
    where
        F: Fn() -> T + 'a,
    {
        self.handlers.push((error, Box::new(handler)));
        self
    }

    /// Register the handler used when no keyed handler matches
    #[must_use]
    pub fn otherwise<F>(mut self, handler: F) -> Self
    where
        F: Fn(&E) -> T + 'a,
    {
        self.otherwise = Some(Box::new(handler));
        self
    }

    /// Number of keyed handlers
    #[must_use]
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// True when neither keyed nor fallback handlers are registered
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty() && self.otherwise.is_none()
    }
}

impl<E: PartialEq, T> ErrHandlers<'_, E, T> {
    /// Run the handler for `error`, if one applies
    pub fn handle(&self, error: &E) -> Option<T> {
        if let Some((_, handler)) = self.handlers.iter().find(|(key, _)| key == error) {
            return Some(handler());
        }
        self.otherwise.as_ref().map(|handler| handler(error))
    }
}

impl<E, T> Default for ErrHandlers<'_, E, T> {
    fn default() -> Self {
        Self::new()
    }
}
