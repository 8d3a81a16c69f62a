//! Core result types

/// Exclusive-or container holding either a success value or an error value.
///
/// Consume it by matching on both variants, or through [`crate::unwrap`].
/// There is no implicit conversion to the payload.
#[must_use = "this `Result` may be an `Err` variant, which should be handled"]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Result<T, E> {
    /// Success payload
    Ok(T),
    /// Error payload
    Err(E),
}

/// Discriminant of a [`Result`] or an [`crate::Effect`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    /// The container holds a success payload
    Success,
    /// The container holds an error payload
    Error,
}
