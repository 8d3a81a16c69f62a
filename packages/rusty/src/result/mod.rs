//! Two-variant result container
//!
//! Provides the `Ok`/`Err` sum type that every other part of the crate is
//! built around:
//! - Construction through `ok`/`err` or `Result::success`/`Result::failure`
//! - Tag inspection without consuming the value
//! - Explicit conversion to and from `std::result::Result`

pub mod constructors;
pub mod conversions;
pub mod display;
pub mod types;

pub use constructors::{err, ok};
pub use types::{Result, Tag};
