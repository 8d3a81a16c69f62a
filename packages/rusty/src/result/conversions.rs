//! Explicit conversions between `rusty::Result` and `std::result::Result`

use super::types::Result;

impl<T, E> Result<T, E> {
    /// Convert into the standard library result, e.g. to use `?`
    pub fn into_std(self) -> std::result::Result<T, E> {
        self.into()
    }
}

impl<T, E> From<std::result::Result<T, E>> for Result<T, E> {
    fn from(result: std::result::Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Ok(value),
            Err(error) => Self::Err(error),
        }
    }
}

impl<T, E> From<Result<T, E>> for std::result::Result<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Result::Ok(value) => Ok(value),
            Result::Err(error) => Err(error),
        }
    }
}
