//! Item macros that rewrite a function body in place

/// Declare a function whose body runs inside [`catch`](crate::catch)
///
/// The generated function keeps the declared name, arguments, visibility and
/// return type. Arguments are identifiers, optionally `mut`; generic
/// functions can call `catch` directly.
///
/// ```
/// use rusty::{err, ok, rewrap, unwrap, Result};
///
/// #[derive(Debug, PartialEq)]
/// enum ParseError {
///     Empty,
/// }
///
/// fn first(word: &str) -> Result<char, ParseError> {
///     match word.chars().next() {
///         Some(c) => ok(c),
///         None => err(ParseError::Empty),
///     }
/// }
///
/// rewrap! {
///     fn initials(given: &str, family: &str) -> Result<String, ParseError> {
///         ok(format!("{}{}", unwrap(first(given)), unwrap(first(family))))
///     }
/// }
///
/// assert_eq!(initials("Ada", "Lovelace"), ok("AL".to_string()));
/// assert_eq!(initials("Ada", ""), err(ParseError::Empty));
/// ```
#[macro_export]
macro_rules! rewrap {
    (
        $(#[$meta:meta])*
        $vis:vis fn $name:ident ( $($($binding:ident)+ : $ty:ty),* $(,)? ) -> $ret:ty $body:block
    ) => {
        $(#[$meta])*
        $vis fn $name( $($($binding)+ : $ty),* ) -> $ret {
            $crate::catch(move || $body)
        }
    };
}

/// Declare a function whose body runs inside
/// [`catch_effect`](crate::catch_effect)
#[macro_export]
macro_rules! rewrap_effect {
    (
        $(#[$meta:meta])*
        $vis:vis fn $name:ident ( $($($binding:ident)+ : $ty:ty),* $(,)? ) -> $ret:ty $body:block
    ) => {
        $(#[$meta])*
        $vis fn $name( $($($binding)+ : $ty),* ) -> $ret {
            $crate::catch_effect(move || $body)
        }
    };
}
