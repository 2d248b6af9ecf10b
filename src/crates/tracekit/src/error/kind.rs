//! Macro for declaring error kinds that share the base error contract.

/// Declare an error kind carrying a single traced message.
///
/// The generated type stores its message verbatim, describes itself through
/// [`Describe`](crate::Describe) and `Display`, and converts into
/// [`BaseError`](crate::BaseError) so a handler can re-raise it as the more
/// general kind.
///
/// # Example
///
/// ```rust
/// use tracekit::{error_kind, traced, BaseError, Describe};
///
/// error_kind! {
///     /// Storage layer failure
///     StorageError
/// }
///
/// let err: StorageError = traced!(StorageError, "disk full");
/// assert!(err.what().starts_with("disk full\n    at "));
/// let _base: BaseError = err.into();
/// ```
#[macro_export]
macro_rules! error_kind {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Eq)]
        pub struct $name {
            message: ::std::string::String,
        }

        impl $name {
            /// Create an error from an (optionally already traced) message.
            pub fn new(message: impl ::std::convert::Into<::std::string::String>) -> Self {
                Self {
                    message: message.into(),
                }
            }

            /// The stored message.
            pub fn what(&self) -> &str {
                &self.message
            }

            /// Consume the error, returning its message.
            pub fn into_message(self) -> ::std::string::String {
                self.message
            }
        }

        impl $crate::Describe for $name {
            fn what(&self) -> &str {
                &self.message
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(&self.message)
            }
        }

        impl ::std::error::Error for $name {}

        impl ::std::convert::From<::std::string::String> for $name {
            fn from(message: ::std::string::String) -> Self {
                Self { message }
            }
        }

        impl ::std::convert::From<&str> for $name {
            fn from(message: &str) -> Self {
                Self::new(message)
            }
        }

        impl ::std::convert::From<$name> for $crate::BaseError {
            fn from(err: $name) -> Self {
                $crate::BaseError::new(err.message)
            }
        }
    };
}
