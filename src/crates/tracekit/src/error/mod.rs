//! Error values carrying a hand-built trace.
//!
//! Every error in this crate is a single owned message string. The message
//! starts with a human-readable description and grows one frame line per
//! propagation boundary, see [`crate::trace`].
//!
//! # Example
//!
//! ```rust
//! use tracekit::{traced, AssertError, BaseError, Describe};
//!
//! let err: AssertError = traced!(AssertError, "bad state");
//! assert!(err.what().starts_with("bad state\n    at "));
//!
//! // Every kind widens into the base kind without touching the message
//! let text = err.what().to_string();
//! let base: BaseError = err.into();
//! assert_eq!(base.what(), text);
//! ```

mod kind;

use thiserror::Error;

/// Result type for utility operations.
pub type Result<T> = std::result::Result<T, UtilsError>;

/// Uniform access to an error's accumulated message.
pub trait Describe {
    /// Returns the stored message verbatim.
    fn what(&self) -> &str;
}

/// Base error kind.
///
/// Stores the message it was built with and nothing else. Tagging happens
/// before construction, so the message is never altered here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct BaseError {
    message: String,
}

impl BaseError {
    /// Create an error from an (optionally already traced) message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The stored message.
    pub fn what(&self) -> &str {
        &self.message
    }

    /// Consume the error, returning its message.
    pub fn into_message(self) -> String {
        self.message
    }
}

impl Describe for BaseError {
    fn what(&self) -> &str {
        &self.message
    }
}

impl From<String> for BaseError {
    fn from(message: String) -> Self {
        Self { message }
    }
}

impl From<&str> for BaseError {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

crate::error_kind! {
    /// Raised by [`crate::trace_assert!`] when an invariant does not hold.
    AssertError
}

crate::error_kind! {
    /// Raised by the string, process, file and encoding utilities.
    UtilsError
}
