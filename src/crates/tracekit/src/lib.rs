//! Call-site tagged errors for tracekit.
//!
//! Errors in this crate carry one message string. Each time an error is
//! raised or re-raised, the code at that boundary appends a frame line
//! naming its function, file and line. The finished message reads like a
//! stack trace, oldest frame first:
//!
//! ```text
//! Error happened here!
//!     at app::fun_throw(main.rs:46)
//!     at app::fun1(main.rs:53)
//! ```
//!
//! # Modules
//!
//! - `error` - [`BaseError`], the [`AssertError`] and [`UtilsError`] kinds and
//!   the `error_kind!` macro for declaring more
//! - `trace` - the [`tracemsg`] tagger, [`CallSite`], [`TraceContext`] and the
//!   `tracemsg!` / `call_site!` / `traced!` / `retrace!` macros
//! - `assertion` - `trace_assert!` raising [`AssertError`]
//! - `strings` - split and path component helpers
//! - `process` - shell and process execution
//! - `fs` - [`fs::FileDescriptor`]
//! - `encoding` - UTF-16 conversions and OS error text
//! - `config` - environment lookups and [`config::ProcessConfig`]
//! - `logging` - reporting traces through `tracing`
//!
//! # Raising and re-raising
//!
//! ```rust
//! use tracekit::{call_site, retrace, traced, BaseError, TraceContext, UtilsError};
//!
//! fn read_header() -> Result<u32, UtilsError> {
//!     Err(traced!(UtilsError, "Header too short: [{}]", 3))
//! }
//!
//! fn parse() -> Result<u32, UtilsError> {
//!     read_header().map_err(|e| retrace!(UtilsError, e))
//! }
//!
//! fn run() -> Result<u32, BaseError> {
//!     parse().trace(call_site!())
//! }
//!
//! let err = run().unwrap_err();
//! assert_eq!(err.what().lines().count(), 4);
//! ```
//!
//! # Features
//!
//! - `process` - process utilities (enabled by default)
//! - `fs` - file descriptor wrapper (enabled by default)

pub mod assertion;
pub mod config;
pub mod encoding;
pub mod error;
pub mod logging;
pub mod strings;
pub mod trace;

#[cfg(feature = "process")]
pub mod process;

#[cfg(feature = "fs")]
pub mod fs;

// Re-export commonly used types
pub use error::{AssertError, BaseError, Describe, Result, UtilsError};
pub use trace::{tracemsg, CallSite, TraceContext};

/// Crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
