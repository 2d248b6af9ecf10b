//! Call-site tagging
//!
//! Rust errors travel through `?` without remembering where they passed.
//! This module rebuilds that context by hand: each propagation boundary
//! appends one frame line to the error message, so the final message reads
//! as a stack trace with the oldest frame first.
//!
//! # Features
//!
//! - [`tracemsg`] - the pure four-argument tagger
//! - [`CallSite`] - a captured file/function/line triple
//! - `tracemsg!`, `call_site!`, `function_name!` - shorthands bound to the
//!   current call site
//! - `traced!`, `retrace!` and [`TraceContext`] - raise and re-raise helpers
//!
//! # Example
//!
//! ```rust
//! use tracekit::{retrace, traced, BaseError};
//!
//! fn inner() -> Result<(), BaseError> {
//!     Err(traced!(BaseError, "Error happened here!"))
//! }
//!
//! fn outer() -> Result<(), BaseError> {
//!     inner().map_err(|e| retrace!(BaseError, e))
//! }
//!
//! let err = outer().unwrap_err();
//! let lines: Vec<&str> = err.what().lines().collect();
//! assert_eq!(lines.len(), 3);
//! assert_eq!(lines[0], "Error happened here!");
//! assert!(lines[1].starts_with("    at "));
//! ```

mod context;

use std::fmt;

pub use context::TraceContext;

/// Append one trace-frame line describing a call site to `message`.
///
/// Produces `message + "\n    at " + function + "(" + file + ":" + line + ")"`
/// exactly. The message is opaque and may already hold earlier frames.
pub fn tracemsg(message: impl AsRef<str>, file: &str, function: &str, line: u32) -> String {
    let message = message.as_ref();
    let line = line.to_string();
    let mut traced = String::with_capacity(
        message.len() + file.len() + function.len() + line.len() + 12,
    );
    traced.push_str(message);
    traced.push_str("\n    at ");
    traced.push_str(function);
    traced.push('(');
    traced.push_str(file);
    traced.push(':');
    traced.push_str(&line);
    traced.push(')');
    traced
}

/// Source location of a propagation boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CallSite {
    file: &'static str,
    function: &'static str,
    line: u32,
}

impl CallSite {
    /// Create a call site from explicit parts.
    ///
    /// `file` is used as given; [`call_site!`](crate::call_site) passes the
    /// basename of the current source file.
    pub const fn new(file: &'static str, function: &'static str, line: u32) -> Self {
        Self {
            file,
            function,
            line,
        }
    }

    /// Source file as recorded, a basename when captured by `call_site!`.
    pub fn file(&self) -> &'static str {
        self.file
    }

    /// Fully qualified path of the function at this site.
    pub fn function(&self) -> &'static str {
        self.function
    }

    /// Line of the macro invocation.
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Append this site's frame line to `message`.
    pub fn tag(&self, message: impl AsRef<str>) -> String {
        tracemsg(message, self.file, self.function, self.line)
    }
}

impl fmt::Display for CallSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "at {}({}:{})", self.function, self.file, self.line)
    }
}

/// Reduce a `type_name` of a marker fn nested in a function body to the
/// path of that function. Closure and async block segments are dropped.
#[doc(hidden)]
pub fn enclosing_function(marker: &'static str) -> &'static str {
    let mut name = marker.strip_suffix("::__marker").unwrap_or(marker);
    while let Some(outer) = name.strip_suffix("::{{closure}}") {
        name = outer;
    }
    name
}

/// Fully qualified path of the enclosing function, e.g.
/// `my_crate::module::Type::method`.
#[macro_export]
macro_rules! function_name {
    () => {{
        fn __marker() {}
        fn __type_name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        $crate::trace::enclosing_function(__type_name_of(__marker))
    }};
}

/// [`CallSite`](crate::CallSite) for the current file basename, enclosing
/// function and line.
#[macro_export]
macro_rules! call_site {
    () => {
        $crate::CallSite::new(
            $crate::strings::strip_parent_dir(::core::file!()),
            $crate::function_name!(),
            ::core::line!(),
        )
    };
}

/// Tag a message with the current call site.
///
/// ```rust
/// let msg = tracekit::tracemsg!("Hi");
/// assert!(msg.starts_with("Hi\n    at "));
/// ```
#[macro_export]
macro_rules! tracemsg {
    ($message:expr) => {
        $crate::tracemsg(
            $message,
            $crate::strings::strip_parent_dir(::core::file!()),
            $crate::function_name!(),
            ::core::line!(),
        )
    };
}

/// Construct an error of the given kind with a message tagged at the
/// current call site.
///
/// A literal message is always a format string, so inline captures work
/// the same as in `format!`. Any other expression is used as the message.
///
/// ```rust
/// use tracekit::{traced, UtilsError};
///
/// let path = "/tmp/missing";
/// let err = traced!(UtilsError, "Cannot open file: [{}]", path);
/// assert!(err.what().starts_with("Cannot open file: [/tmp/missing]\n    at "));
///
/// let err = traced!(UtilsError, "Cannot open file: [{path}]");
/// assert!(err.what().starts_with("Cannot open file: [/tmp/missing]\n    at "));
/// ```
#[macro_export]
macro_rules! traced {
    ($kind:ty, $fmt:literal $(,)?) => {
        <$kind as ::std::convert::From<::std::string::String>>::from(
            $crate::tracemsg!(::std::format!($fmt))
        )
    };
    ($kind:ty, $message:expr) => {
        <$kind as ::std::convert::From<::std::string::String>>::from($crate::tracemsg!($message))
    };
    ($kind:ty, $fmt:literal, $($arg:tt)+) => {
        <$kind as ::std::convert::From<::std::string::String>>::from(
            $crate::tracemsg!(::std::format!($fmt, $($arg)+))
        )
    };
}

/// Re-raise a caught error as the given kind, appending the current call
/// site to its full description.
///
/// With a third argument the comment is added as its own line before the
/// new frame.
#[macro_export]
macro_rules! retrace {
    ($kind:ty, $err:expr) => {
        $crate::traced!($kind, ::std::string::ToString::to_string(&$err))
    };
    ($kind:ty, $err:expr, $comment:expr) => {
        $crate::traced!($kind, ::std::format!("{}\n{}", $err, $comment))
    };
}
