//! Re-raise helpers for `Result`
//!
//! Lets a handler append its own frame at a `?` site instead of writing the
//! catch-tag-rethrow by hand.

use std::fmt::Display;

use super::CallSite;
use crate::BaseError;

/// Trait for adding a call-site frame to a failed result
///
/// # Example
///
/// ```rust
/// use tracekit::{call_site, traced, BaseError, TraceContext, UtilsError};
///
/// fn load() -> Result<(), UtilsError> {
///     Err(traced!(UtilsError, "Cannot read config"))
/// }
///
/// fn start() -> Result<(), BaseError> {
///     load().trace(call_site!())?;
///     Ok(())
/// }
///
/// let err = start().unwrap_err();
/// assert_eq!(err.what().lines().count(), 3);
/// ```
pub trait TraceContext<T> {
    /// Re-raise the error as [`BaseError`], tagged at `site`.
    fn trace(self, site: CallSite) -> Result<T, BaseError>;

    /// Re-raise the error as kind `K`, tagged at `site`.
    fn trace_as<K>(self, site: CallSite) -> Result<T, K>
    where
        K: From<String>;

    /// Re-raise the error as [`BaseError`] with a comment line before the
    /// frame at `site`.
    ///
    /// The closure only runs on failure.
    fn trace_with<F>(self, site: CallSite, f: F) -> Result<T, BaseError>
    where
        F: FnOnce() -> String;
}

impl<T, E> TraceContext<T> for Result<T, E>
where
    E: Display,
{
    fn trace(self, site: CallSite) -> Result<T, BaseError> {
        self.trace_as(site)
    }

    fn trace_as<K>(self, site: CallSite) -> Result<T, K>
    where
        K: From<String>,
    {
        self.map_err(|e| K::from(site.tag(e.to_string())))
    }

    fn trace_with<F>(self, site: CallSite, f: F) -> Result<T, BaseError>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| BaseError::new(site.tag(format!("{}\n{}", e, f()))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AssertError, UtilsError};

    const RAISE: CallSite = CallSite::new("context.rs", "raise", 10);
    const MIDDLE: CallSite = CallSite::new("context.rs", "middle", 20);
    const OUTER: CallSite = CallSite::new("context.rs", "outer", 30);

    fn raise() -> Result<u32, UtilsError> {
        Err(UtilsError::new(RAISE.tag("File not found")))
    }

    fn middle() -> Result<u32, BaseError> {
        raise().trace(MIDDLE)
    }

    #[test]
    fn test_trace_appends_frame() {
        let err = middle().unwrap_err();
        assert_eq!(
            err.what(),
            "File not found\n    at raise(context.rs:10)\n    at middle(context.rs:20)"
        );
    }

    #[test]
    fn test_trace_as_keeps_kind() {
        let err = raise().trace_as::<AssertError>(OUTER).unwrap_err();
        assert_eq!(
            err.what(),
            "File not found\n    at raise(context.rs:10)\n    at outer(context.rs:30)"
        );
    }

    #[test]
    fn test_trace_with_comment() {
        let err = middle()
            .trace_with(OUTER, || "Application initialization failed".to_string())
            .unwrap_err();
        let lines: Vec<&str> = err.what().lines().collect();
        assert_eq!(
            lines,
            vec![
                "File not found",
                "    at raise(context.rs:10)",
                "    at middle(context.rs:20)",
                "Application initialization failed",
                "    at outer(context.rs:30)",
            ]
        );
    }

    #[test]
    fn test_trace_with_is_lazy() {
        let ok: Result<u32, UtilsError> = Ok(5);
        let value = ok
            .trace_with(OUTER, || panic!("comment built on success"))
            .unwrap();
        assert_eq!(value, 5);
    }

    #[test]
    fn test_foreign_error_enters_trace() {
        let result: Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "no such file",
        ));
        let err = result.trace(RAISE).unwrap_err();
        assert_eq!(err.what(), "no such file\n    at raise(context.rs:10)");
    }
}
