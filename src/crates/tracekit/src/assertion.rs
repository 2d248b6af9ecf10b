//! Invariant checks that raise [`AssertError`].

use crate::trace::CallSite;
use crate::AssertError;

/// Message every failed assertion starts with.
pub const ASSERTION_MESSAGE: &str = "ASSERTION ERROR";

/// Check `condition`, failing with an [`AssertError`] tagged at `site`.
///
/// Nothing is allocated when the condition holds.
pub fn check(condition: bool, site: CallSite) -> Result<(), AssertError> {
    if condition {
        Ok(())
    } else {
        Err(AssertError::new(site.tag(ASSERTION_MESSAGE)))
    }
}

/// Return early with an [`AssertError`](crate::AssertError) tagged at this
/// line when the expression is false.
///
/// The enclosing function's error type must implement
/// `From<AssertError>`.
///
/// ```rust
/// use tracekit::{trace_assert, AssertError};
///
/// fn half(n: u32) -> Result<u32, AssertError> {
///     trace_assert!(n % 2 == 0);
///     Ok(n / 2)
/// }
///
/// assert_eq!(half(4).unwrap(), 2);
/// assert!(half(3).unwrap_err().what().starts_with("ASSERTION ERROR\n    at "));
/// ```
#[macro_export]
macro_rules! trace_assert {
    ($cond:expr) => {
        $crate::assertion::check($cond, $crate::call_site!())?
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BaseError;

    fn failing_check() -> Result<(), AssertError> {
        trace_assert!(1 + 1 == 3);
        Ok(())
    }

    fn passing_check() -> Result<u8, AssertError> {
        trace_assert!(1 + 1 == 2);
        Ok(42)
    }

    fn widened_check(value: i32) -> Result<i32, BaseError> {
        trace_assert!(value >= 0);
        Ok(value)
    }

    #[test]
    fn test_check_true_is_noop() {
        let site = CallSite::new("assertion.rs", "caller", 1);
        assert!(check(true, site).is_ok());
    }

    #[test]
    fn test_check_false_tags_site() {
        let site = CallSite::new("file.ext", "some_fancy::check_state", 12);
        let err = check(false, site).unwrap_err();
        assert_eq!(
            err.what(),
            "ASSERTION ERROR\n    at some_fancy::check_state(file.ext:12)"
        );
    }

    #[test]
    fn test_macro_passes_through() {
        assert_eq!(passing_check().unwrap(), 42);
    }

    #[test]
    fn test_macro_tags_assertion_site() {
        let err = failing_check().unwrap_err();
        let expected = crate::tracemsg(
            ASSERTION_MESSAGE,
            "assertion.rs",
            "tracekit::assertion::tests::failing_check",
            50,
        );
        assert_eq!(err.what(), expected);
    }

    #[test]
    fn test_macro_converts_into_caller_kind() {
        assert_eq!(widened_check(3).unwrap(), 3);
        let err = widened_check(-1).unwrap_err();
        assert!(err.what().starts_with("ASSERTION ERROR\n    at "));
        assert!(err
            .what()
            .contains("tracekit::assertion::tests::widened_check(assertion.rs:"));
    }
}
