//! Logging helpers
//!
//! Emits accumulated traces through `tracing` and keeps secrets out of
//! logged command lines.

use std::sync::OnceLock;

use regex::Regex;
use tracing::{debug, error, info, warn};

use crate::Describe;

/// Log levels for [`report_at`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

/// Log an unhandled error's full trace at error level.
///
/// This is meant for the outermost handler; the trace is written as-is,
/// one frame per line.
///
/// ```rust
/// use tracekit::{logging, traced, UtilsError};
///
/// let err = traced!(UtilsError, "Cannot start");
/// logging::report(&err);
/// ```
pub fn report<E: Describe + ?Sized>(err: &E) {
    report_at(LogLevel::Error, err);
}

/// Log an error's full trace at the given level.
pub fn report_at<E: Describe + ?Sized>(level: LogLevel, err: &E) {
    let trace = err.what();
    match level {
        LogLevel::Debug => debug!("{}", trace),
        LogLevel::Info => info!("{}", trace),
        LogLevel::Warn => warn!("{}", trace),
        LogLevel::Error => error!("{}", trace),
    }
}

fn secret_patterns() -> &'static [(Regex, &'static str)] {
    static PATTERNS: OnceLock<Vec<(Regex, &'static str)>> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        [
            (r"(?i)(api[\s_-]?key|apikey)\s*[:=]\s*\S+", "$1: [REDACTED]"),
            (r"(?i)(password|passwd|pwd)\s*[:=]\s*\S+", "$1: [REDACTED]"),
            (r"(?i)(token)\s*[:=]\s*\S+", "$1: [REDACTED]"),
            (r"(?i)(secret)\s*[:=]\s*\S+", "$1: [REDACTED]"),
            (
                r"(?i)(authorization|auth)\s*:\s*bearer\s+\S+",
                "$1: Bearer [REDACTED]",
            ),
        ]
        .into_iter()
        .filter_map(|(pattern, replacement)| {
            Regex::new(pattern).ok().map(|re| (re, replacement))
        })
        .collect()
    })
}

/// Redact common secret patterns (`password=...`, `token: ...`, bearer
/// headers) before a command line or message is logged.
pub fn sanitize_for_logging(input: &str) -> String {
    let mut result = input.to_string();
    for (re, replacement) in secret_patterns() {
        result = re.replace_all(&result, *replacement).into_owned();
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AssertError, BaseError};

    #[test]
    fn test_report_accepts_any_kind() {
        report(&BaseError::new("base"));
        report_at(LogLevel::Warn, &AssertError::new("assert"));
        let boxed: Box<dyn Describe> = Box::new(BaseError::default());
        report_at(LogLevel::Debug, boxed.as_ref());
    }

    #[test]
    fn test_sanitize_password() {
        let sanitized = sanitize_for_logging("mysql -u root --password=secret123");
        assert!(sanitized.contains("[REDACTED]"));
        assert!(!sanitized.contains("secret123"));
    }

    #[test]
    fn test_sanitize_token() {
        let sanitized = sanitize_for_logging("curl -d token=xyz789 localhost");
        assert!(!sanitized.contains("xyz789"));
    }

    #[test]
    fn test_sanitize_bearer_header() {
        let sanitized = sanitize_for_logging("curl -H 'Authorization: Bearer abc123xyz'");
        assert!(sanitized.contains("Bearer [REDACTED]"));
        assert!(!sanitized.contains("abc123xyz"));
    }

    #[test]
    fn test_sanitize_preserves_safe_data() {
        let input = "echo aaa > echo_out.txt";
        assert_eq!(sanitize_for_logging(input), input);
    }
}
