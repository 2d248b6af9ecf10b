//! Configuration for the utility modules
//!
//! - Environment variable lookups that fail with traced [`UtilsError`]s
//! - [`ProcessConfig`] for shell execution, loadable from the environment
//!   or JSON
//!
//! # Example
//!
//! ```rust,ignore
//! use tracekit::config::ProcessConfig;
//!
//! // Reads APP_SHELL, APP_SHELL_FLAG and APP_LOG_COMMANDS
//! let config = ProcessConfig::from_env("APP_")?;
//! let code = tracekit::process::shell_exec_and_wait_with("echo hi", &config)?;
//! ```
//!
//! [`UtilsError`]: crate::UtilsError

mod env;
mod process;

pub use env::{build_env_key, get_env, get_env_bool};
pub use process::ProcessConfig;
