use serde::{Deserialize, Serialize};

use super::env::{build_env_key, get_env, get_env_bool};
use crate::{retrace, traced, Result, TraceContext, UtilsError};

/// Shell settings used by [`crate::process::shell_exec_and_wait_with`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessConfig {
    /// Shell executable
    pub shell: String,
    /// Flag that makes the shell run the following argument as a command
    pub shell_flag: String,
    /// Log each (sanitized) command line at debug level
    pub log_commands: bool,
}

impl Default for ProcessConfig {
    fn default() -> Self {
        if cfg!(windows) {
            Self {
                shell: "cmd".to_string(),
                shell_flag: "/C".to_string(),
                log_commands: true,
            }
        } else {
            Self {
                shell: "/bin/sh".to_string(),
                shell_flag: "-c".to_string(),
                log_commands: true,
            }
        }
    }
}

impl ProcessConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_shell(mut self, shell: impl Into<String>, flag: impl Into<String>) -> Self {
        self.shell = shell.into();
        self.shell_flag = flag.into();
        self
    }

    pub fn with_log_commands(mut self, enabled: bool) -> Self {
        self.log_commands = enabled;
        self
    }

    /// Load from `<prefix>SHELL`, `<prefix>SHELL_FLAG` and
    /// `<prefix>LOG_COMMANDS`, falling back to platform defaults.
    pub fn from_env(prefix: &str) -> Result<Self> {
        let mut config = Self::default();
        if let Some(shell) = get_env(&build_env_key(prefix, "shell"))? {
            config.shell = shell;
        }
        if let Some(flag) = get_env(&build_env_key(prefix, "shell_flag"))? {
            config.shell_flag = flag;
        }
        if let Some(log) = get_env_bool(&build_env_key(prefix, "log_commands"))
            .trace_as::<UtilsError>(crate::call_site!())?
        {
            config.log_commands = log;
        }
        tracing::debug!(shell = %config.shell, prefix, "Loaded process config from environment");
        config.validate()?;
        Ok(config)
    }

    /// Parse from a JSON document; missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json).map_err(|e| {
            traced!(UtilsError, "Cannot parse process config, error: [{}]", e)
        })?;
        config
            .validate()
            .map_err(|e| retrace!(UtilsError, e, "Invalid process config in JSON input"))?;
        Ok(config)
    }

    /// Reject settings that cannot spawn anything.
    pub fn validate(&self) -> Result<()> {
        if self.shell.trim().is_empty() {
            return Err(traced!(UtilsError, "Shell executable must not be empty"));
        }
        Ok(())
    }
}
