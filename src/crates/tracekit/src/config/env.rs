//! Environment variable lookups
//!
//! A missing variable is `Ok(None)`; a variable that is set but unusable is
//! a traced [`UtilsError`].

use std::env;

use crate::{traced, Result, UtilsError};

/// Read `key`, failing if the value is not valid UTF-8.
pub fn get_env(key: &str) -> Result<Option<String>> {
    match env::var(key) {
        Ok(val) => Ok(Some(val)),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(env::VarError::NotUnicode(raw)) => Err(traced!(
            UtilsError,
            "Environment variable is not valid UTF-8, name: [{}], value: [{}]",
            key,
            raw.to_string_lossy()
        )),
    }
}

/// Read `key` as a switch: `1`/`true`/`yes`/`on` or `0`/`false`/`no`/`off`,
/// ignoring case and surrounding whitespace.
pub fn get_env_bool(key: &str) -> Result<Option<bool>> {
    let Some(val) = get_env(key)? else {
        return Ok(None);
    };
    let normalized = val.trim().to_ascii_lowercase();
    match normalized.as_str() {
        "1" | "true" | "yes" | "on" => Ok(Some(true)),
        "0" | "false" | "no" | "off" => Ok(Some(false)),
        _ => Err(traced!(
            UtilsError,
            "Environment variable is not a switch, name: [{}], value: [{}]",
            key,
            val
        )),
    }
}

/// Variable name for setting `name` under `prefix`, e.g. `("APP_", "shell")`
/// gives `APP_SHELL`.
pub fn build_env_key(prefix: &str, name: &str) -> String {
    let mut key = String::with_capacity(prefix.len() + name.len());
    key.push_str(prefix);
    key.push_str(&name.to_ascii_uppercase());
    key
}
