//! Runtime settings assembled from the process environment.
//!
//! Credentials are read once at startup into a [`Settings`] value which is
//! then handed to every component that talks to the monitor API.

use std::env;
use std::fmt;
use thiserror::Error;

/// Environment variable holding the Datadog API key.
pub const API_KEY_VAR: &str = "datadog_api_key";

/// Environment variable holding the Datadog application key.
pub const APP_KEY_VAR: &str = "datadog_app_key";

/// Any non-empty value enables debug logging.
pub const DEBUG_VAR: &str = "DEBUG";

/// Optional override for the API base URL (e.g. the EU site).
pub const HOST_VAR: &str = "DATADOG_HOST";

pub const DEFAULT_API_HOST: &str = "https://api.datadoghq.com";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SettingsError {
    #[error("no environment variable '{0}' defined!")]
    MissingVariable(&'static str),
}

/// API and application key pair.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub api_key: String,
    pub app_key: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &"[redacted]")
            .field("app_key", &"[redacted]")
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub credentials: Credentials,
    /// Base URL without a trailing slash
    pub api_host: String,
    pub debug: bool,
}

impl Settings {
    /// Build settings from the real process environment.
    pub fn from_env() -> Result<Self, SettingsError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build settings from an arbitrary variable lookup.
    ///
    /// The API key is checked before the application key, so a run missing
    /// both reports the API key first.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, SettingsError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = non_empty(lookup(API_KEY_VAR))
            .ok_or(SettingsError::MissingVariable(API_KEY_VAR))?;
        let app_key = non_empty(lookup(APP_KEY_VAR))
            .ok_or(SettingsError::MissingVariable(APP_KEY_VAR))?;

        let api_host = non_empty(lookup(HOST_VAR).map(|host| host.trim().to_string()))
            .map(|host| host.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_API_HOST.to_string());

        Ok(Self {
            credentials: Credentials { api_key, app_key },
            api_host,
            debug: non_empty(lookup(DEBUG_VAR)).is_some(),
        })
    }
}

/// Whether `DEBUG` is set in the process environment.
///
/// Logging is initialised before credentials are checked, so this is read
/// on its own.
pub fn debug_enabled() -> bool {
    non_empty(env::var(DEBUG_VAR).ok()).is_some()
}

/// Unset and empty are both treated as absent; whitespace counts as a value.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
