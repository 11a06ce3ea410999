use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Failed to create HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("{context}: {source}")]
    Transport {
        context: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{context}: HTTP {status} - {message}")]
    Status {
        context: String,
        status: u16,
        message: String,
    },

    #[error("{context}: invalid response body: {source}")]
    Decode {
        context: String,
        #[source]
        source: reqwest::Error,
    },
}

/// Error envelope the service returns on 4xx/5xx.
#[derive(Deserialize)]
struct ErrorBody {
    errors: Vec<String>,
}

/// Human-readable message for a failed response body.
///
/// Prefers the service's `errors` list and falls back to the raw text, then
/// to the canonical status reason.
pub(crate) fn error_message(body: &str, reason: Option<&str>) -> String {
    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
        if !parsed.errors.is_empty() {
            return parsed.errors.join("; ");
        }
    }
    let trimmed = body.trim();
    if trimmed.is_empty() {
        reason.unwrap_or("Unknown error").to_string()
    } else {
        trimmed.to_string()
    }
}
