//! Blocking HTTP client for the Datadog monitor endpoints.

use reqwest::blocking::{Client, RequestBuilder, Response};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;

use super::error::{error_message, ApiError};
use super::MonitorApi;
use crate::config::{Credentials, Settings};
use crate::models::{MonitorDefinition, RemoteMonitor};

pub(crate) const HTTP_CONNECT_TIMEOUT_SECS: u64 = 10;
pub(crate) const HTTP_REQUEST_TIMEOUT_SECS: u64 = 60; // connection + transfer

pub(crate) const API_KEY_HEADER: &str = "DD-API-KEY";
pub(crate) const APP_KEY_HEADER: &str = "DD-APPLICATION-KEY";

const MONITOR_PATH: &str = "/api/v1/monitor";

/// Client bound to one API host and key pair.
pub struct DatadogClient {
    http: Client,
    base_url: String,
    credentials: Credentials,
}

impl DatadogClient {
    pub fn new(settings: &Settings) -> Result<Self, ApiError> {
        Ok(Self {
            http: create_http_client()?,
            base_url: settings.api_host.clone(),
            credentials: settings.credentials.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.http
            .request(method, format!("{}{}", self.base_url, path))
            .header(API_KEY_HEADER, &self.credentials.api_key)
            .header(APP_KEY_HEADER, &self.credentials.app_key)
    }

    fn send<T: DeserializeOwned>(&self, request: RequestBuilder, context: &str) -> Result<T, ApiError> {
        let response = request.send().map_err(|source| ApiError::Transport {
            context: context.to_string(),
            source,
        })?;

        let response = validate_response_status(response, context)?;

        response.json().map_err(|source| ApiError::Decode {
            context: context.to_string(),
            source,
        })
    }
}

impl MonitorApi for DatadogClient {
    fn list_monitors(&self) -> Result<Vec<RemoteMonitor>, ApiError> {
        self.send(
            self.request(Method::GET, MONITOR_PATH),
            "Failed to list monitors",
        )
    }

    fn get_monitor(&self, id: u64, group_states: bool) -> Result<Value, ApiError> {
        let path = if group_states {
            format!("{MONITOR_PATH}/{id}?group_states=all")
        } else {
            format!("{MONITOR_PATH}/{id}")
        };
        self.send(
            self.request(Method::GET, &path),
            &format!("Failed to fetch monitor {id}"),
        )
    }

    fn create_monitor(&self, definition: &MonitorDefinition) -> Result<RemoteMonitor, ApiError> {
        self.send(
            self.request(Method::POST, MONITOR_PATH).json(definition),
            &format!("Failed to create monitor '{}'", definition.name),
        )
    }

    fn update_monitor(
        &self,
        id: u64,
        definition: &MonitorDefinition,
    ) -> Result<RemoteMonitor, ApiError> {
        self.send(
            self.request(Method::PUT, &format!("{MONITOR_PATH}/{id}"))
                .json(definition),
            &format!("Failed to update monitor '{}' ({id})", definition.name),
        )
    }
}

/// Create an HTTP client with bounded connect and request timeouts.
pub(crate) fn create_http_client() -> Result<Client, ApiError> {
    Client::builder()
        .connect_timeout(Duration::from_secs(HTTP_CONNECT_TIMEOUT_SECS))
        .timeout(Duration::from_secs(HTTP_REQUEST_TIMEOUT_SECS))
        .user_agent(concat!("monitor-sync/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(ApiError::Client)
}

/// Pass successful responses through; turn anything else into
/// [`ApiError::Status`] carrying the service's error text.
pub(crate) fn validate_response_status(response: Response, context: &str) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().unwrap_or_default();
    Err(ApiError::Status {
        context: context.to_string(),
        status: status.as_u16(),
        message: error_message(&body, status.canonical_reason()),
    })
}
