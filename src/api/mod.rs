//! Access to the remote monitor service.
//!
//! [`MonitorApi`] is the seam the reconciler works against; [`DatadogClient`]
//! is the HTTP implementation.

pub(crate) mod client;
mod error;

#[cfg(test)]
pub(crate) mod fake;


use serde_json::Value;

use crate::models::{MonitorDefinition, RemoteMonitor};

pub use client::DatadogClient;
pub use error::ApiError;

/// The four monitor operations a run needs.
pub trait MonitorApi {
    /// Every monitor visible to the credentials.
    fn list_monitors(&self) -> Result<Vec<RemoteMonitor>, ApiError>;

    /// Full state of one monitor. With `group_states` set, per-group alert
    /// status is included.
    fn get_monitor(&self, id: u64, group_states: bool) -> Result<Value, ApiError>;

    fn create_monitor(&self, definition: &MonitorDefinition) -> Result<RemoteMonitor, ApiError>;

    fn update_monitor(
        &self,
        id: u64,
        definition: &MonitorDefinition,
    ) -> Result<RemoteMonitor, ApiError>;
}
