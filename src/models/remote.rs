//! Monitor records as returned by the remote API.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeSet;

use super::monitor::MonitorDefinition;

/// A monitor as listed by the service.
///
/// Only `id` and `name` are needed to route an upsert; the remaining fields
/// are kept for diff mode and tolerate `null` or absence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoteMonitor {
    pub id: u64,
    pub name: String,
    #[serde(rename = "type", default)]
    pub monitor_type: Option<String>,
    #[serde(default)]
    pub query: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub options: Map<String, Value>,
}

impl RemoteMonitor {
    /// Whether an update with `definition` would leave this monitor as is.
    ///
    /// Options are compared only on the keys the definition supplies, since
    /// the service fills in defaults for everything else.
    pub fn matches(&self, definition: &MonitorDefinition) -> bool {
        if self.name != definition.name
            || self.monitor_type.as_deref() != Some(definition.monitor_type.as_str())
            || self.query.as_deref() != Some(definition.query.as_str())
            || self.message.as_deref().unwrap_or_default() != definition.message
        {
            return false;
        }

        let remote_tags: BTreeSet<&str> = self.tags.iter().map(String::as_str).collect();
        let wanted_tags: BTreeSet<&str> = definition.tags.iter().map(String::as_str).collect();
        if remote_tags != wanted_tags {
            return false;
        }

        // A remote mute the definition says nothing about still needs lifting
        if !definition.declares_silence() && self.is_silenced() {
            return false;
        }

        definition
            .options_json()
            .iter()
            .all(|(key, value)| self.options.get(key) == Some(value))
    }

    /// Whether any scope of the monitor is currently muted.
    pub fn is_silenced(&self) -> bool {
        match self.options.get("silenced") {
            Some(Value::Object(scopes)) => !scopes.is_empty(),
            _ => false,
        }
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
