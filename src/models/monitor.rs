//! Desired-state monitor definitions as written in YAML files.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::collections::{BTreeMap, BTreeSet};

/// Silence scopes mapped to their expiry as a POSIX timestamp.
///
/// A `None` expiry mutes the scope until it is removed.
pub type SilenceScopes = BTreeMap<String, Option<i64>>;

/// Scope that matches every group of a monitor.
pub const SILENCE_ALL_SCOPE: &str = "*";

/// One monitor as declared in a YAML file.
///
/// Serializes to exactly the field set sent on create and update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonitorDefinition {
    /// Reconciliation key, assumed unique across the account
    pub name: String,
    #[serde(rename = "type")]
    pub monitor_type: String,
    pub query: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub tags: BTreeSet<String>,
    #[serde(default)]
    pub options: MonitorOptions,
}

/// Monitor options. Only `silenced` is interpreted locally; everything else
/// is passed through untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MonitorOptions {
    /// Outer `None` when the key is absent, `Some(None)` for an explicit
    /// `silenced: null`, which is sent through as `null`.
    #[serde(
        default,
        deserialize_with = "present_or_null",
        skip_serializing_if = "Option::is_none"
    )]
    pub silenced: Option<Option<SilenceScopes>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl MonitorDefinition {
    /// Replace any silence configuration with an indefinite mute of all scopes.
    pub fn silence_all(&mut self) {
        self.options.silenced = Some(Some(silence_all_scopes()));
    }

    /// Whether the definition mentions `silenced` at all.
    pub fn declares_silence(&self) -> bool {
        self.options.silenced.is_some()
    }

    /// Options rendered as the JSON object sent to the API.
    pub fn options_json(&self) -> Map<String, Value> {
        match serde_json::to_value(&self.options) {
            Ok(Value::Object(map)) => map,
            _ => Map::new(),
        }
    }
}

fn present_or_null<'de, D>(deserializer: D) -> Result<Option<Option<SilenceScopes>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Some(Option::deserialize(deserializer)?))
}

/// `{"*": null}`: every scope, no expiry.
pub fn silence_all_scopes() -> SilenceScopes {
    BTreeMap::from([(SILENCE_ALL_SCOPE.to_string(), None)])
}
