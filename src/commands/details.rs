//! `monitor-details`: print one monitor's full state, or list all monitors.

use anyhow::{bail, Context, Result};
use serde_json::{Map, Value};

use crate::api::{DatadogClient, MonitorApi};
use crate::config::Settings;

pub fn execute(settings: &Settings, monitor_id: Option<&str>, list: bool) -> Result<()> {
    let client = DatadogClient::new(settings)?;

    if list {
        for line in list_lines(&client)? {
            println!("{line}");
        }
        return Ok(());
    }

    let Some(raw_id) = monitor_id else {
        bail!("A monitor id is required");
    };
    let id = parse_monitor_id(raw_id)?;
    println!("{}", show(&client, id)?);
    Ok(())
}

pub fn parse_monitor_id(raw: &str) -> Result<u64> {
    raw.trim()
        .parse()
        .with_context(|| format!("Invalid monitor id '{raw}'"))
}

/// Fetch a monitor with group states and render it.
pub fn show<A: MonitorApi>(api: &A, id: u64) -> Result<String> {
    let monitor = api.get_monitor(id, true)?;
    render(&monitor)
}

/// `<name> <id>` for every monitor, in listing order.
pub fn list_lines<A: MonitorApi>(api: &A) -> Result<Vec<String>> {
    Ok(api
        .list_monitors()?
        .into_iter()
        .map(|monitor| format!("{} {}", monitor.name, monitor.id))
        .collect())
}

/// Two-space indented JSON with keys sorted at every level.
pub fn render(value: &Value) -> Result<String> {
    serde_json::to_string_pretty(&sort_keys(value)).context("Failed to render monitor as JSON")
}

// Rebuilt explicitly so key order holds even with serde_json's preserve_order
fn sort_keys(value: &Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut keys: Vec<&String> = map.keys().collect();
            keys.sort();
            let mut sorted = Map::new();
            for key in keys {
                sorted.insert(key.clone(), sort_keys(&map[key]));
            }
            Value::Object(sorted)
        }
        Value::Array(items) => Value::Array(items.iter().map(sort_keys).collect()),
        other => other.clone(),
    }
}
