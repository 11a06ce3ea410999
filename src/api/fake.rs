//! In-memory [`MonitorApi`] that records every call.

use serde_json::{json, Value};
use std::cell::RefCell;

use super::{ApiError, MonitorApi};
use crate::models::{MonitorDefinition, RemoteMonitor};

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Call {
    List,
    Get { id: u64, group_states: bool },
    Create(MonitorDefinition),
    Update(u64, MonitorDefinition),
}

/// Starts with a fixed set of monitors; creates are assigned ids from 1000.
#[derive(Default)]
pub(crate) struct FakeApi {
    monitors: RefCell<Vec<RemoteMonitor>>,
    calls: RefCell<Vec<Call>>,
    next_id: RefCell<u64>,
}

impl FakeApi {
    pub(crate) fn with_monitors(monitors: &[(u64, &str)]) -> Self {
        let monitors = monitors
            .iter()
            .map(|(id, name)| remote(*id, name))
            .collect();
        Self {
            monitors: RefCell::new(monitors),
            calls: RefCell::new(Vec::new()),
            next_id: RefCell::new(1000),
        }
    }

    pub(crate) fn with_records(records: Vec<RemoteMonitor>) -> Self {
        let api = Self::with_monitors(&[]);
        *api.monitors.borrow_mut() = records;
        api
    }

    pub(crate) fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    /// Calls other than `List`.
    pub(crate) fn writes(&self) -> Vec<Call> {
        self.calls()
            .into_iter()
            .filter(|call| !matches!(call, Call::List | Call::Get { .. }))
            .collect()
    }
}

pub(crate) fn remote(id: u64, name: &str) -> RemoteMonitor {
    RemoteMonitor {
        id,
        name: name.to_string(),
        monitor_type: None,
        query: None,
        message: None,
        tags: Vec::new(),
        options: Default::default(),
    }
}

fn record_from(id: u64, definition: &MonitorDefinition) -> RemoteMonitor {
    RemoteMonitor {
        id,
        name: definition.name.clone(),
        monitor_type: Some(definition.monitor_type.clone()),
        query: Some(definition.query.clone()),
        message: Some(definition.message.clone()),
        tags: definition.tags.iter().cloned().collect(),
        options: definition.options_json(),
    }
}

impl MonitorApi for FakeApi {
    fn list_monitors(&self) -> Result<Vec<RemoteMonitor>, ApiError> {
        self.calls.borrow_mut().push(Call::List);
        Ok(self.monitors.borrow().clone())
    }

    fn get_monitor(&self, id: u64, group_states: bool) -> Result<Value, ApiError> {
        self.calls.borrow_mut().push(Call::Get { id, group_states });
        Ok(json!({"id": id}))
    }

    fn create_monitor(&self, definition: &MonitorDefinition) -> Result<RemoteMonitor, ApiError> {
        self.calls
            .borrow_mut()
            .push(Call::Create(definition.clone()));

        let id = {
            let mut next = self.next_id.borrow_mut();
            *next += 1;
            *next
        };
        let record = record_from(id, definition);
        self.monitors.borrow_mut().push(record.clone());
        Ok(record)
    }

    fn update_monitor(
        &self,
        id: u64,
        definition: &MonitorDefinition,
    ) -> Result<RemoteMonitor, ApiError> {
        self.calls
            .borrow_mut()
            .push(Call::Update(id, definition.clone()));

        let record = record_from(id, definition);
        let mut monitors = self.monitors.borrow_mut();
        if let Some(existing) = monitors.iter_mut().find(|m| m.id == id) {
            *existing = record.clone();
        }
        Ok(record)
    }
}
