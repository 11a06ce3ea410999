//! Create-or-update of a single monitor, keyed by name.
//!
//! Every upsert re-lists the remote monitors so that a monitor created by an
//! earlier file in the same run is updated, not duplicated, by a later one.


use std::collections::HashMap;
use std::fmt;

use crate::api::{ApiError, MonitorApi};
use crate::models::{MonitorDefinition, RemoteMonitor};

/// How an existing monitor is brought in line with its definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReconcileMode {
    /// Always send the full definition, changed or not.
    #[default]
    Overwrite,
    /// Skip the update when the remote monitor already matches.
    Diff,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ReconcileOptions {
    /// Mute every scope of every monitor, indefinitely.
    pub silence: bool,
    pub mode: ReconcileMode,
    /// Decide and log, but issue no create or update.
    pub dry_run: bool,
}

/// What an upsert did (or, in a dry run, would do).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Created; the id is unknown in a dry run.
    Created(Option<u64>),
    Updated(u64),
    Unchanged(u64),
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Created(Some(id)) => write!(f, "created ({id})"),
            Outcome::Created(None) => write!(f, "created"),
            Outcome::Updated(id) => write!(f, "updated ({id})"),
            Outcome::Unchanged(id) => write!(f, "unchanged ({id})"),
        }
    }
}

/// Tally of outcomes over a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub created: usize,
    pub updated: usize,
    pub unchanged: usize,
}

impl Summary {
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Created(_) => self.created += 1,
            Outcome::Updated(_) => self.updated += 1,
            Outcome::Unchanged(_) => self.unchanged += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.created + self.updated + self.unchanged
    }
}

pub struct Reconciler<'a, A: MonitorApi> {
    api: &'a A,
    options: ReconcileOptions,
}

impl<'a, A: MonitorApi> Reconciler<'a, A> {
    pub fn new(api: &'a A, options: ReconcileOptions) -> Self {
        Self { api, options }
    }

    /// Make the remote monitor named `definition.name` match `definition`.
    pub fn upsert(&self, mut definition: MonitorDefinition) -> Result<Outcome, ApiError> {
        if self.options.silence {
            definition.silence_all();
        }

        let existing = existing_monitors(self.api)?;
        tracing::debug!("{definition:?}");

        let Some(current) = existing.get(&definition.name) else {
            tracing::info!("*** Monitor {} is creating ***", definition.name);
            if self.options.dry_run {
                return Ok(Outcome::Created(None));
            }
            let created = self.api.create_monitor(&definition)?;
            return Ok(Outcome::Created(Some(created.id)));
        };

        let id = current.id;
        if self.options.mode == ReconcileMode::Diff && current.matches(&definition) {
            tracing::info!("*** Monitor {} is unchanged: {id} ***", definition.name);
            return Ok(Outcome::Unchanged(id));
        }

        tracing::info!("*** Monitor {} is updating: {id} ***", definition.name);
        if !self.options.dry_run {
            self.api.update_monitor(id, &definition)?;
        }
        Ok(Outcome::Updated(id))
    }
}

/// Remote monitors keyed by name. With duplicate names, the last listed wins.
pub fn existing_monitors<A: MonitorApi>(api: &A) -> Result<HashMap<String, RemoteMonitor>, ApiError> {
    Ok(api
        .list_monitors()?
        .into_iter()
        .map(|monitor| (monitor.name.clone(), monitor))
        .collect())
}
