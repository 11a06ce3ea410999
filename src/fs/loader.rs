//! Reading a single monitor definition from disk.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::models::MonitorDefinition;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Error while reading config file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Error while reading config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

/// Read and parse the YAML definition at `path`.
pub fn load_definition(path: &Path) -> Result<MonitorDefinition, LoadError> {
    tracing::debug!("Reading {}", path.display());

    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    serde_yaml::from_str(&content).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
