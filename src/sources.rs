//! Turning the selected CLI modes into an ordered list of definition files.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::fs::find_yaml_files;

/// Directory processed by `--monitors`, relative to the working directory.
pub const MONITORS_DIR: &str = "monitors";

/// Directory processed by `--infrastructure`, relative to the working directory.
pub const INFRASTRUCTURE_DIR: &str = "infrastructure_monitors";

/// Which sources a run should read definitions from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceSelection {
    pub monitors: bool,
    pub infrastructure: bool,
    /// Explicit files, queued without an existence check
    pub configs: Vec<PathBuf>,
    pub dirs: Vec<PathBuf>,
}

impl SourceSelection {
    /// Resolve the selection against `cwd`.
    ///
    /// Order is monitors dir, infrastructure dir, explicit configs, then
    /// `--dir` entries. A path reached through more than one source is kept
    /// only at its first position.
    pub fn resolve(&self, cwd: &Path) -> Vec<PathBuf> {
        let mut all_configs = Vec::new();

        if self.monitors {
            tracing::info!("## Processing monitors dir");
            all_configs.extend(find_yaml_files(&cwd.join(MONITORS_DIR)));
        }

        if self.infrastructure {
            tracing::info!("### Processing infrastructure_monitors dir");
            all_configs.extend(find_yaml_files(&cwd.join(INFRASTRUCTURE_DIR)));
        }

        if !self.configs.is_empty() {
            tracing::info!("## Processing configs: {}", join_paths(&self.configs));
            all_configs.extend(self.configs.iter().cloned());
        }

        if !self.dirs.is_empty() {
            tracing::info!("## Processing directories: {}", join_paths(&self.dirs));
            let mut all_dirs = Vec::new();
            for dir in &self.dirs {
                let found = find_yaml_files(dir);
                if found.is_empty() {
                    tracing::warn!("Found no yaml configurations in {}", dir.display());
                }
                all_dirs.extend(found);
            }
            if all_dirs.is_empty() {
                tracing::error!("Found no yaml configs in: {}", join_paths(&self.dirs));
            }
            all_configs.extend(all_dirs);
        }

        dedup_preserving_order(all_configs)
    }
}

/// Split a comma-separated CLI value into trimmed, non-empty paths.
pub fn split_paths(value: &str) -> Vec<PathBuf> {
    value
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(PathBuf::from)
        .collect()
}

fn join_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(",")
}

fn dedup_preserving_order(paths: Vec<PathBuf>) -> Vec<PathBuf> {
    let mut seen = HashSet::new();
    paths
        .into_iter()
        .filter(|path| {
            let duplicate = !seen.insert(path.clone());
            if duplicate {
                tracing::debug!("Skipping duplicate source {}", path.display());
            }
            !duplicate
        })
        .collect()
}
