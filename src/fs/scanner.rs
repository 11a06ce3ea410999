//! Recursive discovery of monitor definition files.

use std::fs;
use std::path::{Path, PathBuf};

/// Suffix a file name must end with to be picked up.
pub const YAML_SUFFIX: &str = ".yaml";

/// Collect every `*.yaml` file below `dir`, in traversal order.
///
/// A missing path, or one that is not a directory, yields an empty list and
/// an info line. A directory without matches yields a warning.
pub fn find_yaml_files(dir: &Path) -> Vec<PathBuf> {
    if !dir.is_dir() {
        tracing::info!("No monitoring directory: {}", dir.display());
        return Vec::new();
    }

    let mut configs = Vec::new();
    walk(dir, &mut configs);

    if configs.is_empty() {
        tracing::warn!("No yaml files found under {}", dir.display());
    }
    configs
}

fn walk(dir: &Path, configs: &mut Vec<PathBuf>) {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::debug!("Skipping unreadable directory {}: {e}", dir.display());
            return;
        }
    };

    // Files of a directory come before its subdirectories. Symlinked
    // directories are not descended into; symlinked files are candidates.
    let mut subdirs = Vec::new();
    for entry in entries.flatten() {
        let Ok(file_type) = entry.file_type() else {
            continue;
        };
        let path = entry.path();
        if file_type.is_dir() {
            subdirs.push(path);
        } else if file_type.is_symlink() && path.is_dir() {
            tracing::debug!("Not following directory symlink {}", path.display());
        } else if is_yaml_file(&path) {
            configs.push(path);
        }
    }

    for subdir in subdirs {
        walk(&subdir, configs);
    }
}

fn is_yaml_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.ends_with(YAML_SUFFIX))
}
