//! Filesystem side of a run: finding definition files and reading them.

pub mod loader;
pub mod scanner;

pub use loader::{load_definition, LoadError};
pub use scanner::{find_yaml_files, YAML_SUFFIX};
