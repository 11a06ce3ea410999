pub mod monitor;
pub mod remote;

pub use monitor::{MonitorDefinition, MonitorOptions, SilenceScopes};
pub use remote::RemoteMonitor;
