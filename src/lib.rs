pub mod api;
pub mod commands;
pub mod config;
pub mod fs;
pub mod logging;
pub mod models;
pub mod reconcile;
pub mod sources;
