//! End-to-end tests running the library against a local mock of the
//! monitor API.

pub mod create_flow;
