//! Flptime - time spent on FL Studio projects
//!
//! This library crate exposes the scanner, configuration and reporting used
//! by the `flptime` binary, for integration testing.

pub mod config;
pub mod report;
pub mod scanner;
