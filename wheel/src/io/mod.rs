//! I/O: state persistence and chart configuration.

pub mod config;
pub mod port;
pub mod store;
