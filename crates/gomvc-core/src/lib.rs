//! gomvc Core - Shared functionality for the gomvc scaffolding tool
//!
//! Standard paths, configuration loading and external process execution.

pub mod config;
pub mod paths;
pub mod process;

pub use config::Config;
pub use paths::Paths;
