//! gomvc configuration
//!
//! A small JSON file controls which command initializes the Go module and
//! which manifest file that command leaves behind. Every field is optional.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::paths::Paths;

/// Tool configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Program and leading arguments; the module identifier is appended last
    pub init_command: Vec<String>,
    /// Manifest file created by the init command, relative to the project root
    pub manifest: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            init_command: vec!["go".into(), "mod".into(), "init".into()],
            manifest: "go.mod".into(),
        }
    }
}

impl Config {
    /// Load config from the standard location, falling back to defaults
    pub fn load(paths: &Paths) -> Result<Self> {
        Self::load_from(&paths.config_file())
    }

    /// Load config from an explicit file; a missing file yields defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let mut config: Config = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        // An empty command cannot be spawned
        if config.init_command.is_empty() {
            tracing::warn!("init_command is empty, using default");
            config.init_command = Self::default().init_command;
        }
        if config.manifest.trim().is_empty() {
            config.manifest = Self::default().manifest;
        }

        Ok(config)
    }

    /// Program to spawn for module initialization
    pub fn init_program(&self) -> &str {
        self.init_command.first().map(String::as_str).unwrap_or("go")
    }

    /// Arguments preceding the module identifier
    pub fn init_args(&self) -> &[String] {
        self.init_command.get(1..).unwrap_or_default()
    }
}
