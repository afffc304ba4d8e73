//! Standard paths used by gomvc

use std::path::PathBuf;

/// Environment variable that points at an explicit config file
pub const CONFIG_ENV: &str = "GOMVC_CONFIG";

/// Standard gomvc paths
pub struct Paths {
    /// Config directory (~/.config/gomvc)
    pub config: PathBuf,
}

impl Default for Paths {
    fn default() -> Self {
        Self::new()
    }
}

impl Paths {
    pub fn new() -> Self {
        let config = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("~/.config"))
            .join("gomvc");

        Self { config }
    }

    /// Create with a custom config directory (for testing)
    pub fn with_config_dir(config: PathBuf) -> Self {
        Self { config }
    }

    /// Path of the config file, honoring `GOMVC_CONFIG`
    pub fn config_file(&self) -> PathBuf {
        std::env::var_os(CONFIG_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| self.config.join("config.json"))
    }
}
