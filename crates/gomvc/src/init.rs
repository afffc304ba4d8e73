//! Go module initialization
//!
//! The initializer is the only external collaborator. It runs in the project
//! root and is expected to leave the manifest (go.mod) behind on success.

use std::path::Path;

use gomvc_core::{process, Config};

use crate::module::ModuleId;

/// Result of running a module initializer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InitOutcome {
    /// Exited with status zero
    Success,
    /// Ran but exited non-zero (or was killed by a signal when `code` is None)
    Exited { code: Option<i32>, stderr: String },
    /// Could not be started at all
    LaunchFailed(String),
}

impl InitOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }

    /// Human-readable failure description
    pub fn describe(&self) -> String {
        match self {
            Self::Success => "success".to_string(),
            Self::Exited { code: Some(code), stderr } if stderr.is_empty() => {
                format!("exit status {}", code)
            }
            Self::Exited { code: Some(code), stderr } => format!("exit status {}: {}", code, stderr),
            Self::Exited { code: None, .. } => "terminated by signal".to_string(),
            Self::LaunchFailed(reason) => reason.clone(),
        }
    }
}

/// Something that initializes a Go module in a working directory
pub trait ModuleInitializer {
    fn run(&self, working_dir: &Path, module: &ModuleId) -> InitOutcome;
}

/// Runs an external command (`go mod init` by default) with the module appended
#[derive(Debug, Clone)]
pub struct CommandInitializer {
    program: String,
    args: Vec<String>,
}

impl CommandInitializer {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.init_program(), config.init_args().to_vec())
    }
}

impl Default for CommandInitializer {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl ModuleInitializer for CommandInitializer {
    fn run(&self, working_dir: &Path, module: &ModuleId) -> InitOutcome {
        let mut args = self.args.clone();
        args.push(module.as_str().to_string());

        match process::run_in(working_dir, &self.program, &args) {
            Ok(output) if output.status.success() => InitOutcome::Success,
            Ok(output) => InitOutcome::Exited {
                code: output.status.code(),
                stderr: process::stderr_text(&output),
            },
            Err(e) => InitOutcome::LaunchFailed(format!("{:#}", e)),
        }
    }
}

/// Skips initialization entirely (`--no-init`)
#[derive(Debug, Clone, Copy, Default)]
pub struct SkipInitializer;

impl ModuleInitializer for SkipInitializer {
    fn run(&self, working_dir: &Path, _module: &ModuleId) -> InitOutcome {
        tracing::info!(dir = %working_dir.display(), "skipping module initialization");
        InitOutcome::Success
    }
}
