//! Process execution utilities

use anyhow::{Context, Result};
use std::path::Path;
use std::process::{Command, Output};

/// Run a program to completion in `dir`, capturing its output.
///
/// Blocks until the child exits; there is no timeout.
pub fn run_in<S: AsRef<str>>(dir: &Path, program: &str, args: &[S]) -> Result<Output> {
    tracing::debug!(program, dir = %dir.display(), "spawning");

    Command::new(program)
        .args(args.iter().map(|a| a.as_ref()))
        .current_dir(dir)
        .output()
        .with_context(|| format!("Failed to run {}", program))
}

/// Trimmed stderr of a finished process, lossily decoded
pub fn stderr_text(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).trim().to_string()
}
