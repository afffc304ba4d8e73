//! Skeleton provisioning
//!
//! Provisioning is an ordered list of steps. Every step after module
//! initialization is idempotent: directories are created with
//! `create_dir_all` and existing files are never overwritten. The first
//! failure aborts the run and nothing is rolled back, so re-running the same
//! command finishes a partial tree.

use serde::Serialize;
use std::fs::{self, File, OpenOptions};
use std::io::{self, ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::error::{IoPath, ProvisionError};
use crate::init::ModuleInitializer;
use crate::layout::{self, SkeletonFile, DIRECTORIES, FILES};
use crate::module::ModuleId;
use crate::variables::Variables;

/// One provisioning step
#[derive(Debug, Clone, Copy)]
pub enum Step {
    /// Make sure the project root exists
    EnsureRoot,
    /// Run the module initializer in the root
    InitModule,
    /// Create a skeleton directory (relative path)
    CreateDir(&'static str),
    /// Render and write a skeleton file unless it already exists
    WriteFile(SkeletonFile),
}

/// The fixed provisioning plan, in execution order
pub fn plan() -> Vec<Step> {
    let mut steps = vec![Step::EnsureRoot, Step::InitModule];
    steps.extend(DIRECTORIES.into_iter().map(Step::CreateDir));
    steps.extend(FILES.into_iter().map(Step::WriteFile));
    steps
}

/// What a provisioning run did
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProvisionReport {
    pub root: PathBuf,
    pub module: String,
    /// Directories ensured, relative to root
    pub directories: Vec<String>,
    /// Files written by this run
    pub written: Vec<String>,
    /// Files left alone because they already existed
    pub skipped: Vec<String>,
}

/// Creates the skeleton under a root directory
pub struct Provisioner {
    initializer: Box<dyn ModuleInitializer>,
}

impl Provisioner {
    pub fn new(initializer: Box<dyn ModuleInitializer>) -> Self {
        Self { initializer }
    }

    /// Provision the full skeleton under `root` for `module`
    pub fn provision(&self, root: &Path, module: &ModuleId) -> Result<ProvisionReport, ProvisionError> {
        self.provision_with(root, module, |_| {})
    }

    /// Like [`provision`](Self::provision), calling `on_step` as each step completes
    pub fn provision_with<F>(
        &self,
        root: &Path,
        module: &ModuleId,
        mut on_step: F,
    ) -> Result<ProvisionReport, ProvisionError>
    where
        F: FnMut(&Step),
    {
        let vars = Variables::new(module);
        let mut report = ProvisionReport {
            root: root.to_path_buf(),
            module: module.to_string(),
            ..Default::default()
        };

        for step in plan() {
            self.execute(step, root, module, &vars, &mut report)?;
            on_step(&step);
        }

        tracing::info!(
            root = %root.display(),
            written = report.written.len(),
            skipped = report.skipped.len(),
            "skeleton provisioned"
        );

        Ok(report)
    }

    fn execute(
        &self,
        step: Step,
        root: &Path,
        module: &ModuleId,
        vars: &Variables,
        report: &mut ProvisionReport,
    ) -> Result<(), ProvisionError> {
        match step {
            Step::EnsureRoot => fs::create_dir_all(root).at(root),

            Step::InitModule => {
                let outcome = self.initializer.run(root, module);
                if !outcome.is_success() {
                    tracing::warn!(module = %module, outcome = %outcome.describe(), "module init failed");
                    return Err(ProvisionError::ModuleInitFailed(outcome.describe()));
                }
                tracing::info!(module = %module, "initialized go module");
                Ok(())
            }

            Step::CreateDir(rel) => {
                let path = layout::join(root, rel);
                fs::create_dir_all(&path).at(&path)?;
                tracing::debug!(dir = rel, "directory ready");
                report.directories.push(rel.to_string());
                Ok(())
            }

            Step::WriteFile(file) => {
                let path = file.under(root);
                if write_new(&path, &vars.substitute(file.template))? {
                    tracing::debug!(file = file.path, "wrote file");
                    report.written.push(file.path.to_string());
                } else {
                    tracing::debug!(file = file.path, "file exists, skipping");
                    report.skipped.push(file.path.to_string());
                }
                Ok(())
            }
        }
    }
}

/// Write `content` to a new file. Returns false when something already exists at `path`.
fn write_new(path: &Path, content: &str) -> Result<bool, ProvisionError> {
    write_new_with(path, |file| file.write_all(content.as_bytes()))
}

/// Create `path` exclusively and fill it with `fill`.
///
/// A file whose fill fails is removed again, otherwise later runs would skip
/// it as existing and never repair it.
fn write_new_with<F>(path: &Path, fill: F) -> Result<bool, ProvisionError>
where
    F: FnOnce(&mut File) -> io::Result<()>,
{
    let mut file = match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::AlreadyExists => return Ok(false),
        Err(e) => return Err(e).at(path),
    };

    if let Err(e) = fill(&mut file) {
        drop(file);
        if let Err(cleanup) = fs::remove_file(path) {
            tracing::warn!(file = %path.display(), error = %cleanup, "failed to remove partial file");
        }
        return Err(e).at(path);
    }

    Ok(true)
}
