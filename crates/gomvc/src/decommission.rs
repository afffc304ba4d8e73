//! Skeleton teardown
//!
//! Removes exactly the top-level skeleton entries and the module manifest.
//! Nothing else under the root is touched. Missing entries are skipped, so a
//! second run is a no-op. There is no confirmation and no rollback.

use serde::Serialize;
use std::fs;
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};

use crate::error::DeleteError;
use crate::layout::TOP_LEVEL;

/// What a teardown run removed
#[derive(Debug, Clone, Default, Serialize)]
pub struct DecommissionReport {
    pub root: PathBuf,
    /// Entries removed, relative to root
    pub removed: Vec<String>,
    /// Whether the manifest was found and removed
    pub manifest_removed: bool,
}

/// Tears the skeleton down under a root directory
pub struct Decommissioner {
    manifest: String,
}

impl Default for Decommissioner {
    fn default() -> Self {
        Self::new("go.mod")
    }
}

impl Decommissioner {
    pub fn new(manifest: impl Into<String>) -> Self {
        Self {
            manifest: manifest.into(),
        }
    }

    pub fn decommission(&self, root: &Path) -> Result<DecommissionReport, DeleteError> {
        let mut report = DecommissionReport {
            root: root.to_path_buf(),
            ..Default::default()
        };

        for name in TOP_LEVEL {
            let path = root.join(name);
            if remove_entry(&path)? {
                tracing::debug!(entry = name, "removed");
                report.removed.push(name.to_string());
            }
        }

        let manifest = root.join(&self.manifest);
        if remove_manifest(&manifest)? {
            tracing::info!(manifest = %self.manifest, "deleted manifest");
            report.manifest_removed = true;
        }

        tracing::info!(root = %root.display(), removed = report.removed.len(), "skeleton removed");
        Ok(report)
    }
}

/// Unlink the manifest file, including a dangling symlink. Returns false when absent.
fn remove_manifest(path: &Path) -> Result<bool, DeleteError> {
    match fs::symlink_metadata(path) {
        Ok(_) => {}
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(false),
        Err(source) => {
            return Err(DeleteError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    }

    match fs::remove_file(path) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
        Err(source) => Err(DeleteError::Io {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Recursively remove whatever sits at `path`. Returns false when nothing was there.
fn remove_entry(path: &Path) -> Result<bool, DeleteError> {
    // symlink_metadata: a symlinked entry is unlinked, never followed
    let meta = match fs::symlink_metadata(path) {
        Ok(meta) => meta,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(false),
        Err(source) => {
            return Err(DeleteError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    let result: io::Result<()> = if meta.is_dir() {
        fs::remove_dir_all(path)
    } else {
        fs::remove_file(path)
    };

    match result {
        Ok(()) => Ok(true),
        // Vanished between the check and the removal
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
        Err(source) => Err(DeleteError::Io {
            path: path.to_path_buf(),
            source,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::FILES;
    use crate::module::ModuleId;
    use crate::provision::tests::StubInit;
    use crate::provision::Provisioner;
    use std::collections::BTreeMap;
    use tempfile::tempdir;
    use walkdir::WalkDir;

    /// Relative path -> file content (None for directories)
    fn snapshot(root: &Path) -> BTreeMap<PathBuf, Option<Vec<u8>>> {
        WalkDir::new(root)
            .min_depth(1)
            .into_iter()
            .filter_map(|e| e.ok())
            .map(|e| {
                let rel = e.path().strip_prefix(root).unwrap().to_path_buf();
                let content = e.file_type().is_file().then(|| fs::read(e.path()).unwrap());
                (rel, content)
            })
            .collect()
    }

    fn provision(root: &Path, module: &str) {
        Provisioner::new(StubInit::boxed())
            .provision(root, &ModuleId::parse(module).unwrap())
            .unwrap();
    }

    #[test]
    fn test_round_trip_restores_tree() {
        let tmp = tempdir().unwrap();
        let root = tmp.path();
        fs::write(root.join("README.md"), "# keep me\n").unwrap();
        fs::create_dir_all(root.join("docs/notes")).unwrap();
        fs::write(root.join("docs/notes/todo.txt"), "x").unwrap();

        let before = snapshot(root);
        provision(root, "example.com/u/p1");
        assert_ne!(snapshot(root), before);

        let report = Decommissioner::default().decommission(root).unwrap();
        assert_eq!(report.removed.len(), 8);
        assert!(report.manifest_removed);
        assert_eq!(snapshot(root), before);
    }

    #[test]
    fn test_unrelated_files_survive() {
        let tmp = tempdir().unwrap();
        let root = tmp.path();
        provision(root, "example.com/u/p2");

        fs::write(root.join("notes.txt"), "mine").unwrap();
        fs::write(root.join("go.sum"), "sums").unwrap();
        fs::create_dir_all(root.join("internal")).unwrap();

        Decommissioner::default().decommission(root).unwrap();

        assert_eq!(fs::read_to_string(root.join("notes.txt")).unwrap(), "mine");
        assert!(root.join("go.sum").exists());
        assert!(root.join("internal").is_dir());
        for name in TOP_LEVEL {
            assert!(!root.join(name).exists(), "{} still present", name);
        }
        assert!(!root.join("go.mod").exists());
    }

    #[test]
    fn test_removes_user_content_inside_skeleton() {
        let tmp = tempdir().unwrap();
        let root = tmp.path();
        provision(root, "example.com/u/p3");
        fs::write(root.join("controller/extra.go"), "package controller\n").unwrap();

        Decommissioner::default().decommission(root).unwrap();
        assert!(!root.join("controller").exists());
    }

    #[test]
    fn test_second_run_is_noop() {
        let tmp = tempdir().unwrap();
        provision(tmp.path(), "example.com/u/p4");

        let decommissioner = Decommissioner::default();
        decommissioner.decommission(tmp.path()).unwrap();
        let report = decommissioner.decommission(tmp.path()).unwrap();

        assert!(report.removed.is_empty());
        assert!(!report.manifest_removed);
    }

    #[test]
    fn test_partial_tree() {
        let tmp = tempdir().unwrap();
        fs::create_dir_all(tmp.path().join("views")).unwrap();
        // A plain file under a skeleton name is removed too
        fs::write(tmp.path().join("pkg"), "file").unwrap();

        let report = Decommissioner::default().decommission(tmp.path()).unwrap();
        assert_eq!(report.removed, vec!["pkg".to_string(), "views".to_string()]);
        assert!(!report.manifest_removed);
    }

    #[test]
    fn test_missing_root_is_ok() {
        let tmp = tempdir().unwrap();
        let report = Decommissioner::default()
            .decommission(&tmp.path().join("never-created"))
            .unwrap();
        assert!(report.removed.is_empty());
    }

    #[test]
    fn test_custom_manifest_name() {
        let tmp = tempdir().unwrap();
        fs::write(tmp.path().join("module.txt"), "m").unwrap();
        fs::write(tmp.path().join("go.mod"), "module other").unwrap();

        let report = Decommissioner::new("module.txt").decommission(tmp.path()).unwrap();
        assert!(report.manifest_removed);
        assert!(!tmp.path().join("module.txt").exists());
        assert!(tmp.path().join("go.mod").exists());
    }

    #[test]
    fn test_reprovision_after_teardown() {
        let tmp = tempdir().unwrap();
        provision(tmp.path(), "example.com/first");
        Decommissioner::default().decommission(tmp.path()).unwrap();
        provision(tmp.path(), "example.com/second");

        let main = fs::read_to_string(FILES[0].under(tmp.path())).unwrap();
        assert!(main.contains("example.com/second/router"));
    }

    #[cfg(unix)]
    #[test]
    fn test_dangling_manifest_symlink_is_removed() {
        let tmp = tempdir().unwrap();
        let manifest = tmp.path().join("go.mod");
        std::os::unix::fs::symlink(tmp.path().join("gone.mod"), &manifest).unwrap();

        let report = Decommissioner::default().decommission(tmp.path()).unwrap();

        assert!(report.manifest_removed);
        assert!(fs::symlink_metadata(&manifest).is_err());
    }

    #[cfg(unix)]
    #[test]
    fn test_failed_removal_aborts_without_rollback() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = tempdir().unwrap();
        let root = tmp.path();
        provision(root, "example.com/u/locked");

        // models/user.go cannot be unlinked while models is read-only
        let models = root.join("models");
        fs::set_permissions(&models, fs::Permissions::from_mode(0o555)).unwrap();

        // Permission bits do not bind root
        if fs::write(models.join(".check"), "").is_ok() {
            fs::set_permissions(&models, fs::Permissions::from_mode(0o755)).unwrap();
            return;
        }

        let result = Decommissioner::default().decommission(root);
        fs::set_permissions(&models, fs::Permissions::from_mode(0o755)).unwrap();

        match result {
            Err(DeleteError::Io { path, .. }) => assert!(path.starts_with(&models)),
            Ok(_) => panic!("teardown should fail"),
        }

        // Entries before models stay removed, later ones and the manifest are untouched
        assert!(!root.join("cmd").exists());
        assert!(!root.join("controller").exists());
        assert!(models.join("user.go").exists());
        for name in ["pkg", "config", "views", "router", "middleware", "go.mod"] {
            assert!(root.join(name).exists(), "{} removed after failure", name);
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_entry_is_unlinked_not_followed() {
        let tmp = tempdir().unwrap();
        let outside = tmp.path().join("outside");
        let root = tmp.path().join("root");
        fs::create_dir_all(&outside).unwrap();
        fs::create_dir_all(&root).unwrap();
        fs::write(outside.join("precious.txt"), "keep").unwrap();
        std::os::unix::fs::symlink(&outside, root.join("models")).unwrap();

        Decommissioner::default().decommission(&root).unwrap();

        assert!(!root.join("models").exists());
        assert!(outside.join("precious.txt").exists());
    }
}
