//! The fixed skeleton layout
//!
//! Directory and file sets are compiled in. Teardown only ever touches
//! `TOP_LEVEL` plus the manifest, so these lists are the deletion boundary.

use std::path::{Path, PathBuf};

use crate::templates;

/// Directories created under the project root, in creation order
pub const DIRECTORIES: [&str; 8] = [
    "cmd/api",
    "controller",
    "models",
    "pkg",
    "config",
    "views",
    "router",
    "middleware",
];

/// Top-level entries removed on teardown
pub const TOP_LEVEL: [&str; 8] = [
    "cmd",
    "controller",
    "models",
    "pkg",
    "config",
    "views",
    "router",
    "middleware",
];

/// A generated file: where it goes and what it contains
#[derive(Debug, Clone, Copy)]
pub struct SkeletonFile {
    /// Path relative to the project root
    pub path: &'static str,
    /// Template body with {{MODULE}} placeholders
    pub template: &'static str,
}

impl SkeletonFile {
    pub fn under(&self, root: &Path) -> PathBuf {
        join(root, self.path)
    }
}

/// Generated files, in write order
pub const FILES: [SkeletonFile; 6] = [
    SkeletonFile { path: "cmd/api/main.go", template: templates::MAIN },
    SkeletonFile { path: "controller/home_controller.go", template: templates::CONTROLLER },
    SkeletonFile { path: "models/user.go", template: templates::MODEL },
    SkeletonFile { path: "pkg/utility.go", template: templates::UTILITY },
    SkeletonFile { path: "router/router.go", template: templates::ROUTER },
    SkeletonFile { path: "middleware/request_logger.go", template: templates::MIDDLEWARE },
];

/// Join a slash-separated relative path onto `root` component by component
pub fn join(root: &Path, rel: &str) -> PathBuf {
    rel.split('/').fold(root.to_path_buf(), |acc, part| acc.join(part))
}
