//! Read-only inspection of a skeleton

use serde::Serialize;
use std::path::Path;

use crate::layout::{self, DIRECTORIES, FILES};

/// Presence of one skeleton entry
#[derive(Debug, Clone, Serialize)]
pub struct Entry {
    pub path: String,
    pub present: bool,
}

/// Which parts of the skeleton exist under a root
#[derive(Debug, Clone, Serialize)]
pub struct SkeletonStatus {
    pub directories: Vec<Entry>,
    pub files: Vec<Entry>,
    pub manifest: Entry,
}

impl SkeletonStatus {
    /// Every directory, file and the manifest exist
    pub fn is_complete(&self) -> bool {
        self.entries().all(|e| e.present)
    }

    /// Nothing from the skeleton exists
    pub fn is_empty(&self) -> bool {
        self.entries().all(|e| !e.present)
    }

    pub fn entries(&self) -> impl Iterator<Item = &Entry> {
        self.directories
            .iter()
            .chain(self.files.iter())
            .chain(std::iter::once(&self.manifest))
    }
}

/// Inspect `root` for the skeleton and a manifest named `manifest`
pub fn inspect(root: &Path, manifest: &str) -> SkeletonStatus {
    let directories = DIRECTORIES
        .into_iter()
        .map(|dir| Entry {
            path: dir.to_string(),
            present: layout::join(root, dir).is_dir(),
        })
        .collect();

    let files = FILES
        .into_iter()
        .map(|file| Entry {
            path: file.path.to_string(),
            present: file.under(root).is_file(),
        })
        .collect();

    SkeletonStatus {
        directories,
        files,
        manifest: Entry {
            path: manifest.to_string(),
            present: root.join(manifest).is_file(),
        },
    }
}
