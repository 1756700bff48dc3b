//! Patch set listing

use crate::types::{PatchError, Result};
use std::path::{Path, PathBuf};
use tracing::warn;

/// The directory of patch files for one project.
///
/// Every regular file in the directory is a unified diff meant to be
/// applied with zero path-stripping against the framework directory.
pub struct PatchSet {
    dir: PathBuf,
}

impl PatchSet {
    /// Open a patch directory.
    ///
    /// A missing patch directory means the build environment is
    /// misconfigured, so this fails before anything touches the framework
    /// tree.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        if !dir.is_dir() {
            return Err(PatchError::PatchDirMissing(dir));
        }
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// List the patch files, sorted by file name.
    ///
    /// Filesystem enumeration order differs across platforms and stacked
    /// patches depend on their application order, so the listing is pinned
    /// to byte-wise lexicographic file-name order. Non-file entries are
    /// skipped.
    pub fn files(&self) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();

        for entry in std::fs::read_dir(&self.dir)? {
            let entry = entry?;
            if entry.file_type()?.is_file() {
                files.push(entry.path());
            } else {
                warn!(
                    "Skipping non-file entry in patch directory: {}",
                    entry.path().display()
                );
            }
        }

        files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
        Ok(files)
    }
}
