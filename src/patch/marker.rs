//! Applied-patches marker
//!
//! The marker is both a flag and a log: its existence says "a previous run
//! applied patches", and its bytes are the concatenation of every applied
//! patch file in application order. Reverse-applying that content undoes
//! exactly what was done.

use crate::types::Result;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

pub struct Marker {
    path: PathBuf,
}

impl Marker {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Create the marker empty, truncating any previous content.
    pub fn reset(&self) -> Result<()> {
        std::fs::write(&self.path, b"")?;
        Ok(())
    }

    /// Append a patch file's raw bytes to the log.
    pub fn append(&self, patch_file: &Path) -> Result<()> {
        let content = std::fs::read(patch_file)?;

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(&content)?;

        Ok(())
    }

    pub fn read(&self) -> Result<Vec<u8>> {
        Ok(std::fs::read(&self.path)?)
    }

    pub fn remove(&self) -> Result<()> {
        std::fs::remove_file(&self.path)?;
        Ok(())
    }
}
