//! Patch orchestration
//!
//! Drives one hook invocation: reverse whatever a previous run applied,
//! then apply the current patch set, recording each applied patch in the
//! marker. Repeated runs are idempotent, and a changed patch set never
//! stacks on top of the old one.

use crate::patch::{Marker, PatchSet, PatchTool};
use crate::types::{PatchError, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Outcome of one `apply` invocation.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ApplyReport {
    /// Whether a previous run's patches were reversed first.
    pub reversed: bool,

    /// Number of patch files applied this run.
    pub applied: usize,
}

pub struct PatchOrchestrator {
    framework_dir: PathBuf,
    patches: PatchSet,
    marker: Marker,
    tool: PatchTool,
}

impl PatchOrchestrator {
    /// Set up an orchestrator for one framework directory.
    ///
    /// Both directories must already exist; failing here keeps a
    /// misconfigured build from mutating anything.
    pub fn new(
        framework_dir: impl Into<PathBuf>,
        patch_dir: impl Into<PathBuf>,
        marker_path: impl Into<PathBuf>,
        tool: PatchTool,
    ) -> Result<Self> {
        let framework_dir = framework_dir.into();
        if !framework_dir.is_dir() {
            return Err(PatchError::FrameworkDirMissing(framework_dir));
        }

        let patches = PatchSet::new(patch_dir)?;
        let marker = Marker::new(marker_path);

        Ok(Self {
            framework_dir,
            patches,
            marker,
            tool,
        })
    }

    pub fn framework_dir(&self) -> &Path {
        &self.framework_dir
    }

    /// Bring the framework directory in line with the patch directory.
    ///
    /// A marker left by a previous run is reverse-applied and deleted
    /// first, so the current set always lands on a pristine tree. Each
    /// patch is appended to the marker only after the tool accepted it;
    /// after a mid-run failure the marker describes exactly the applied
    /// prefix, and the next run's reversal undoes exactly that prefix.
    pub fn apply(&self) -> Result<ApplyReport> {
        let mut report = ApplyReport {
            reversed: self.revert()?,
            applied: 0,
        };

        self.marker.reset()?;

        for patch_file in self.patches.files()? {
            info!("Applying {}", patch_file.display());
            self.tool.apply(&self.framework_dir, &patch_file)?;
            self.marker.append(&patch_file)?;
            report.applied += 1;
        }

        info!(
            "Applied {} patch(es) to {}",
            report.applied,
            self.framework_dir.display()
        );
        Ok(report)
    }

    /// Undo whatever a previous run applied, if anything.
    ///
    /// Returns `true` when a marker was found and removed. An empty marker
    /// records an empty patch set, so nothing is fed to the tool for it.
    pub fn revert(&self) -> Result<bool> {
        if !self.marker.exists() {
            debug!(
                "No marker at {}, nothing to revert",
                self.marker.path().display()
            );
            return Ok(false);
        }

        if self.marker.read()?.is_empty() {
            info!("Removing empty marker {}", self.marker.path().display());
        } else {
            info!(
                "Reversing previously applied patches recorded in {}",
                self.marker.path().display()
            );
            self.tool.reverse(&self.framework_dir, self.marker.path())?;
        }

        self.marker.remove()?;
        Ok(true)
    }
}
