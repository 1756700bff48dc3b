//! External patch tool invocation
//!
//! Wraps a `patch(1)`-compatible utility. Every invocation has the shape
//! `<tool> -p<N> [-R] -d <framework dir> -i <diff>`, with stdin closed and
//! both output streams captured so a failing patch surfaces as an error
//! instead of silent drift in the framework tree.

use crate::types::{PatchError, Result};
use std::io::ErrorKind;
use std::path::Path;
use std::process::{Command, Stdio};
use tracing::debug;

#[derive(Debug, Clone)]
pub struct PatchTool {
    program: String,
    strip: u32,
}

impl PatchTool {
    pub fn new(program: impl Into<String>, strip: u32) -> Self {
        Self {
            program: program.into(),
            strip,
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Apply a diff against the framework directory.
    pub fn apply(&self, framework_dir: &Path, diff: &Path) -> Result<()> {
        self.run(framework_dir, diff, false)
    }

    /// Reverse-apply a diff against the framework directory.
    pub fn reverse(&self, framework_dir: &Path, diff: &Path) -> Result<()> {
        self.run(framework_dir, diff, true)
    }

    fn run(&self, framework_dir: &Path, diff: &Path, reverse: bool) -> Result<()> {
        // The tool chdirs into -d before resolving -i, so the diff path
        // must be handed over absolute.
        let diff_abs = if diff.is_absolute() {
            diff.to_path_buf()
        } else {
            std::env::current_dir()?.join(diff)
        };

        let mut cmd = Command::new(&self.program);
        cmd.arg(format!("-p{}", self.strip));
        if reverse {
            cmd.arg("-R");
        }
        cmd.arg("-d").arg(framework_dir);
        cmd.arg("-i").arg(&diff_abs);
        // Never block on a prompt mid-build
        cmd.stdin(Stdio::null());

        debug!("Invoking {:?}", cmd);

        let output = cmd.output().map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                PatchError::ToolNotFound(self.program.clone())
            } else {
                PatchError::Io(e)
            }
        })?;

        if !output.status.success() {
            let mut detail = String::from_utf8_lossy(&output.stderr).trim().to_string();
            if detail.is_empty() {
                detail = String::from_utf8_lossy(&output.stdout).trim().to_string();
            }
            return Err(PatchError::ToolRejected(
                diff.to_path_buf(),
                format!("{} ({})", detail, output.status),
            ));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let stdout = stdout.trim();
        if !stdout.is_empty() {
            debug!("{}: {}", self.program, stdout);
        }

        Ok(())
    }
}

impl Default for PatchTool {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_TOOL, 0)
    }
}
