use thiserror::Error;
use std::path::PathBuf;

#[derive(Error, Debug)]
pub enum PatchError {
    #[error("Patch directory not found: {0}. Check the build environment configuration")]
    PatchDirMissing(PathBuf),

    #[error("Framework directory not found: {0}")]
    FrameworkDirMissing(PathBuf),

    #[error("Patch tool not runnable: {0}. Install it or set `tool` in the hook config")]
    ToolNotFound(String),

    #[error("Patch tool rejected {0}: {1}")]
    ToolRejected(PathBuf, String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PatchError>;
