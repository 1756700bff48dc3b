//! Patchhook - build-time patch hook for vendored framework sources
//!
//! Keeps a vendored third-party source tree in sync with a project's
//! directory of unified-diff patches. Patches are applied exactly once; a
//! marker file inside the framework directory records exactly what was
//! applied, and a later run reverses the recorded set before applying the
//! current one, so repeated runs never stack or drift.

pub mod config;
pub mod patch;
pub mod types;

pub use config::{load_settings, HookSettings};
pub use patch::{ApplyReport, Marker, PatchOrchestrator, PatchSet, PatchTool};
pub use types::PatchError;
