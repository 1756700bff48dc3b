//! Settings discovery with 3-tier precedence
//!
//! Priority order (highest to lowest):
//! 1. Project settings (<project root>/.patchhook.toml)
//! 2. $PATCHHOOK_CONFIG (explicit file path)
//! 3. User-global settings (~/.config/patchhook/config.toml)
//!
//! Every key is optional; anything unset falls back to the built-in
//! defaults. CLI flags override whatever is loaded here.

use crate::config::HookSettings;
use crate::types::{PatchError, Result};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Load hook settings for a project, falling back to defaults when no
/// settings file exists anywhere.
pub fn load_settings(project_root: &Path) -> Result<HookSettings> {
    let mut candidates = Vec::new();

    // Project-specific settings
    candidates.push(project_root.join(".patchhook.toml"));

    // Environment variable
    if let Ok(config_path) = std::env::var("PATCHHOOK_CONFIG") {
        candidates.push(PathBuf::from(config_path));
    }

    // User-global settings
    if let Some(config_dir) = dirs::config_dir() {
        candidates.push(config_dir.join("patchhook").join("config.toml"));
    }

    for path in &candidates {
        if path.exists() {
            debug!("Loading hook settings from: {}", path.display());
            return load_settings_file(path);
        }
    }

    debug!("No settings file found, using defaults");
    Ok(HookSettings::default())
}

/// Parse a specific settings file.
pub fn load_settings_file(path: &Path) -> Result<HookSettings> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| PatchError::Config(format!("Failed to read {}: {}", path.display(), e)))?;

    let settings: HookSettings = toml::from_str(&content)
        .map_err(|e| PatchError::Config(format!("Failed to parse {}: {}", path.display(), e)))?;

    Ok(settings)
}
