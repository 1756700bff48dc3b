//! Hook settings file parsing

use serde::{Deserialize, Serialize};

/// Location of the patch directory, relative to the project root.
pub const DEFAULT_PATCH_SUBDIR: &str = "scripts/patches";

/// File name of the applied-patches marker inside the framework directory.
pub const DEFAULT_MARKER_NAME: &str = ".patching-done";

/// External patch utility invoked for every apply and reverse.
pub const DEFAULT_TOOL: &str = "patch";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HookSettings {
    /// Patch directory, relative to the project root.
    pub patch_dir: String,

    /// Marker file name inside the framework directory.
    pub marker_name: String,

    /// Patch utility program name or path.
    pub tool: String,

    /// Strip level passed to the tool as `-p<N>`.
    pub strip: u32,
}

impl Default for HookSettings {
    fn default() -> Self {
        Self {
            patch_dir: DEFAULT_PATCH_SUBDIR.to_string(),
            marker_name: DEFAULT_MARKER_NAME.to_string(),
            tool: DEFAULT_TOOL.to_string(),
            strip: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = HookSettings::default();
        assert_eq!(settings.patch_dir, "scripts/patches");
        assert_eq!(settings.marker_name, ".patching-done");
        assert_eq!(settings.tool, "patch");
        assert_eq!(settings.strip, 0);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let settings: HookSettings = toml::from_str("tool = \"gpatch\"").unwrap();
        assert_eq!(settings.tool, "gpatch");
        assert_eq!(settings.patch_dir, "scripts/patches");
        assert_eq!(settings.strip, 0);
    }
}
