//! Workspace layout configuration.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// File looked up in the workspace root when no `--config` is given.
pub const CONFIG_FILE_NAME: &str = "rn-appgen.toml";

/// Workspace configuration file contents
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkspaceConfig {
    #[serde(default)]
    pub workspace_layout: WorkspaceLayout,
}

/// Where generated projects live inside the workspace
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkspaceLayout {
    /// Root directory for applications, relative to the workspace root
    #[serde(default = "default_apps_dir")]
    pub apps_dir: String,
}

fn default_apps_dir() -> String {
    "apps".to_string()
}

impl Default for WorkspaceLayout {
    fn default() -> Self {
        Self {
            apps_dir: default_apps_dir(),
        }
    }
}

impl WorkspaceLayout {
    #[must_use]
    pub fn with_apps_dir(apps_dir: impl Into<String>) -> Self {
        Self {
            apps_dir: apps_dir.into(),
        }
    }
}

impl WorkspaceConfig {
    /// Load configuration from file, falling back to defaults
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            tracing::info!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: WorkspaceConfig = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        tracing::info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Load `rn-appgen.toml` from the workspace root, or built-in defaults
    pub fn load_default<P: AsRef<Path>>(root: P) -> Result<Self> {
        let path = root.as_ref().join(CONFIG_FILE_NAME);
        if path.exists() {
            return Self::load(&path);
        }

        tracing::info!("No config file found, using built-in defaults");
        Ok(Self::default())
    }

    /// Generate example configuration file
    pub fn example() -> Result<String> {
        toml::to_string_pretty(&Self::default()).context("Failed to serialize example config")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_layout_uses_apps() {
        assert_eq!(WorkspaceConfig::default().workspace_layout.apps_dir, "apps");
    }

    #[test]
    fn partial_table_falls_back_to_defaults() {
        let config: WorkspaceConfig = toml::from_str("[workspace_layout]\n").unwrap();
        assert_eq!(config.workspace_layout.apps_dir, "apps");
        let config: WorkspaceConfig = toml::from_str("").unwrap();
        assert_eq!(config.workspace_layout, WorkspaceLayout::default());
    }

    #[test]
    fn example_round_trips() {
        let example = WorkspaceConfig::example().unwrap();
        assert!(example.contains("apps_dir = \"apps\""));
        let parsed: WorkspaceConfig = toml::from_str(&example).unwrap();
        assert_eq!(parsed, WorkspaceConfig::default());
    }
}
