// Copyright 2025 the HackMap Authors
// SPDX-License-Identifier: Apache-2.0

//! User configuration read at startup.
//!
//! The file is TOML. It is looked up at the path named by `HACKMAP_CONFIG`,
//! falling back to `hackmap.toml` in the working directory. Every key is
//! optional:
//!
//! ```toml
//! dark_mode = true
//! default_label = "Idea"
//! label_font_size = 12.0
//! ```

use crate::settings;
use crate::theme::{self, ThemeMode};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Environment variable naming an explicit config file
pub const CONFIG_ENV: &str = "HACKMAP_CONFIG";

/// Default file name looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "hackmap.toml";

/// Startup preferences
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Start with the dark palette
    pub dark_mode: bool,
    /// Label given to freshly created nodes
    pub default_label: String,
    /// Label font size on the canvas
    pub label_font_size: f32,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            dark_mode: true,
            default_label: settings::node::DEFAULT_LABEL.to_string(),
            label_font_size: theme::size::LABEL_FONT_SIZE,
        }
    }
}

impl EditorConfig {
    /// Parse a TOML document
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).context("Invalid configuration")
    }

    /// Read a config file
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_toml(&text).with_context(|| format!("Failed to parse {}", path.display()))
    }

    /// Find and read the config file; defaults when absent or broken
    pub fn discover() -> Self {
        let path = std::env::var_os(CONFIG_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME));

        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Self::default();
        }

        match Self::load(&path) {
            Ok(config) => {
                tracing::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                tracing::warn!("{:#}; using defaults", e);
                Self::default()
            }
        }
    }

    pub fn theme_mode(&self) -> ThemeMode {
        if self.dark_mode {
            ThemeMode::Dark
        } else {
            ThemeMode::Light
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        assert_eq!(EditorConfig::from_toml("").unwrap(), EditorConfig::default());
    }

    #[test]
    fn partial_file_overrides_only_given_keys() {
        let config = EditorConfig::from_toml("dark_mode = false\n").unwrap();
        assert!(!config.dark_mode);
        assert_eq!(config.default_label, "Idea");
        assert_eq!(config.theme_mode(), ThemeMode::Light);
    }

    #[test]
    fn malformed_file_is_an_error() {
        assert!(EditorConfig::from_toml("dark_mode = 'yes'").is_err());
    }

    #[test]
    fn load_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hackmap.toml");
        std::fs::write(&path, "default_label = \"Idee\"\nlabel_font_size = 14.0\n").unwrap();
        let config = EditorConfig::load(&path).unwrap();
        assert_eq!(config.default_label, "Idee");
        assert_eq!(config.label_font_size, 14.0);
    }
}
