//! Pencil configuration
//!
//! Stores pencil defaults in `~/.config/pencil-durability/config.yaml`.
//! Every field is optional: an absent field falls back to its default, while
//! an explicit `0` is kept.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default point durability, length and eraser durability
pub const DEFAULT_POINT_DURABILITY: u32 = 10;
pub const DEFAULT_LENGTH: u32 = 10;
pub const DEFAULT_ERASER_DURABILITY: u32 = 10;

/// Options recognized when building a pencil
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PencilConfig {
    /// Units of graphite available after each sharpening
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub point_durability: Option<u32>,
    /// Number of times the pencil can be sharpened
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<u32>,
    /// Units of eraser available
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eraser_durability: Option<u32>,
}

impl PencilConfig {
    pub fn point_durability(&self) -> u32 {
        self.point_durability.unwrap_or(DEFAULT_POINT_DURABILITY)
    }

    pub fn length(&self) -> u32 {
        self.length.unwrap_or(DEFAULT_LENGTH)
    }

    pub fn eraser_durability(&self) -> u32 {
        self.eraser_durability.unwrap_or(DEFAULT_ERASER_DURABILITY)
    }

    /// Layer `overrides` on top of `self`, field by field
    pub fn merge(self, overrides: PencilConfig) -> Self {
        Self {
            point_durability: overrides.point_durability.or(self.point_durability),
            length: overrides.length.or(self.length),
            eraser_durability: overrides.eraser_durability.or(self.eraser_durability),
        }
    }

    /// Parse config from a YAML string
    pub fn from_yaml_str(content: &str) -> Result<Self, serde_yaml::Error> {
        // An empty document deserializes to unit, not a map
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
    }

    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        Self::load_from(&path)
    }

    /// Load config from a specific file, or return defaults if it can't be read
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_yaml_str(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save config to the default location
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> Result<(), String> {
        let path = crate::config_paths::config_file()
            .ok_or_else(|| "No config directory available".to_string())?;
        self.save_to(&path)
    }

    /// Save config to a specific file
    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }
}
