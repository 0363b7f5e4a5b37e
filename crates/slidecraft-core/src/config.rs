//! Editor configuration.

use crate::camera::{MAX_ZOOM, MIN_ZOOM};
use crate::history::DEFAULT_HISTORY_CAPACITY;
use crate::interaction::MIN_OBJECT_SIZE;
use crate::snap::{GridSettings, MAX_GRID_SIZE, MIN_GRID_SIZE};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Offset applied to duplicated and pasted objects.
pub const PASTE_OFFSET: f64 = 20.0;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Tunables for an editor session. Every field is optional in JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EditorConfig {
    pub history_capacity: usize,
    pub min_object_size: f64,
    pub paste_offset: f64,
    pub min_zoom: f64,
    pub max_zoom: f64,
    /// Initial grid state.
    pub grid: GridSettings,
    pub min_grid_size: f64,
    pub max_grid_size: f64,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            min_object_size: MIN_OBJECT_SIZE,
            paste_offset: PASTE_OFFSET,
            min_zoom: MIN_ZOOM,
            max_zoom: MAX_ZOOM,
            grid: GridSettings::default(),
            min_grid_size: MIN_GRID_SIZE,
            max_grid_size: MAX_GRID_SIZE,
        }
    }
}

impl EditorConfig {
    /// Parse and validate a JSON config.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::debug!("Loaded editor config from {}", path.display());
        Ok(config)
    }

    /// Check that every value is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.history_capacity == 0 {
            return Err(ConfigError::Invalid("historyCapacity must be at least 1".into()));
        }
        if !(self.min_object_size > 0.0) {
            return Err(ConfigError::Invalid("minObjectSize must be positive".into()));
        }
        if !self.paste_offset.is_finite() {
            return Err(ConfigError::Invalid("pasteOffset must be finite".into()));
        }
        if !(self.min_zoom > 0.0) || !(self.min_zoom <= self.max_zoom) {
            return Err(ConfigError::Invalid(format!(
                "zoom bounds must be positive and ordered, got {}..{}",
                self.min_zoom, self.max_zoom
            )));
        }
        if !(self.min_grid_size > 0.0) || !(self.min_grid_size <= self.max_grid_size) {
            return Err(ConfigError::Invalid(format!(
                "grid size bounds must be positive and ordered, got {}..{}",
                self.min_grid_size, self.max_grid_size
            )));
        }
        if !(self.grid.size > 0.0) {
            return Err(ConfigError::Invalid("grid.size must be positive".into()));
        }
        Ok(())
    }

    /// Clamp a grid size to the configured range.
    pub fn clamp_grid_size(&self, size: f64) -> f64 {
        size.clamp(self.min_grid_size, self.max_grid_size)
    }
}
