//=========================================================================
// Game Configuration
//=========================================================================
//
// User-facing settings, loaded from JSON. Every field has a default so
// partial files are valid.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::fs;
use std::path::Path;

use log::{info, warn};
use serde::{Deserialize, Serialize};

//=== Internal Dependencies ===============================================

use crate::error::ConfigError;

//=== GameConfig ==========================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Mouse up looks down.
    pub invert_y: bool,
    /// Allow free pitch while driving; otherwise pitch is pinned.
    pub vehicle_free_look: bool,
    /// Logic thread rate.
    pub ticks_per_second: f64,
    /// Capacity of the platform → core channel.
    pub channel_capacity: usize,
    pub window_title: String,
    /// Initial inner size in logical pixels.
    pub window_size: [u32; 2],
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            invert_y: false,
            vehicle_free_look: true,
            ticks_per_second: 60.0,
            channel_capacity: 128,
            window_title: "Streetwise".to_string(),
            window_size: [800, 600],
        }
    }
}

impl GameConfig {
    /// Reads and parses a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json_str(&text)?;
        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Parses a JSON config and repairs out-of-range values.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let mut config: Self = serde_json::from_str(json)?;
        config.sanitize();
        Ok(config)
    }

    /// Replaces unusable rate and capacity values with defaults.
    fn sanitize(&mut self) {
        let defaults = Self::default();
        if !(self.ticks_per_second.is_finite() && self.ticks_per_second > 0.0) {
            warn!(
                "Invalid ticks_per_second {}, using {}",
                self.ticks_per_second, defaults.ticks_per_second
            );
            self.ticks_per_second = defaults.ticks_per_second;
        }
        if self.channel_capacity == 0 {
            warn!("Invalid channel_capacity 0, using {}", defaults.channel_capacity);
            self.channel_capacity = defaults.channel_capacity;
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
