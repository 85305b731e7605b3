/// Tunable game parameters.
///
/// Every field has a default, so a JSON document only needs to name the
/// knobs it changes.  Values are checked by [`GameConfig::validate`] and a
/// session refuses to start with an out-of-range configuration.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Horizontal margin kept clear on both sides when spawning food.
pub const SPAWN_MARGIN: u32 = 50;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Viewport width in pixels.
    pub viewport_width: u32,
    /// Viewport height in pixels; food falling past it counts as a miss.
    pub viewport_height: u32,
    /// Seconds between two spawns.
    pub spawn_interval_secs: f64,
    /// Misses allowed before the game ends.
    pub max_misses: u32,
    /// Number of fingertip positions kept for the trail.
    pub trail_capacity: usize,
    /// Downward acceleration of sliced halves, pixels per tick squared.
    pub gravity: f32,
    /// Horizontal speed given to each half when an item is sliced.
    pub half_dx: f32,
    /// Fixed RNG seed for a reproducible spawn sequence.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            viewport_width: 640,
            viewport_height: 480,
            spawn_interval_secs: 2.0,
            max_misses: 5,
            trail_capacity: 20,
            gravity: 0.2,
            half_dx: 2.0,
            seed: None,
        }
    }
}

impl GameConfig {
    pub fn width(&self) -> f32 {
        self.viewport_width as f32
    }

    pub fn height(&self) -> f32 {
        self.viewport_height as f32
    }

    /// Spawn cadence as a `Duration`.  Only meaningful on a validated config.
    pub fn spawn_interval(&self) -> Duration {
        Duration::try_from_secs_f64(self.spawn_interval_secs).unwrap_or(Duration::MAX)
    }

    /// Reject out-of-range values instead of clamping them.
    pub fn validate(&self) -> Result<()> {
        if self.viewport_width == 0 {
            return Err(Error::invalid("viewport_width", "must be positive"));
        }
        if self.viewport_height == 0 {
            return Err(Error::invalid("viewport_height", "must be positive"));
        }
        if self.viewport_width <= 2 * SPAWN_MARGIN {
            return Err(Error::invalid(
                "viewport_width",
                format!(
                    "must exceed {} so food can spawn inside the side margins",
                    2 * SPAWN_MARGIN
                ),
            ));
        }
        if !self.spawn_interval_secs.is_finite() || self.spawn_interval_secs <= 0.0 {
            return Err(Error::invalid(
                "spawn_interval_secs",
                format!("must be a positive number of seconds, got {}", self.spawn_interval_secs),
            ));
        }
        if self.max_misses == 0 {
            return Err(Error::invalid("max_misses", "must be at least 1"));
        }
        if self.trail_capacity == 0 {
            return Err(Error::invalid("trail_capacity", "must be at least 1"));
        }
        if !self.gravity.is_finite() {
            return Err(Error::invalid("gravity", "must be finite"));
        }
        if !self.half_dx.is_finite() {
            return Err(Error::invalid("half_dx", "must be finite"));
        }
        Ok(())
    }

    /// Parse and validate a JSON document.
    pub fn from_json_str(text: &str) -> Result<Self> {
        let config: GameConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| Error::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json_str(&text)?;
        log::info!("loaded configuration from {}", path.display());
        Ok(config)
    }
}
