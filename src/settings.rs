//! Session configuration
//!
//! Fixed for a session: playfield bounds, ball speed, launch angle and the
//! sprite footprints the entities are sized from. Stored as JSON.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::{BounceMode, Extent, Playfield};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Arena bounds
    pub playfield: Playfield,

    // === Ball ===
    /// Units travelled per tick
    pub ball_speed: f32,
    /// Direction of a fresh launch, degrees (90 = straight up)
    pub launch_angle_deg: f32,
    /// Where the ball spawns before it first snaps to the paddle
    pub ball_start: (f32, f32),

    // === Footprints (width, height) ===
    pub ball_size: (f32, f32),
    pub paddle_size: (f32, f32),
    pub brick_size: (f32, f32),

    /// Clamp the paddle offset before computing the bounce angle.
    /// Off by default so bounces match the classic formula exactly.
    pub clamp_bounce_offset: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            playfield: Playfield::default(),

            ball_speed: BALL_SPEED,
            launch_angle_deg: LAUNCH_ANGLE_DEG,
            ball_start: BALL_START,

            ball_size: BALL_SIZE,
            paddle_size: PADDLE_SIZE,
            brick_size: BRICK_SIZE,

            clamp_bounce_offset: false,
        }
    }
}

impl Settings {
    pub fn ball_extent(&self) -> Extent {
        Extent::from_size(self.ball_size)
    }

    pub fn paddle_extent(&self) -> Extent {
        Extent::from_size(self.paddle_size)
    }

    pub fn brick_extent(&self) -> Extent {
        Extent::from_size(self.brick_size)
    }

    pub fn bounce_mode(&self) -> BounceMode {
        if self.clamp_bounce_offset {
            BounceMode::Clamped
        } else {
            BounceMode::Unclamped
        }
    }

    /// Parse settings from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load settings from a JSON file, falling back to defaults
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    return settings;
                }
                Err(e) => log::warn!("Invalid settings in {}: {}", path.display(), e),
            },
            Err(e) => log::warn!("Could not read {}: {}", path.display(), e),
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings as pretty JSON
    pub fn save(&self, path: &Path) -> std::io::Result<()> {
        let json = self.to_json().map_err(std::io::Error::other)?;
        std::fs::write(path, json)?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }
}
