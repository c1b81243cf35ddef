//! Game settings
//!
//! Loaded once at startup and never mutated during play. Every key is
//! optional in the JSON file; missing keys fall back to [`Settings::default`].

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::entities::{EntityKind, Size};

/// Errors raised while loading or validating settings
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// The settings file could not be read
    #[error("failed to read settings file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The settings file is not valid JSON for [`Settings`]
    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),

    /// A value is out of its allowed range
    #[error("invalid setting `{key}`: {reason}")]
    Invalid { key: &'static str, reason: String },
}

/// An RGB color triple
pub type Rgb = [u8; 3];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Screen ===
    pub caption: String,
    pub bg_color: Rgb,
    /// Target frames per second
    pub frame_rate: u32,
    /// World units covered by one terminal cell horizontally
    pub cell_width: f32,
    /// World units covered by one terminal cell vertically
    pub cell_height: f32,

    // === Ship ===
    pub ship_speed: f32,
    /// Ships available at the start of a game, including the one in play
    pub ship_limit: u32,
    pub ship_width: f32,
    pub ship_height: f32,
    /// Non-interactive pause after the ship is hit
    pub hit_pause_ms: u64,

    // === Bullets ===
    pub bullet_speed: f32,
    pub bullets_allowed: usize,
    pub bullet_width: f32,
    pub bullet_height: f32,
    pub bullet_color: Rgb,

    // === Aliens ===
    pub alien_speed: f32,
    pub alien_width: f32,
    pub alien_height: f32,
    pub fleet_drop_speed: f32,

    // === Assets ===
    pub theme_song: PathBuf,
    pub firing_sound: PathBuf,
    pub log_file: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            caption: "Galaga".to_string(),
            bg_color: [0, 0, 0],
            frame_rate: 120,
            cell_width: 8.0,
            cell_height: 16.0,

            ship_speed: 2.0,
            ship_limit: 3,
            ship_width: 40.0,
            ship_height: 48.0,
            hit_pause_ms: 500,

            bullet_speed: 4.0,
            bullets_allowed: 35,
            bullet_width: 8.0,
            bullet_height: 16.0,
            bullet_color: [255, 0, 0],

            alien_speed: 0.5,
            alien_width: 32.0,
            alien_height: 16.0,
            fleet_drop_speed: 16.0,

            theme_song: PathBuf::from("sound/galaga_theme.wav"),
            firing_sound: PathBuf::from("sound/galaga_firing.wav"),
            log_file: PathBuf::from("galaga.log"),
        }
    }
}

impl Settings {
    /// Load settings from a JSON file and validate them
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.frame_rate == 0 {
            return Err(invalid("frame_rate", "must be at least 1"));
        }
        if self.ship_limit == 0 {
            return Err(invalid("ship_limit", "must be at least 1"));
        }

        let positive = [
            ("cell_width", self.cell_width),
            ("cell_height", self.cell_height),
            ("ship_speed", self.ship_speed),
            ("ship_width", self.ship_width),
            ("ship_height", self.ship_height),
            ("bullet_speed", self.bullet_speed),
            ("bullet_width", self.bullet_width),
            ("bullet_height", self.bullet_height),
            ("alien_speed", self.alien_speed),
            ("alien_width", self.alien_width),
            ("alien_height", self.alien_height),
        ];
        for (key, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(invalid(key, format!("must be positive, got {value}")));
            }
        }

        if !(self.fleet_drop_speed.is_finite() && self.fleet_drop_speed >= 0.0) {
            return Err(invalid("fleet_drop_speed", "must not be negative"));
        }

        Ok(())
    }

    /// Bounding box size for an entity kind
    pub fn size_of(&self, kind: EntityKind) -> Size {
        match kind {
            EntityKind::Ship => Size::new(self.ship_width, self.ship_height),
            EntityKind::Bullet => Size::new(self.bullet_width, self.bullet_height),
            EntityKind::Alien => Size::new(self.alien_width, self.alien_height),
        }
    }

    pub fn hit_pause(&self) -> Duration {
        Duration::from_millis(self.hit_pause_ms)
    }
}

fn invalid(key: &'static str, reason: impl Into<String>) -> ConfigError {
    ConfigError::Invalid {
        key,
        reason: reason.into(),
    }
}
