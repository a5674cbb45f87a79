//! Level and flight tuning
//!
//! Loaded from JSON by the native binary; every field falls back to the
//! values in [`crate::consts`].

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Obstacle geometry and difficulty ramp
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LevelConfig {
    /// Width of the opening in a slit wall
    pub gap_width: f32,
    /// Solid margin on each side of the corridor
    pub side_wall_width: f32,
    /// Vertical distance between consecutive obstacles
    pub barrier_interval: f32,
    /// Band height at mileage zero
    pub initial_height: f32,
    /// Band height once `difficulty_mileage` is reached
    pub max_height: f32,
    /// Mileage over which height ramps from initial to max
    pub difficulty_mileage: f32,
    /// Fixed vertical position of the plane in the visible frame
    pub plane_pos_y: f32,
    /// Bounds of the uniformly drawn gap position
    pub gap_range: (f32, f32),
}

impl Default for LevelConfig {
    fn default() -> Self {
        Self {
            gap_width: GAP_WIDTH,
            side_wall_width: SIDE_WALL_WIDTH,
            barrier_interval: BARRIER_INTERVAL,
            initial_height: INITIAL_HEIGHT,
            max_height: MAX_HEIGHT,
            difficulty_mileage: DIFFICULTY_MILEAGE,
            plane_pos_y: PLANE_POS_Y,
            gap_range: (GAP_RANGE_MIN, GAP_RANGE_MAX),
        }
    }
}

impl LevelConfig {
    /// Reject values that cannot produce a navigable corridor
    pub fn validate(&self) -> Result<(), ConfigError> {
        let (lo, hi) = self.gap_range;
        if !(lo.is_finite() && hi.is_finite()) || lo < 0.0 || hi > 1.0 || lo > hi {
            return Err(ConfigError::invalid("gap_range", "must satisfy 0 <= min <= max <= 1"));
        }
        // Slit gaps are centred on a draw from gap_range and must stay inside [0, 1]
        if !(self.gap_width > 0.0) || self.gap_width / 2.0 > lo || hi + self.gap_width / 2.0 > 1.0 {
            return Err(ConfigError::invalid("gap_width", "gap must fit inside the corridor"));
        }
        if !(self.side_wall_width >= 0.0 && self.side_wall_width < 0.5) {
            return Err(ConfigError::invalid("side_wall_width", "must be in [0, 0.5)"));
        }
        // Any kind may get any offset, so every opening must clear both side walls
        let (min_offset, max_offset) = self.gap_offset_bounds();
        if self.side_wall_width >= min_offset || max_offset >= 1.0 - self.side_wall_width {
            return Err(ConfigError::invalid(
                "side_wall_width",
                "side walls must leave every generated opening reachable",
            ));
        }
        if !(self.barrier_interval > 0.0) || !self.barrier_interval.is_finite() {
            return Err(ConfigError::invalid("barrier_interval", "must be positive"));
        }
        if !(self.initial_height > 0.0) {
            return Err(ConfigError::invalid("initial_height", "must be positive"));
        }
        if !(self.max_height >= self.initial_height) {
            return Err(ConfigError::invalid("max_height", "must be at least initial_height"));
        }
        // Bands of neighbouring obstacles may not overlap
        if self.max_height >= self.barrier_interval {
            return Err(ConfigError::invalid("max_height", "must be below barrier_interval"));
        }
        if !(self.difficulty_mileage > 0.0) {
            return Err(ConfigError::invalid("difficulty_mileage", "must be positive"));
        }
        if !self.plane_pos_y.is_finite() {
            return Err(ConfigError::invalid("plane_pos_y", "must be finite"));
        }
        Ok(())
    }

    /// Smallest and largest gap offset the generator can produce
    pub fn gap_offset_bounds(&self) -> (f32, f32) {
        let (lo, hi) = self.gap_range;
        let half_gap = self.gap_width / 2.0;
        let min = lo.min(1.0 - hi).min(lo - half_gap);
        let max = hi.max(1.0 - lo).max(hi - half_gap);
        (min, max)
    }

    /// Band height for an obstacle generated at the given mileage
    pub fn height_at(&self, mileage: f32) -> f32 {
        let t = (mileage / self.difficulty_mileage).clamp(0.0, 1.0);
        if t >= 1.0 {
            return self.max_height;
        }
        (self.initial_height + t * (self.max_height - self.initial_height)).min(self.max_height)
    }
}

/// Plane steering and scroll speed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlightConfig {
    /// Largest direction step either way
    pub max_direction: i8,
    /// Deflection from vertical per direction step (radians)
    pub deflection_step: f32,
    /// Scroll speed at mileage zero
    pub base_speed: f32,
    /// Scroll speed added per unit of mileage
    pub speed_gain: f32,
    /// Starting horizontal position
    pub start_x: f32,
}

impl Default for FlightConfig {
    fn default() -> Self {
        Self {
            max_direction: MAX_DIRECTION,
            deflection_step: DEFLECTION_STEP,
            base_speed: BASE_SPEED,
            speed_gain: SPEED_GAIN,
            start_x: PLANE_START_X,
        }
    }
}

impl FlightConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_direction < 0 {
            return Err(ConfigError::invalid("max_direction", "must be non-negative"));
        }
        // tan() blows up at a right angle
        let max_angle = f32::from(self.max_direction) * self.deflection_step;
        if !(self.deflection_step >= 0.0) || max_angle >= std::f32::consts::FRAC_PI_2 {
            return Err(ConfigError::invalid("deflection_step", "max deflection must stay below 90 degrees"));
        }
        if !(self.base_speed > 0.0) || !(self.speed_gain >= 0.0) {
            return Err(ConfigError::invalid("base_speed", "speed must be positive and non-decreasing"));
        }
        if !(0.0..=1.0).contains(&self.start_x) {
            return Err(ConfigError::invalid("start_x", "must be in [0, 1]"));
        }
        Ok(())
    }

    /// Scroll distance per tick at the given mileage
    pub fn speed_at(&self, mileage: f32) -> f32 {
        self.speed_gain * mileage + self.base_speed
    }
}

/// Complete session configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub level: LevelConfig,
    pub flight: FlightConfig,
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.level.validate()?;
        self.flight.validate()
    }

    /// Parse and validate a JSON config. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read a JSON config from disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
