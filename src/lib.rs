//! Paper Plane - climb an endless corridor of walls
//!
//! Core modules:
//! - `sim`: Deterministic simulation (obstacle field, flight, autopilot)
//! - `renderer`: Frame sink turning the obstacle window into GPU vertices
//! - `config`: Data-driven level and flight tuning
//! - `error`: Configuration and input errors

pub mod config;
pub mod error;
pub mod renderer;
pub mod sim;

pub use config::{FlightConfig, GameConfig, LevelConfig};
pub use error::{ConfigError, LevelError};

/// Game configuration constants
///
/// Coordinates are corridor-normalized: x spans [0, 1] left to right, y spans
/// [0, 1] from the bottom of the visible frame to its top.
pub mod consts {
    /// Width of the gap cut into a slit wall
    pub const GAP_WIDTH: f32 = 0.25;
    /// Fixed outer boundary on each side of the corridor
    pub const SIDE_WALL_WIDTH: f32 = 0.1;
    /// Vertical spacing between consecutive obstacles
    pub const BARRIER_INTERVAL: f32 = 0.5;
    /// Band height of the first obstacles
    pub const INITIAL_HEIGHT: f32 = 0.1;
    /// Band height once the difficulty ramp saturates
    pub const MAX_HEIGHT: f32 = 0.3;
    /// Mileage at which the difficulty ramp saturates
    pub const DIFFICULTY_MILEAGE: f32 = 100.0;
    /// Fixed vertical position of the plane within the visible frame
    pub const PLANE_POS_Y: f32 = 0.2;
    /// Height of the visible frame
    pub const VISIBLE_SPAN: f32 = 1.0;

    /// Generated gap positions are drawn from [GAP_RANGE_MIN, GAP_RANGE_MAX]
    pub const GAP_RANGE_MIN: f32 = 0.4;
    pub const GAP_RANGE_MAX: f32 = 0.6;

    /// Plane direction is an integer step in [-MAX_DIRECTION, MAX_DIRECTION]
    pub const MAX_DIRECTION: i8 = 2;
    /// Deflection from vertical per direction step (radians)
    pub const DEFLECTION_STEP: f32 = std::f32::consts::FRAC_PI_8;
    /// Scroll speed at mileage zero (per tick)
    pub const BASE_SPEED: f32 = 5e-3;
    /// Scroll speed gained per unit of mileage
    pub const SPEED_GAIN: f32 = 2e-4;
    /// Horizontal starting position of the plane
    pub const PLANE_START_X: f32 = 0.5;
}
