//! Per-frame flight tick
//!
//! Drives the obstacle field the way the game loop does: apply steering,
//! compute the plane's candidate position, test it against the field, and
//! only scroll the field if the plane survived.

use glam::Vec2;
use rand::Rng;

use super::autopilot;
use super::level::{Frame, ObstacleField};
use crate::config::{FlightConfig, GameConfig};
use crate::error::LevelError;

/// Lateral steering command for a single tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Steer {
    #[default]
    Straight,
    Left,
    Right,
}

impl Steer {
    fn delta(self) -> i8 {
        match self {
            Steer::Straight => 0,
            Steer::Left => -1,
            Steer::Right => 1,
        }
    }
}

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    pub steer: Steer,
    /// Demo mode - the autopilot steers instead of the player
    pub autopilot: bool,
}

/// Result of a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Plane cleared everything; the field scrolled
    Flying,
    /// Plane hit a wall; the field was not advanced
    Crashed,
}

/// The player's paper plane
#[derive(Debug, Clone, PartialEq)]
pub struct Plane {
    /// Horizontal position in corridor coordinates
    pub x: f32,
    /// Discrete heading, negative = left, in [-max_direction, max_direction]
    pub direction: i8,
}

impl Plane {
    pub fn new(x: f32) -> Self {
        Self { x, direction: 0 }
    }

    /// Nudge the heading one step, clamped to the allowed range
    pub fn steer(&mut self, steer: Steer, max_direction: i8) {
        self.direction = self
            .direction
            .saturating_add(steer.delta())
            .clamp(-max_direction, max_direction);
    }

    /// Deflection from vertical (radians, positive = right)
    pub fn deflection(&self, step: f32) -> f32 {
        f32::from(self.direction) * step
    }

    /// Displacement for one tick: x is lateral drift, y is the scroll distance
    pub fn displacement(&self, speed: f32, step: f32) -> Vec2 {
        Vec2::new(self.deflection(step).tan(), 1.0) * speed
    }
}

/// Advance one frame: steer, test the candidate position, then scroll.
pub fn tick<R: Rng>(
    field: &mut ObstacleField<R>,
    plane: &mut Plane,
    input: &TickInput,
    flight: &FlightConfig,
) -> Result<TickOutcome, LevelError> {
    let steer = if input.autopilot {
        autopilot::steer(field, plane, flight.max_direction)
    } else {
        input.steer
    };
    plane.steer(steer, flight.max_direction);

    // Scroll must stay within one barrier interval per tick
    let speed = flight
        .speed_at(field.mileage())
        .min(field.config().barrier_interval);
    let step = plane.displacement(speed, flight.deflection_step);
    plane.x += step.x;

    if field.collides_at(plane.x)? {
        return Ok(TickOutcome::Crashed);
    }

    field.update(step.y)?;
    Ok(TickOutcome::Flying)
}

/// One play session: a field, a plane and a tick counter
#[derive(Debug, Clone)]
pub struct Session {
    pub field: ObstacleField,
    pub plane: Plane,
    flight: FlightConfig,
    /// Ticks survived
    pub ticks: u64,
    crashed: bool,
}

impl Session {
    pub fn new(config: GameConfig, seed: u64) -> Result<Self, LevelError> {
        config.flight.validate()?;
        let field = ObstacleField::from_seed(config.level, seed)?;
        log::info!("Session started with seed {}", seed);
        Ok(Self {
            field,
            plane: Plane::new(config.flight.start_x),
            flight: config.flight,
            ticks: 0,
            crashed: false,
        })
    }

    /// Run one tick. A crashed session stays crashed.
    pub fn step(&mut self, input: &TickInput) -> Result<TickOutcome, LevelError> {
        if self.crashed {
            return Ok(TickOutcome::Crashed);
        }

        let outcome = tick(&mut self.field, &mut self.plane, input, &self.flight)?;
        match outcome {
            TickOutcome::Flying => self.ticks += 1,
            TickOutcome::Crashed => {
                self.crashed = true;
                log::info!(
                    "Crashed at x={:.3} after {} ticks, mileage {:.3}",
                    self.plane.x,
                    self.ticks,
                    self.field.mileage()
                );
            }
        }
        Ok(outcome)
    }

    pub fn is_crashed(&self) -> bool {
        self.crashed
    }

    pub fn mileage(&self) -> f32 {
        self.field.mileage()
    }

    /// Snapshot for the renderer
    pub fn frame(&self) -> Frame<'_> {
        self.field.frame(self.plane.x)
    }
}
