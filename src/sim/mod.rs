//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only, owned by the obstacle field
//! - One tick per frame, collision tested before the field scrolls
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod flight;
pub mod level;
pub mod obstacle;

pub use flight::{Plane, Session, Steer, TickInput, TickOutcome, tick};
pub use level::{Frame, ObstacleField};
pub use obstacle::{Obstacle, ObstacleKind};
