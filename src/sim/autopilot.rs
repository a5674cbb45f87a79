//! Demo-mode steering
//!
//! Aims for the opening of the next wall the plane has not yet cleared and
//! nudges the heading one step per tick toward it.

use super::flight::{Plane, Steer};
use super::level::ObstacleField;

/// Lateral error that maps to one direction step
const ERROR_PER_STEP: f32 = 0.1;

/// Pick a steering command for the current frame
pub fn steer<R>(field: &ObstacleField<R>, plane: &Plane, max_direction: i8) -> Steer {
    let config = field.config();
    let target_x = field
        .next_obstacle_above(config.plane_pos_y)
        .map(|o| o.gap_center(config.gap_width))
        .unwrap_or(0.5);

    let wanted = desired_direction(target_x - plane.x, max_direction);
    match wanted.cmp(&plane.direction) {
        std::cmp::Ordering::Less => Steer::Left,
        std::cmp::Ordering::Greater => Steer::Right,
        std::cmp::Ordering::Equal => Steer::Straight,
    }
}

/// Heading that closes a lateral error, steeper for larger errors
fn desired_direction(error: f32, max_direction: i8) -> i8 {
    let max = f32::from(max_direction);
    (error / ERROR_PER_STEP).round().clamp(-max, max) as i8
}
