//! Shape generation for corridor primitives
//!
//! All inputs are corridor coordinates; output vertices are in clip space.

use glam::Vec2;

use super::vertex::{Vertex, colors, mix};
use crate::sim::{Obstacle, ObstacleKind};

/// Axis-aligned rectangle as two triangles
pub fn quad(min: Vec2, max: Vec2, color: [f32; 4]) -> [Vertex; 6] {
    let a = Vertex::from_corridor(min, color);
    let b = Vertex::from_corridor(Vec2::new(max.x, min.y), color);
    let c = Vertex::from_corridor(Vec2::new(min.x, max.y), color);
    let d = Vertex::from_corridor(max, color);
    [a, b, c, c, b, d]
}

fn wall_color(kind: ObstacleKind) -> [f32; 4] {
    match kind {
        ObstacleKind::LeftWall => colors::LEFT_WALL,
        ObstacleKind::RightWall => colors::RIGHT_WALL,
        ObstacleKind::SlitWall => colors::SLIT_WALL,
    }
}

/// Generate vertices for the solid parts of a wall band
pub fn obstacle(obstacle: &Obstacle, gap_width: f32) -> Vec<Vertex> {
    let color = wall_color(obstacle.kind);
    let y0 = obstacle.vertical_position;
    let y1 = obstacle.top();

    obstacle
        .solid_spans(gap_width)
        .into_iter()
        .filter(|(lo, hi)| hi > lo)
        .flat_map(|(lo, hi)| quad(Vec2::new(lo, y0), Vec2::new(hi, y1), color))
        .collect()
}

/// Fixed margins on both sides of the corridor
pub fn side_walls(width: f32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(12);
    vertices.extend(quad(Vec2::ZERO, Vec2::new(width, 1.0), colors::SIDE_WALL));
    vertices.extend(quad(Vec2::new(1.0 - width, 0.0), Vec2::ONE, colors::SIDE_WALL));
    vertices
}

/// Full-screen backdrop, lighter on the side the plane is drifting toward
pub fn background(player_x: f32) -> [Vertex; 6] {
    let left = mix(colors::BACKGROUND_DARK, colors::BACKGROUND_LIGHT, 1.0 - player_x);
    let right = mix(colors::BACKGROUND_DARK, colors::BACKGROUND_LIGHT, player_x);

    let bl = Vertex::from_corridor(Vec2::ZERO, left);
    let br = Vertex::from_corridor(Vec2::new(1.0, 0.0), right);
    let tl = Vertex::from_corridor(Vec2::new(0.0, 1.0), left);
    let tr = Vertex::from_corridor(Vec2::ONE, right);
    [bl, br, tl, tl, br, tr]
}

/// Paper plane as a single upward-pointing triangle, tilted by its heading
pub fn plane(pos: Vec2, size: f32, deflection: f32) -> [Vertex; 3] {
    let forward = Vec2::from_angle(std::f32::consts::FRAC_PI_2 - deflection);
    let side = forward.perp();

    let nose = pos + forward * size;
    let left = pos - forward * (size * 0.5) - side * (size * 0.5);
    let right = pos - forward * (size * 0.5) + side * (size * 0.5);
    [
        Vertex::from_corridor(nose, colors::PLANE),
        Vertex::from_corridor(left, colors::PLANE),
        Vertex::from_corridor(right, colors::PLANE),
    ]
}
