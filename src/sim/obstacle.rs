//! Wall segment geometry
//!
//! A wall is a horizontal band spanning the corridor:
//! - vertical extent: [vertical_position, vertical_position + height)
//! - horizontal extent: solid everywhere except the gap described by `kind`
//!   and `gap_offset`

use serde::{Deserialize, Serialize};

/// Which part of the corridor width is solid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObstacleKind {
    /// Solid on [0, gap_offset]
    LeftWall,
    /// Solid on [gap_offset, 1]
    RightWall,
    /// Solid everywhere except [gap_offset, gap_offset + gap_width]
    SlitWall,
}

/// One wall segment in the corridor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub kind: ObstacleKind,
    pub gap_offset: f32,
    /// Vertical thickness of the band
    pub height: f32,
    /// Lower edge of the band; scrolls down every tick
    pub vertical_position: f32,
}

impl Obstacle {
    pub fn new(kind: ObstacleKind, gap_offset: f32, height: f32, vertical_position: f32) -> Self {
        Self {
            kind,
            gap_offset,
            height,
            vertical_position,
        }
    }

    /// Upper edge of the band
    #[inline]
    pub fn top(&self) -> f32 {
        self.vertical_position + self.height
    }

    /// Check if a height falls within the band (lower edge inclusive)
    #[inline]
    pub fn spans(&self, y: f32) -> bool {
        y >= self.vertical_position && y < self.top()
    }

    /// Check if a horizontal position is inside the solid part of the wall
    pub fn is_solid_at(&self, x: f32, gap_width: f32) -> bool {
        match self.kind {
            ObstacleKind::LeftWall => x <= self.gap_offset,
            ObstacleKind::RightWall => x >= self.gap_offset,
            ObstacleKind::SlitWall => x < self.gap_offset || x > self.gap_offset + gap_width,
        }
    }

    /// Solid horizontal intervals, left to right
    pub fn solid_spans(&self, gap_width: f32) -> Vec<(f32, f32)> {
        match self.kind {
            ObstacleKind::LeftWall => vec![(0.0, self.gap_offset)],
            ObstacleKind::RightWall => vec![(self.gap_offset, 1.0)],
            ObstacleKind::SlitWall => vec![
                (0.0, self.gap_offset),
                (self.gap_offset + gap_width, 1.0),
            ],
        }
    }

    /// Horizontal centre of the navigable opening
    pub fn gap_center(&self, gap_width: f32) -> f32 {
        match self.kind {
            ObstacleKind::LeftWall => (self.gap_offset + 1.0) / 2.0,
            ObstacleKind::RightWall => self.gap_offset / 2.0,
            ObstacleKind::SlitWall => self.gap_offset + gap_width / 2.0,
        }
    }

    /// Check if the point (x, y) hits this wall
    pub fn contains_point(&self, x: f32, y: f32, gap_width: f32) -> bool {
        self.spans(y) && self.is_solid_at(x, gap_width)
    }
}
