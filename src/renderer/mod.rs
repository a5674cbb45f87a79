//! Rendering collaborator
//!
//! The simulation hands over a read-only [`Frame`] once per tick; how it is
//! laid out for the GPU is decided here, not in the obstacle field.

pub mod shapes;
pub mod vertex;

use glam::Vec2;

pub use vertex::Vertex;

use crate::sim::Frame;

/// Plane marker size in corridor units
const PLANE_SIZE: f32 = 0.04;

/// Anything that can draw the current obstacle window
pub trait FrameSink {
    fn submit(&mut self, frame: &Frame<'_>);
}

/// Builds one triangle list per frame, ready for upload as a vertex buffer
#[derive(Debug, Default)]
pub struct VertexSink {
    vertices: Vec<Vertex>,
    /// Frames submitted so far
    pub frames: u64,
    /// Heading to draw the plane with (radians from vertical)
    pub deflection: f32,
}

impl VertexSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn vertex_count(&self) -> u32 {
        self.vertices.len() as u32
    }

    /// Raw bytes for the vertex buffer, laid out per [`Vertex::desc`]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(self.vertices.as_slice())
    }
}

impl FrameSink for VertexSink {
    fn submit(&mut self, frame: &Frame<'_>) {
        self.vertices.clear();
        self.vertices.extend(shapes::background(frame.player_x));
        for obstacle in frame.obstacles {
            // Walls above the frame are still in the window but off screen
            if obstacle.vertical_position >= 1.0 {
                continue;
            }
            self.vertices.extend(shapes::obstacle(obstacle, frame.gap_width));
        }
        self.vertices.extend(shapes::side_walls(frame.side_wall_width));
        self.vertices.extend(shapes::plane(
            Vec2::new(frame.player_x, frame.plane_pos_y),
            PLANE_SIZE,
            self.deflection,
        ));
        self.frames += 1;
    }
}
