//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};
use glam::Vec2;

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    /// Build a vertex from corridor coordinates ([0, 1] on both axes)
    pub fn from_corridor(p: Vec2, color: [f32; 4]) -> Self {
        let ndc = to_ndc(p);
        Self::new(ndc.x, ndc.y, color)
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// Map corridor coordinates to clip space
#[inline]
pub fn to_ndc(p: Vec2) -> Vec2 {
    p * 2.0 - Vec2::ONE
}

/// Linear blend between two colors
pub fn mix(a: [f32; 4], b: [f32; 4], t: f32) -> [f32; 4] {
    let t = t.clamp(0.0, 1.0);
    std::array::from_fn(|i| a[i] * (1.0 - t) + b[i] * t)
}

/// Colors for game elements
pub mod colors {
    pub const SIDE_WALL: [f32; 4] = [0.3, 0.3, 0.4, 1.0];
    pub const LEFT_WALL: [f32; 4] = [0.4, 0.7, 1.0, 1.0];
    pub const RIGHT_WALL: [f32; 4] = [1.0, 0.4, 0.2, 1.0];
    pub const SLIT_WALL: [f32; 4] = [0.7, 0.7, 0.8, 1.0];
    pub const PLANE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const BACKGROUND_DARK: [f32; 4] = [0.02, 0.02, 0.05, 1.0];
    pub const BACKGROUND_LIGHT: [f32; 4] = [0.10, 0.12, 0.22, 1.0];
}
