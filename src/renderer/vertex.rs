//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

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

/// `#rrggbb` to linear-ish RGBA floats, alpha 1
const fn hex(rgb: u32) -> [f32; 4] {
    [
        ((rgb >> 16) & 0xff) as f32 / 255.0,
        ((rgb >> 8) & 0xff) as f32 / 255.0,
        (rgb & 0xff) as f32 / 255.0,
        1.0,
    ]
}

/// Colors for game elements
pub mod colors {
    use super::hex;

    pub const BACKGROUND: [f32; 4] = hex(0x303030);
    pub const SHADOW: [f32; 4] = hex(0x101010);
    pub const LEVEL_FILL: [f32; 4] = hex(0x758085);
    pub const TARGET: [f32; 4] = hex(0xffcc00);
    pub const OBSTACLE: [f32; 4] = hex(0x404040);
    pub const ARM: [f32; 4] = hex(0xffffff);
    pub const TETHER_LEFT: [f32; 4] = hex(0xffa500); // CSS "orange"
    pub const TETHER_RIGHT: [f32; 4] = hex(0xff0000);

    /// Player body, outermost disc first: (color, offset, radii)
    pub const PLAYER_LAYERS: [([f32; 4], [f32; 2], [f32; 2]); 4] = [
        (hex(0x000000), [0.0, 0.0], [10.0, 10.0]),
        (hex(0x0077ff), [0.0, 0.0], [9.0, 9.0]),
        (hex(0x00ccff), [-1.0, -1.5], [7.0, 6.5]),
        (hex(0xaaf9ff), [-2.0, -2.5], [5.0, 4.5]),
    ];
}
