//! Triangle-mesh renderer
//!
//! Tessellates each frame into a flat vertex list in screen pixels, ready to
//! be converted to NDC and uploaded as a `wgpu` vertex buffer. Text is not
//! rasterized; the HUD strings are kept next to the mesh for whatever draws
//! the overlay.

pub mod shapes;
pub mod vertex;

use glam::Vec2;

pub use vertex::Vertex;

use crate::consts::{OBSTACLE_RADIUS, TARGET_RADIUS};
use crate::error::Error;
use crate::render::{Frame, RenderSink};
use crate::sim::ArmSide;
use vertex::colors;

const CIRCLE_SEGMENTS: u32 = 32;
const WALL_WIDTH: f32 = 14.0;
const STROKE_WIDTH: f32 = 1.0;
const ARM_RADIUS: f32 = 5.0;
const LEVEL_SHADOW_OFFSET: Vec2 = Vec2::new(-5.0, -5.0);
const OBSTACLE_SHADOW_OFFSET: Vec2 = Vec2::new(4.0, 4.0);

/// Render sink that produces one triangle list per frame
#[derive(Debug)]
pub struct MeshRenderer {
    size: (u32, u32),
    vertices: Vec<Vertex>,
    status_line: String,
    banner: Option<&'static str>,
    frames: u64,
}

impl MeshRenderer {
    /// Create a renderer for a `width` x `height` pixel surface
    pub fn new(width: u32, height: u32) -> Result<Self, Error> {
        if width == 0 || height == 0 {
            return Err(Error::RenderUnavailable {
                reason: "surface has zero area",
            });
        }
        log::info!("Mesh renderer ready ({width}x{height})");
        Ok(Self {
            size: (width, height),
            vertices: Vec::new(),
            status_line: String::new(),
            banner: None,
            frames: 0,
        })
    }

    /// Last frame's triangles in screen pixels (y down)
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Last frame's triangles in NDC (y up), for `bytemuck::cast_slice`
    pub fn ndc_vertices(&self) -> Vec<Vertex> {
        let (w, h) = (self.size.0 as f32, self.size.1 as f32);
        self.vertices
            .iter()
            .map(|v| {
                let x = v.position[0] / w * 2.0 - 1.0;
                let y = 1.0 - v.position[1] / h * 2.0;
                Vertex::new(x, y, v.color)
            })
            .collect()
    }

    pub fn vertex_layout() -> wgpu::VertexBufferLayout<'static> {
        Vertex::desc()
    }

    pub fn status_line(&self) -> &str {
        &self.status_line
    }

    pub fn banner(&self) -> Option<&'static str> {
        self.banner
    }

    pub fn frames_drawn(&self) -> u64 {
        self.frames
    }
}

impl RenderSink for MeshRenderer {
    fn draw(&mut self, frame: &Frame<'_>) {
        let level = frame.level;
        // World to screen
        let to_screen = |p: Vec2| p - level.origin;
        let (w, h) = (self.size.0 as f32, self.size.1 as f32);

        let v = &mut self.vertices;
        v.clear();
        v.extend(shapes::rect(Vec2::ZERO, Vec2::new(w, h), colors::BACKGROUND));

        // Level: offset shadow outline, then the floor
        let outline: Vec<Vec2> = level.boundary.points().iter().copied().map(to_screen).collect();
        let shadow: Vec<Vec2> = outline.iter().map(|&p| p + LEVEL_SHADOW_OFFSET).collect();
        v.extend(shapes::polygon_outline(&shadow, WALL_WIDTH, colors::SHADOW));
        v.extend(shapes::filled_polygon(&outline, colors::LEVEL_FILL));

        let target = to_screen(level.target);
        for radius in [TARGET_RADIUS + 5.0, TARGET_RADIUS] {
            v.extend(shapes::circle_outline(
                target,
                radius,
                STROKE_WIDTH,
                colors::TARGET,
                CIRCLE_SEGMENTS,
            ));
        }

        for obstacle in &level.obstacles {
            let center = to_screen(obstacle.pos);
            v.extend(shapes::circle_outline(
                center + OBSTACLE_SHADOW_OFFSET,
                OBSTACLE_RADIUS,
                WALL_WIDTH,
                colors::SHADOW,
                CIRCLE_SEGMENTS,
            ));
            v.extend(shapes::circle(center, OBSTACLE_RADIUS, colors::OBSTACLE, CIRCLE_SEGMENTS));
        }

        let player = to_screen(level.player.pos);
        for arm in &level.player.arms {
            let pos = to_screen(arm.pos);
            let tether = match arm.side {
                ArmSide::Left => colors::TETHER_LEFT,
                ArmSide::Right => colors::TETHER_RIGHT,
            };
            v.extend(shapes::circle_outline(
                pos,
                ARM_RADIUS,
                STROKE_WIDTH,
                colors::ARM,
                CIRCLE_SEGMENTS,
            ));
            v.extend(shapes::line(pos, player, STROKE_WIDTH, tether));
        }

        for (color, offset, radii) in colors::PLAYER_LAYERS {
            v.extend(shapes::ellipse(
                player + Vec2::from(offset),
                Vec2::from(radii),
                color,
                CIRCLE_SEGMENTS,
            ));
        }

        self.status_line = frame.hud.status_line();
        self.banner = frame.hud.banner();
        self.frames += 1;
        log::trace!("Frame {}: {} vertices", self.frames, self.vertices.len());
    }
}
