//! Spider Ball - swing a tethered ball through polygon caves
//!
//! Core modules:
//! - `sim`: Fixed-step simulation (geometry, level decoding, physics, collisions)
//! - `input`: Pressed-key / pressed-button sets consumed by the simulation
//! - `game`: Level controller and wall-clock catch-up loop
//! - `render`: Render sink contract; `renderer` tessellates frames into vertices
//! - `settings`: Key bindings and driver limits

pub mod error;
pub mod game;
pub mod input;
pub mod render;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::{DecodeError, Error};
pub use game::Game;
pub use settings::Settings;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Simulation rate (ticks per simulated second)
    pub const TICKS_PER_SECOND: f64 = 60.0;
    /// Simulated milliseconds per tick
    pub const TICK_MS: f64 = 1000.0 / TICKS_PER_SECOND;

    /// Logical canvas size (camera centering only)
    pub const CANVAS_WIDTH: f32 = 800.0;
    pub const CANVAS_HEIGHT: f32 = 600.0;
    /// Camera easing divisor (origin moves 1/30 of the gap per tick)
    pub const CAMERA_EASING: f32 = 30.0;
    /// Camera origin at level start sits this far up and left of the player
    pub const CAMERA_START_OFFSET: f32 = 400.0;

    /// Level grid scale: one encoded byte = 16 pixels
    pub const LEVEL_SCALE: f32 = 16.0;

    /// Obstacle radius
    pub const OBSTACLE_RADIUS: f32 = 30.0;
    /// Extra look-ahead for the obstacle patrol probe
    pub const OBSTACLE_PROBE_AHEAD: f32 = 60.0;
    /// Initial obstacle horizontal speed
    pub const OBSTACLE_START_SPEED: f32 = 1.0;
    /// Obstacle friction (per tick)
    pub const OBSTACLE_FRICTION: f32 = 0.997;
    /// Win radius around the target
    pub const TARGET_RADIUS: f32 = 20.0;

    /// Diagonal offset of the second boundary probe
    pub const ESCAPE_PROBE_OFFSET: f32 = 5.0;

    /// Arm launch speed
    pub const ARM_LAUNCH_SPEED: f32 = 13.0;
    /// Initial arm speed components before the first launch
    pub const ARM_START_SPEED: f32 = 5.0;
    /// Free arm velocity damping (per tick)
    pub const ARM_DAMPING: f32 = 0.992;
    /// Tether stiffness divisor on a free arm and on the player while tethered
    pub const TETHER_STIFFNESS: f32 = 1500.0;
    /// Tether divisor applied to the player while the arm is still flying
    pub const FLYING_TETHER_STIFFNESS: f32 = 4000.0;

    /// Gravity (added to vertical velocity every tick)
    pub const GRAVITY: f32 = 0.09;
    /// Player velocity damping (per tick)
    pub const PLAYER_DAMPING: f32 = 0.98;
}

/// Angle of the vector from `from` to `to`, in radians
#[inline]
pub fn angle_between(from: Vec2, to: Vec2) -> f32 {
    let d = to - from;
    d.y.atan2(d.x)
}

/// Sign of `v`: -1, 0 or 1 (unlike `f32::signum`, zero maps to zero)
#[inline]
pub fn sign(v: f32) -> f32 {
    if v > 0.0 {
        1.0
    } else if v < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// Unit vector at `angle` scaled by `length`
#[inline]
pub fn from_angle(angle: f32, length: f32) -> Vec2 {
    Vec2::new(length * angle.cos(), length * angle.sin())
}
