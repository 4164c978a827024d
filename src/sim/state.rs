//! Level state and simulation entities
//!
//! A `Level` owns everything that moves. Arms point at obstacles by index into
//! `Level::obstacles`, which never reorders for the life of the level.

use glam::Vec2;
use serde::Serialize;

use super::level::LevelLayout;
use super::polygon::Polygon;
use crate::consts::*;
use crate::from_angle;

/// What an arm is anchored to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Attachment {
    /// Flying on its own momentum
    Free,
    /// Stuck to the level boundary
    Wall,
    /// Riding the obstacle at this index
    Obstacle(usize),
}

/// Which of the two arms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ArmSide {
    Left,
    Right,
}

impl ArmSide {
    pub const BOTH: [ArmSide; 2] = [ArmSide::Left, ArmSide::Right];

    pub fn index(self) -> usize {
        match self {
            ArmSide::Left => 0,
            ArmSide::Right => 1,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ArmSide::Left => "left",
            ArmSide::Right => "right",
        }
    }
}

/// A patrolling circular hazard
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Obstacle {
    pub pos: Vec2,
    /// Horizontal velocity (obstacles never move vertically)
    pub velocity_x: f32,
}

impl Obstacle {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            velocity_x: OBSTACLE_START_SPEED,
        }
    }

    /// True if `point` is within the obstacle radius (edge inclusive)
    pub fn contains(&self, point: Vec2) -> bool {
        self.pos.distance(point) <= OBSTACLE_RADIUS
    }
}

/// One grappling tether end
#[derive(Debug, Clone, Serialize)]
pub struct Arm {
    pub side: ArmSide,
    pub pos: Vec2,
    pub vel: Vec2,
    pub attachment: Attachment,
}

impl Arm {
    /// A free arm at `pos` with its side's idle drift
    pub fn new(side: ArmSide, pos: Vec2) -> Self {
        let vel = match side {
            ArmSide::Left => Vec2::new(-ARM_START_SPEED, -ARM_START_SPEED),
            ArmSide::Right => Vec2::new(ARM_START_SPEED, -ARM_START_SPEED),
        };
        Self {
            side,
            pos,
            vel,
            attachment: Attachment::Free,
        }
    }

    /// Re-fire from `origin` along `angle`, dropping any anchor
    pub fn launch(&mut self, origin: Vec2, angle: f32) {
        self.pos = origin;
        self.vel = from_angle(angle, ARM_LAUNCH_SPEED);
        self.attachment = Attachment::Free;
    }

    pub fn is_free(&self) -> bool {
        self.attachment == Attachment::Free
    }
}

/// The swinging ball and its two arms
#[derive(Debug, Clone, Serialize)]
pub struct Player {
    pub pos: Vec2,
    pub vel: Vec2,
    pub arms: [Arm; 2],
}

impl Player {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            arms: [Arm::new(ArmSide::Left, pos), Arm::new(ArmSide::Right, pos)],
        }
    }

    pub fn arm(&self, side: ArmSide) -> &Arm {
        &self.arms[side.index()]
    }

    pub fn arm_mut(&mut self, side: ArmSide) -> &mut Arm {
        &mut self.arms[side.index()]
    }
}

/// One live level
#[derive(Debug, Clone, Serialize)]
pub struct Level {
    /// 1-based, for display
    pub number: usize,
    pub boundary: Polygon,
    pub target: Vec2,
    pub obstacles: Vec<Obstacle>,
    pub player: Player,
    /// Camera origin (world position of the screen's top-left corner)
    pub origin: Vec2,
}

impl Level {
    pub fn new(number: usize, layout: &LevelLayout) -> Self {
        Self {
            number,
            boundary: layout.boundary.clone(),
            target: layout.target,
            obstacles: layout.obstacles.iter().copied().map(Obstacle::new).collect(),
            player: Player::new(layout.start),
            // Starts above the player and eases down to center
            origin: layout.start - Vec2::splat(CAMERA_START_OFFSET),
        }
    }

    pub fn target_reached(&self) -> bool {
        self.player.pos.distance(self.target) < TARGET_RADIUS
    }
}
