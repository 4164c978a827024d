//! Fixed timestep simulation tick
//!
//! Advances one level by one 1/60 s step. Input arrives already reduced to
//! "which arms fire this tick"; the caller owns pressed-key bookkeeping and
//! the win/lose bookkeeping that follows from the returned `TickOutcome`.

use glam::Vec2;

use super::collision::{escaped, patrol_blocked};
use super::state::{ArmSide, Attachment, Level, Player};
use crate::angle_between;
use crate::consts::*;

/// Input commands for a single tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Re-launch the left arm
    pub fire_left: bool,
    /// Re-launch the right arm
    pub fire_right: bool,
    /// Cursor in screen space (offset by the camera origin to aim)
    pub cursor: Vec2,
}

/// What happened to the player during a tick
///
/// Both flags can be set in the same tick; the tick always runs to completion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickOutcome {
    /// Left the boundary or touched an obstacle
    pub player_lost: bool,
    /// Ended the tick inside the target ring
    pub target_reached: bool,
}

/// Advance the level by one fixed timestep
pub fn tick(level: &mut Level, input: &TickInput) -> TickOutcome {
    let mut outcome = TickOutcome::default();

    // Aim with the camera as the player saw it last frame
    let aim = input.cursor + level.origin;
    follow_camera(level);

    if input.fire_left || input.fire_right {
        let player = &mut level.player;
        let angle = angle_between(player.pos, aim);
        let origin = player.pos;
        for arm in player.arms.iter_mut() {
            let fire = match arm.side {
                ArmSide::Left => input.fire_left,
                ArmSide::Right => input.fire_right,
            };
            if fire {
                arm.launch(origin, angle);
            }
        }
    }

    for arm in level.player.arms.iter_mut() {
        if escaped(&level.boundary, arm.pos) {
            if arm.attachment != Attachment::Wall {
                log::trace!("{} arm anchored to wall at {}", arm.side.as_str(), arm.pos);
            }
            arm.attachment = Attachment::Wall;
            arm.vel.x = 0.0;
        }
    }

    if escaped(&level.boundary, level.player.pos) {
        outcome.player_lost = true;
    }

    if update_obstacles(level) {
        outcome.player_lost = true;
    }

    pull_arms(&mut level.player);
    integrate_player(&mut level.player);

    outcome.target_reached = level.target_reached();
    outcome
}

/// Ease the camera origin toward centering the player
fn follow_camera(level: &mut Level) {
    let wanted = level.player.pos - Vec2::new(CANVAS_WIDTH / 2.0, CANVAS_HEIGHT / 2.0);
    level.origin += (wanted - level.origin) / CAMERA_EASING;
}

/// Patrol, hook and move every obstacle in list order
///
/// Returns true if the player touched any obstacle.
fn update_obstacles(level: &mut Level) -> bool {
    let Level {
        boundary,
        obstacles,
        player,
        ..
    } = level;
    let mut touched = false;

    for (index, obstacle) in obstacles.iter_mut().enumerate() {
        if patrol_blocked(boundary, obstacle) {
            obstacle.velocity_x = -obstacle.velocity_x;
        }

        // A free arm hooks on; an already anchored arm drags instead
        for arm in player.arms.iter_mut() {
            if !obstacle.contains(arm.pos) {
                continue;
            }
            if arm.is_free() {
                log::trace!("{} arm hooked obstacle {index}", arm.side.as_str());
                arm.attachment = Attachment::Obstacle(index);
            } else {
                let angle = angle_between(player.pos, arm.pos);
                let stretch = player.pos.distance(arm.pos);
                obstacle.velocity_x -= stretch / TETHER_STIFFNESS * angle.cos();
            }
        }

        if obstacle.contains(player.pos) {
            touched = true;
        }

        obstacle.velocity_x *= OBSTACLE_FRICTION;

        for arm in player.arms.iter_mut() {
            if arm.attachment == Attachment::Obstacle(index) {
                arm.vel.x = obstacle.velocity_x;
            }
        }

        obstacle.pos.x += obstacle.velocity_x;
    }

    touched
}

/// Move the arms and let each tether pull on the player
fn pull_arms(player: &mut Player) {
    let Player { pos, vel, arms } = player;

    for arm in arms.iter_mut() {
        let angle = angle_between(*pos, arm.pos);
        let stretch = pos.distance(arm.pos);
        let toward_arm = Vec2::new(angle.cos(), angle.sin());

        let stiffness = match arm.attachment {
            Attachment::Free => {
                arm.pos += arm.vel;
                arm.vel *= ARM_DAMPING;
                arm.vel.y += GRAVITY;
                arm.vel -= toward_arm * (stretch / TETHER_STIFFNESS);
                FLYING_TETHER_STIFFNESS
            }
            // The anchor only slides horizontally (with its obstacle, if any)
            Attachment::Wall | Attachment::Obstacle(_) => {
                arm.pos.x += arm.vel.x;
                TETHER_STIFFNESS
            }
        };

        *vel += toward_arm * (stretch / stiffness);
    }
}

fn integrate_player(player: &mut Player) {
    player.vel.y += GRAVITY;
    player.vel *= PLAYER_DAMPING;
    player.pos += player.vel;
}
