//! Boundary and obstacle hit tests
//!
//! Everything here is a yes/no query against the level boundary. Collision
//! response (attaching, killing, reversing) is applied by `tick`.

use glam::Vec2;

use super::polygon::Polygon;
use super::state::Obstacle;
use crate::consts::{ESCAPE_PROBE_OFFSET, OBSTACLE_PROBE_AHEAD, OBSTACLE_RADIUS};
use crate::sign;

/// True when `point` has left the playable area
///
/// Both `point` and a probe offset diagonally by (+5, +5) must be outside, so
/// a point sitting on an edge does not count as having crossed it.
pub fn escaped(boundary: &Polygon, point: Vec2) -> bool {
    !boundary.contains(point) && !boundary.contains(point + Vec2::splat(ESCAPE_PROBE_OFFSET))
}

/// Look-ahead point used to turn a patrolling obstacle around
///
/// One radius below the center and one radius plus 60 ahead in the travel
/// direction. A stationary obstacle probes one radius to the right.
pub fn patrol_probe(obstacle: &Obstacle) -> Vec2 {
    Vec2::new(
        obstacle.pos.x + OBSTACLE_RADIUS + OBSTACLE_PROBE_AHEAD * sign(obstacle.velocity_x),
        obstacle.pos.y + OBSTACLE_RADIUS,
    )
}

/// True when the obstacle is about to run out of floor or into a wall
pub fn patrol_blocked(boundary: &Polygon, obstacle: &Obstacle) -> bool {
    !boundary.contains(patrol_probe(obstacle))
}
