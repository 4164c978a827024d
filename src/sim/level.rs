//! Level strings and the built-in level table
//!
//! A level string is `"<geometry>[,<obstacles>]"`. Each segment is a run of
//! 2-hex-digit bytes read as `(x, y)` pairs on a 16 px grid. In the geometry
//! segment the last pair is the target, the one before it the player start,
//! and everything before that is the boundary in order. Each obstacle pair is
//! one obstacle's starting position.

use glam::Vec2;

use super::polygon::Polygon;
use crate::consts::LEVEL_SCALE;
use crate::error::{DecodeError, Segment};

/// Hex chars per encoded point
const CHARS_PER_POINT: usize = 4;

/// Fewest boundary vertices a level may have
pub const MIN_BOUNDARY_POINTS: usize = 2;

/// Built-in levels, in play order
pub static LEVELS: &[&str] = &[
    "3a2646254635563556245f245f4039403f295a29,",
    "33263d263d3042324525421f321f2e22303b253b251b2f1241114a174e26483c343838292a32,431a",
    "3253311e631e635335395d3b,393542354c355735",
    "30303019461a46264a35473a46493445353f413f41393d353f2439253930342b3842,4431",
    "40303e244a1d59265839513950354835493c413c40325032503049214436,472c",
    "32245724572862286230392f3a366336634e324e32455844583e323e5b2a3749,3d2b4638603e50264e48",
    "34233d23402f4039453945324032402f4e2f4e33493349385138513e573e574a4c4a4b434542453c373c39275146,4a3c",
    "46304e304d3c424a36492f442d322520260c2e063a0447104a07550a5516481c39142e1732243731383d3f404a334e0d,33382f2a2a1b350c",
    "282b7d2b7d3228322c2e782e,602e512e422e322e",
    "11150e1e182a2b39404157436b427c3c7e3377316d3d6741613e633c663e71366f3368345f37573c53394d364839503c463c3e3848394d36352e32322e362c342f303232352e2e2b252b1c1f1a17161b7935,3539",
];

/// Decoded, immutable level geometry
///
/// A `Level` is built fresh from one of these every time play (re)starts.
#[derive(Debug, Clone, PartialEq)]
pub struct LevelLayout {
    pub boundary: Polygon,
    pub start: Vec2,
    pub target: Vec2,
    /// Obstacle starting positions, in collision priority order
    pub obstacles: Vec<Vec2>,
}

/// Decode a level string
pub fn decode(level: &str) -> Result<LevelLayout, DecodeError> {
    let (geometry, obstacles) = level.split_once(',').unwrap_or((level, ""));

    let mut points = decode_points(geometry, Segment::Geometry)?;
    let boundary_len = points.len().saturating_sub(2);
    if boundary_len < MIN_BOUNDARY_POINTS {
        return Err(DecodeError::TooFewPoints {
            found: boundary_len,
            min: MIN_BOUNDARY_POINTS,
        });
    }

    let target = points.pop().unwrap_or_default();
    let start = points.pop().unwrap_or_default();

    Ok(LevelLayout {
        boundary: Polygon::new(points),
        start,
        target,
        obstacles: decode_points(obstacles, Segment::Obstacles)?,
    })
}

fn decode_points(hex: &str, segment: Segment) -> Result<Vec<Vec2>, DecodeError> {
    let bytes = hex.as_bytes();
    if bytes.len() % CHARS_PER_POINT != 0 {
        return Err(DecodeError::OddLength {
            segment,
            len: bytes.len(),
        });
    }

    bytes
        .chunks_exact(CHARS_PER_POINT)
        .enumerate()
        .map(|(i, chunk)| {
            let offset = i * CHARS_PER_POINT;
            let x = hex_byte(&chunk[..2]).ok_or(DecodeError::InvalidHex { segment, offset })?;
            let y = hex_byte(&chunk[2..]).ok_or(DecodeError::InvalidHex {
                segment,
                offset: offset + 2,
            })?;
            Ok(Vec2::new(x as f32, y as f32) * LEVEL_SCALE)
        })
        .collect()
}

fn hex_byte(pair: &[u8]) -> Option<u8> {
    let hi = (pair[0] as char).to_digit(16)?;
    let lo = (pair[1] as char).to_digit(16)?;
    Some((hi * 16 + lo) as u8)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn encode(points: &[(u8, u8)]) -> String {
        points.iter().map(|(x, y)| format!("{x:02x}{y:02x}")).collect()
    }

    #[test]
    fn test_builtin_levels_decode() {
        for (i, level) in LEVELS.iter().enumerate() {
            let layout = decode(level).unwrap_or_else(|e| panic!("level {}: {e}", i + 1));
            assert!(layout.boundary.len() >= 3, "level {} boundary", i + 1);
            assert!(
                layout.boundary.contains(layout.start),
                "level {} start outside boundary",
                i + 1
            );
        }
    }

    #[test]
    fn test_first_level_layout() {
        let layout = decode(LEVELS[0]).unwrap();
        assert_eq!(layout.boundary.len(), 8);
        assert_eq!(layout.boundary.points()[0], Vec2::new(0x3a as f32, 0x26 as f32) * 16.0);
        assert_eq!(layout.start, Vec2::new(0x3f as f32, 0x29 as f32) * 16.0);
        assert_eq!(layout.target, Vec2::new(0x5a as f32, 0x29 as f32) * 16.0);
        assert!(layout.obstacles.is_empty());
    }

    #[test]
    fn test_obstacles_segment() {
        let layout = decode(LEVELS[2]).unwrap();
        assert_eq!(
            layout.obstacles,
            vec![
                Vec2::new(0x39 as f32, 0x35 as f32) * 16.0,
                Vec2::new(0x42 as f32, 0x35 as f32) * 16.0,
                Vec2::new(0x4c as f32, 0x35 as f32) * 16.0,
                Vec2::new(0x57 as f32, 0x35 as f32) * 16.0,
            ]
        );
    }

    #[test]
    fn test_missing_obstacle_segment() {
        let layout = decode("0000ff0000ff10101414").unwrap();
        assert!(layout.obstacles.is_empty());
        assert_eq!(layout.target, Vec2::new(320.0, 320.0));
    }

    #[test]
    fn test_odd_length_rejected() {
        assert_eq!(
            decode("0000ff0000ff1010141"),
            Err(DecodeError::OddLength {
                segment: Segment::Geometry,
                len: 19
            })
        );
        assert_eq!(
            decode("0000ff0000ff10101414,12"),
            Err(DecodeError::OddLength {
                segment: Segment::Obstacles,
                len: 2
            })
        );
    }

    #[test]
    fn test_too_few_points_rejected() {
        assert_eq!(
            decode("000010101414"),
            Err(DecodeError::TooFewPoints { found: 1, min: 2 })
        );
        assert_eq!(decode(""), Err(DecodeError::TooFewPoints { found: 0, min: 2 }));
    }

    #[test]
    fn test_invalid_hex_rejected() {
        assert_eq!(
            decode("0000ff0zz0ff10101414"),
            Err(DecodeError::InvalidHex {
                segment: Segment::Geometry,
                offset: 6
            })
        );
    }

    proptest! {
        #[test]
        fn prop_decode_scales_points(
            pts in prop::collection::vec((any::<u8>(), any::<u8>()), 4..20),
            obstacles in prop::collection::vec((any::<u8>(), any::<u8>()), 0..6),
        ) {
            let level = format!("{},{}", encode(&pts), encode(&obstacles));
            let layout = decode(&level).unwrap();
            let scaled = |&(x, y): &(u8, u8)| Vec2::new(x as f32 * 16.0, y as f32 * 16.0);

            let n = pts.len();
            let boundary: Vec<Vec2> = pts[..n - 2].iter().map(scaled).collect();
            prop_assert_eq!(layout.boundary.points(), boundary.as_slice());
            prop_assert_eq!(layout.start, scaled(&pts[n - 2]));
            prop_assert_eq!(layout.target, scaled(&pts[n - 1]));
            let obs: Vec<Vec2> = obstacles.iter().map(scaled).collect();
            prop_assert_eq!(layout.obstacles, obs);
        }
    }
}
