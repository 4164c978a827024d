//! Level boundary polygon
//!
//! The boundary is an implicitly closed ring of vertices. Containment uses the
//! even-odd ray-casting rule with strict comparisons, so points lying on the
//! top or right side of an edge are outside. The player and arms are judged
//! against this conservatively.

use glam::Vec2;
use serde::Serialize;

/// A closed polygon (last vertex connects back to the first)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Polygon {
    points: Vec<Vec2>,
}

impl Polygon {
    pub fn new(points: Vec<Vec2>) -> Self {
        Self { points }
    }

    /// Vertices in boundary order
    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Even-odd containment test, O(vertex count)
    ///
    /// An edge is crossed by the ray from `point` toward +x when exactly one
    /// endpoint has a y strictly greater than `point.y` and the edge meets
    /// that row strictly to the right of `point.x`. Horizontal
    /// edges never pass the straddle test, so their x-intercept (a division
    /// by zero) is never evaluated.
    pub fn contains(&self, point: Vec2) -> bool {
        let n = self.points.len();
        if n == 0 {
            return false;
        }

        let mut odd = false;
        let mut j = n - 1;
        for i in 0..n {
            let a = self.points[i];
            let b = self.points[j];
            if (a.y > point.y) != (b.y > point.y)
                && point.x < (b.x - a.x) * (point.y - a.y) / (b.y - a.y) + a.x
            {
                odd = !odd;
            }
            j = i;
        }
        odd
    }

    /// Axis-aligned bounds as (min, max), `None` for an empty polygon
    pub fn bounds(&self) -> Option<(Vec2, Vec2)> {
        let first = *self.points.first()?;
        Some(
            self.points
                .iter()
                .fold((first, first), |(lo, hi), &p| (lo.min(p), hi.max(p))),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn square() -> Polygon {
        Polygon::new(vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(10.0, 10.0),
            Vec2::new(0.0, 10.0),
        ])
    }

    #[test]
    fn test_square_interior_and_exterior() {
        let poly = square();
        assert!(poly.contains(Vec2::new(5.0, 5.0)));
        assert!(poly.contains(Vec2::new(0.5, 9.5)));
        assert!(!poly.contains(Vec2::new(-1.0, 5.0)));
        assert!(!poly.contains(Vec2::new(11.0, 5.0)));
        assert!(!poly.contains(Vec2::new(5.0, 10.5)));
    }

    #[test]
    fn test_vertices_on_top_and_right_are_outside() {
        let poly = square();
        assert!(!poly.contains(Vec2::new(10.0, 10.0)));
        assert!(!poly.contains(Vec2::new(10.0, 0.0)));
        assert!(!poly.contains(Vec2::new(0.0, 10.0)));
        // Right edge and top edge are exclusive
        assert!(!poly.contains(Vec2::new(10.0, 5.0)));
        assert!(!poly.contains(Vec2::new(5.0, 10.0)));
    }

    #[test]
    fn test_horizontal_edges_do_not_divide_by_zero() {
        // Point row coincides with both horizontal edges' y
        let poly = square();
        assert!(!poly.contains(Vec2::new(20.0, 0.0)));
        assert!(!poly.contains(Vec2::new(-20.0, 10.0)));
    }

    #[test]
    fn test_concave_notch() {
        // U shape: the notch between the prongs is outside
        let poly = Polygon::new(vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(30.0, 0.0),
            Vec2::new(30.0, 30.0),
            Vec2::new(20.0, 30.0),
            Vec2::new(20.0, 10.0),
            Vec2::new(10.0, 10.0),
            Vec2::new(10.0, 30.0),
            Vec2::new(0.0, 30.0),
        ]);
        assert!(poly.contains(Vec2::new(5.0, 20.0)));
        assert!(poly.contains(Vec2::new(25.0, 20.0)));
        assert!(poly.contains(Vec2::new(15.0, 5.0)));
        assert!(!poly.contains(Vec2::new(15.0, 20.0)));
    }

    #[test]
    fn test_empty_polygon_contains_nothing() {
        let poly = Polygon::new(Vec::new());
        assert!(!poly.contains(Vec2::ZERO));
        assert!(poly.bounds().is_none());
    }

    #[test]
    fn test_bounds() {
        let (lo, hi) = square().bounds().unwrap();
        assert_eq!(lo, Vec2::ZERO);
        assert_eq!(hi, Vec2::new(10.0, 10.0));
    }

    fn arb_polygon() -> impl Strategy<Value = Vec<Vec2>> {
        prop::collection::vec((0i32..256, 0i32..256), 3..12).prop_map(|pts| {
            pts.into_iter()
                .map(|(x, y)| Vec2::new(x as f32 * 16.0, y as f32 * 16.0))
                .collect()
        })
    }

    proptest! {
        #[test]
        fn prop_rotation_invariant(
            points in arb_polygon(),
            shift in 0usize..12,
            qx in -100.0f32..4200.0,
            qy in -100.0f32..4200.0,
        ) {
            let query = Vec2::new(qx, qy);
            let mut rotated = points.clone();
            let k = shift % rotated.len();
            rotated.rotate_left(k);
            prop_assert_eq!(
                Polygon::new(points).contains(query),
                Polygon::new(rotated).contains(query)
            );
        }

        #[test]
        fn prop_far_points_never_contained(
            points in arb_polygon(),
            dx in 1.0f32..5000.0,
            dy in -5000.0f32..5000.0,
        ) {
            let poly = Polygon::new(points);
            let (lo, hi) = poly.bounds().unwrap();
            prop_assert!(!poly.contains(Vec2::new(hi.x + dx, lo.y + dy)));
            prop_assert!(!poly.contains(Vec2::new(lo.x - dx, lo.y + dy)));
            prop_assert!(!poly.contains(Vec2::new(lo.x + dy, hi.y + dx)));
            prop_assert!(!poly.contains(Vec2::new(lo.x + dy, lo.y - dx)));
        }

        #[test]
        fn prop_convex_centroid_contained(
            cx in 0.0f32..4000.0,
            cy in 0.0f32..4000.0,
            radius in 10.0f32..500.0,
            sides in 3usize..16,
            phase in 0.0f32..1.0,
        ) {
            let center = Vec2::new(cx, cy);
            let points: Vec<Vec2> = (0..sides)
                .map(|i| {
                    let theta = (i as f32 + phase) / sides as f32 * std::f32::consts::TAU;
                    center + crate::from_angle(theta, radius)
                })
                .collect();
            prop_assert!(Polygon::new(points).contains(center));
        }
    }
}
