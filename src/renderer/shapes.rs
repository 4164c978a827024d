//! Shape generation for 2D primitives
//!
//! Everything comes out as a triangle list.

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::Vertex;

fn push_triangle(out: &mut Vec<Vertex>, a: Vec2, b: Vec2, c: Vec2, color: [f32; 4]) {
    out.push(Vertex::new(a.x, a.y, color));
    out.push(Vertex::new(b.x, b.y, color));
    out.push(Vertex::new(c.x, c.y, color));
}

/// Generate vertices for a filled axis-aligned rectangle
pub fn rect(min: Vec2, max: Vec2, color: [f32; 4]) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(6);
    push_triangle(&mut vertices, min, Vec2::new(max.x, min.y), max, color);
    push_triangle(&mut vertices, min, max, Vec2::new(min.x, max.y), color);
    vertices
}

/// Generate vertices for a filled ellipse
pub fn ellipse(center: Vec2, radii: Vec2, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        push_triangle(
            &mut vertices,
            center,
            center + radii * Vec2::new(theta1.cos(), theta1.sin()),
            center + radii * Vec2::new(theta2.cos(), theta2.sin()),
            color,
        );
    }

    vertices
}

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    ellipse(center, Vec2::splat(radius), color, segments)
}

/// Generate vertices for a ring (hollow circle)
pub fn ring(
    center: Vec2,
    inner_radius: f32,
    outer_radius: f32,
    color: [f32; 4],
    segments: u32,
) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 6) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;
        let dir1 = Vec2::new(theta1.cos(), theta1.sin());
        let dir2 = Vec2::new(theta2.cos(), theta2.sin());

        let inner1 = center + dir1 * inner_radius;
        let outer1 = center + dir1 * outer_radius;
        let inner2 = center + dir2 * inner_radius;
        let outer2 = center + dir2 * outer_radius;

        // Two triangles per segment
        push_triangle(&mut vertices, inner1, outer1, inner2, color);
        push_triangle(&mut vertices, inner2, outer1, outer2, color);
    }

    vertices
}

/// Generate vertices for a stroked circle outline of the given line width
pub fn circle_outline(
    center: Vec2,
    radius: f32,
    width: f32,
    color: [f32; 4],
    segments: u32,
) -> Vec<Vertex> {
    let half = width / 2.0;
    ring(center, (radius - half).max(0.0), radius + half, color, segments)
}

/// Generate vertices for a straight line segment as a quad
pub fn line(from: Vec2, to: Vec2, width: f32, color: [f32; 4]) -> Vec<Vertex> {
    let dir = (to - from).normalize_or_zero();
    if dir == Vec2::ZERO {
        return Vec::new();
    }
    // Perpendicular for width
    let perp = Vec2::new(-dir.y, dir.x) * (width / 2.0);

    let mut vertices = Vec::with_capacity(6);
    push_triangle(&mut vertices, from + perp, from - perp, to + perp, color);
    push_triangle(&mut vertices, to + perp, from - perp, to - perp, color);
    vertices
}

/// Generate vertices for a closed polygon outline
///
/// Each edge is a quad; a disc at every corner fills the joins.
pub fn polygon_outline(points: &[Vec2], width: f32, color: [f32; 4]) -> Vec<Vertex> {
    let mut vertices = Vec::new();
    for (i, &point) in points.iter().enumerate() {
        let next = points[(i + 1) % points.len()];
        vertices.extend(line(point, next, width, color));
        vertices.extend(circle(point, width / 2.0, color, 8));
    }
    vertices
}

/// Twice the signed area; positive when the points wind counter-clockwise
/// in a y-up frame
fn signed_area2(points: &[Vec2]) -> f32 {
    let mut sum = 0.0;
    for (i, a) in points.iter().enumerate() {
        let b = points[(i + 1) % points.len()];
        sum += a.perp_dot(b);
    }
    sum
}

fn in_triangle(p: Vec2, a: Vec2, b: Vec2, c: Vec2) -> bool {
    let d1 = (b - a).perp_dot(p - a);
    let d2 = (c - b).perp_dot(p - b);
    let d3 = (a - c).perp_dot(p - c);
    d1 >= 0.0 && d2 >= 0.0 && d3 >= 0.0
}

/// Generate vertices for a filled simple polygon (concave allowed)
///
/// Ear clipping. If the outline self-intersects and no ear can be found,
/// the remainder is fanned so something still gets drawn.
pub fn filled_polygon(points: &[Vec2], color: [f32; 4]) -> Vec<Vertex> {
    if points.len() < 3 {
        return Vec::new();
    }

    // Work in counter-clockwise order so ears are left turns
    let mut remaining: Vec<Vec2> = points.to_vec();
    if signed_area2(&remaining) < 0.0 {
        remaining.reverse();
    }

    let mut vertices = Vec::with_capacity((points.len() - 2) * 3);
    while remaining.len() > 3 {
        let n = remaining.len();
        let ear = (0..n).find(|&i| {
            let a = remaining[(i + n - 1) % n];
            let b = remaining[i];
            let c = remaining[(i + 1) % n];
            if (b - a).perp_dot(c - b) <= 0.0 {
                return false;
            }
            remaining
                .iter()
                .enumerate()
                .filter(|&(j, _)| j != i && j != (i + n - 1) % n && j != (i + 1) % n)
                .all(|(_, &p)| !in_triangle(p, a, b, c))
        });

        let Some(i) = ear else {
            log::debug!("No ear left in {n}-gon, fanning the rest");
            break;
        };
        let a = remaining[(i + n - 1) % n];
        let c = remaining[(i + 1) % n];
        push_triangle(&mut vertices, a, remaining[i], c, color);
        remaining.remove(i);
    }

    for i in 1..remaining.len() - 1 {
        push_triangle(
            &mut vertices,
            remaining[0],
            remaining[i],
            remaining[i + 1],
            color,
        );
    }

    vertices
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: [f32; 4] = [1.0; 4];

    fn area(vertices: &[Vertex]) -> f32 {
        vertices
            .chunks_exact(3)
            .map(|t| {
                let a = Vec2::from(t[0].position);
                let b = Vec2::from(t[1].position);
                let c = Vec2::from(t[2].position);
                ((b - a).perp_dot(c - a) / 2.0).abs()
            })
            .sum()
    }

    #[test]
    fn test_circle_vertex_count() {
        assert_eq!(circle(Vec2::ZERO, 10.0, WHITE, 16).len(), 48);
        assert_eq!(ring(Vec2::ZERO, 4.0, 5.0, WHITE, 16).len(), 96);
    }

    #[test]
    fn test_ellipse_extent() {
        let vertices = ellipse(Vec2::new(10.0, 10.0), Vec2::new(7.0, 6.5), WHITE, 32);
        let max_x = vertices.iter().map(|v| v.position[0]).fold(f32::MIN, f32::max);
        let max_y = vertices.iter().map(|v| v.position[1]).fold(f32::MIN, f32::max);
        assert!((max_x - 17.0).abs() < 1e-4);
        assert!((max_y - 16.5).abs() < 0.1);
    }

    #[test]
    fn test_line_is_a_quad() {
        let vertices = line(Vec2::ZERO, Vec2::new(10.0, 0.0), 2.0, WHITE);
        assert_eq!(vertices.len(), 6);
        assert!((area(&vertices) - 20.0).abs() < 1e-4);

        assert!(line(Vec2::ONE, Vec2::ONE, 2.0, WHITE).is_empty());
    }

    #[test]
    fn test_fill_square() {
        let square = [
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(10.0, 10.0),
            Vec2::new(0.0, 10.0),
        ];
        let vertices = filled_polygon(&square, WHITE);
        assert_eq!(vertices.len(), 6);
        assert!((area(&vertices) - 100.0).abs() < 1e-3);
    }

    #[test]
    fn test_fill_concave_either_winding() {
        // U shape: 30x30 with a 10x20 notch cut from the top
        let mut u = vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(10.0, 20.0),
            Vec2::new(20.0, 20.0),
            Vec2::new(20.0, 0.0),
            Vec2::new(30.0, 0.0),
            Vec2::new(30.0, 30.0),
            Vec2::new(0.0, 30.0),
        ];
        let vertices = filled_polygon(&u, WHITE);
        assert_eq!(vertices.len(), (u.len() - 2) * 3);
        assert!((area(&vertices) - 700.0).abs() < 1e-2);

        u.reverse();
        let vertices = filled_polygon(&u, WHITE);
        assert!((area(&vertices) - 700.0).abs() < 1e-2);
    }

    #[test]
    fn test_fill_degenerate() {
        assert!(filled_polygon(&[Vec2::ZERO, Vec2::ONE], WHITE).is_empty());
        // Collinear points never form an ear; the fan still terminates
        let flat = [Vec2::ZERO, Vec2::new(1.0, 0.0), Vec2::new(2.0, 0.0), Vec2::new(3.0, 0.0)];
        assert_eq!(filled_polygon(&flat, WHITE).len(), 6);
    }
}
