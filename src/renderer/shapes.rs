//! Shape tessellation for 2D primitives

use glam::Vec2;

use super::vertex::Vertex;

/// Fill a star-shaped polygon with a triangle fan around `center`.
///
/// Any polygon that is star-shaped about `center` (asteroids about their
/// position, convex shapes about any interior point) tessellates correctly.
pub fn polygon_fill(outline: &[Vec2], center: Vec2, color: [f32; 4]) -> Vec<Vertex> {
    let n = outline.len();
    if n < 3 {
        return Vec::new();
    }

    let mut vertices = Vec::with_capacity(n * 3);
    for i in 0..n {
        let a = outline[i];
        let b = outline[(i + 1) % n];

        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(a.x, a.y, color));
        vertices.push(Vertex::new(b.x, b.y, color));
    }

    vertices
}

/// Closed outline: one quad (two triangles) per edge, `thickness` wide
pub fn polygon_outline(outline: &[Vec2], thickness: f32, color: [f32; 4]) -> Vec<Vertex> {
    let n = outline.len();
    if n < 2 {
        return Vec::new();
    }

    let half = thickness / 2.0;
    let mut vertices = Vec::with_capacity(n * 6);

    for i in 0..n {
        let p1 = outline[i];
        let p2 = outline[(i + 1) % n];

        let dir = (p2 - p1).normalize_or_zero();
        // Perpendicular for width
        let perp = Vec2::new(-dir.y, dir.x);

        // Quad corners
        let v1a = p1 + perp * half;
        let v1b = p1 - perp * half;
        let v2a = p2 + perp * half;
        let v2b = p2 - perp * half;

        // Two triangles
        vertices.push(Vertex::new(v1a.x, v1a.y, color));
        vertices.push(Vertex::new(v1b.x, v1b.y, color));
        vertices.push(Vertex::new(v2a.x, v2a.y, color));

        vertices.push(Vertex::new(v2a.x, v2a.y, color));
        vertices.push(Vertex::new(v1b.x, v1b.y, color));
        vertices.push(Vertex::new(v2b.x, v2b.y, color));
    }

    vertices
}
