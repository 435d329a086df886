//! Radial polygon geometry for the ship, bullets and asteroids
//!
//! A radial polygon lists its local-space vertices by increasing angle around
//! the origin, nominally `2π / N` apart. Per-vertex radii may differ, so the
//! outline is star-shaped around its center rather than convex.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::{cross_product, lerp, magnitude, normalize_angle, to_radians};

/// A polygon with a world transform (translation + rotation in degrees)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadialPolygon {
    /// Local-space vertices, ordered by angle around the origin
    vertices: Vec<Vec2>,
    /// World-space center
    pub position: Vec2,
    /// Clockwise rotation in degrees (screen space)
    pub rotation: f32,
}

impl RadialPolygon {
    pub fn new(vertices: Vec<Vec2>) -> Self {
        Self {
            vertices,
            position: Vec2::ZERO,
            rotation: 0.0,
        }
    }

    /// Build a polygon from one radius per evenly spaced angle, starting at 0 rad
    pub fn from_radii(radii: &[f32]) -> Self {
        let increment = std::f32::consts::TAU / radii.len().max(1) as f32;
        let vertices = radii
            .iter()
            .enumerate()
            .map(|(i, &r)| {
                let theta = i as f32 * increment;
                Vec2::new(theta.cos() * r, theta.sin() * r)
            })
            .collect();
        Self::new(vertices)
    }

    /// Regular N-gon of the given circumradius
    pub fn regular(vertex_count: usize, radius: f32) -> Self {
        Self::from_radii(&vec![radius; vertex_count])
    }

    /// The player ship: a narrow triangle with its nose at local (0, -10)
    pub fn ship() -> Self {
        Self::new(vec![
            Vec2::new(0.0, -10.0),
            Vec2::new(7.0, 10.0),
            Vec2::new(-7.0, 10.0),
        ])
    }

    /// A 2x4 bullet rectangle anchored at its top-left corner
    pub fn bullet() -> Self {
        Self::new(vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(2.0, 0.0),
            Vec2::new(2.0, 4.0),
            Vec2::new(0.0, 4.0),
        ])
    }

    pub fn with_position(mut self, position: Vec2) -> Self {
        self.position = position;
        self
    }

    pub fn with_rotation(mut self, rotation: f32) -> Self {
        self.rotation = rotation;
        self
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Local-space vertices
    #[inline]
    pub fn vertices(&self) -> &[Vec2] {
        &self.vertices
    }

    /// Vertex `index` transformed into world space
    pub fn world_vertex(&self, index: usize) -> Vec2 {
        let local = self.vertices[index];
        let rotated = if self.rotation == 0.0 {
            local
        } else {
            Vec2::from_angle(to_radians(self.rotation)).rotate(local)
        };
        self.position + rotated
    }

    /// All vertices in world space
    pub fn world_vertices(&self) -> Vec<Vec2> {
        (0..self.vertices.len()).map(|i| self.world_vertex(i)).collect()
    }

    /// Largest vertex distance from the local origin
    pub fn max_radius(&self) -> f32 {
        self.vertices
            .iter()
            .map(|v| magnitude(*v))
            .fold(0.0, f32::max)
    }

    /// Move the polygon by `delta`
    #[inline]
    pub fn translate(&mut self, delta: Vec2) {
        self.position += delta;
    }

    /// Rotate the polygon by `degrees` (unbounded)
    #[inline]
    pub fn rotate(&mut self, degrees: f32) {
        self.rotation += degrees;
    }

    /// Angular-bucket containment test for star-shaped polygons.
    ///
    /// The boundary radius at the point's angle is interpolated between the
    /// two vertices whose nominal angles bracket it. This assumes vertex `i`
    /// sits at angle `i * 2π / N`; jittered radii can bend real edges away
    /// from that chord, so points very close to an edge may be misreported.
    /// Points farther than `max_radius` from the center are rejected early.
    pub fn contains_point(&self, point: Vec2, max_radius: f32) -> bool {
        let n = self.vertices.len();
        if n < 3 {
            return false;
        }

        let local = point - self.position;
        let distance = magnitude(local);
        if distance > max_radius {
            return false;
        }

        let angle = normalize_angle(local.y.atan2(local.x));
        let increment = std::f32::consts::TAU / n as f32;
        // Float error can push angle / increment up to exactly n
        let bucket = ((angle / increment).floor() as usize).min(n - 1);
        let next_bucket = (bucket + 1) % n;
        let t = (angle - bucket as f32 * increment) / increment;

        let on_curve = lerp(self.world_vertex(bucket), self.world_vertex(next_bucket), t)
            - self.position;
        distance < magnitude(on_curve)
    }

    /// Edge-sign containment test, exact for convex polygons of either winding
    pub fn contains_point_generic(&self, point: Vec2) -> bool {
        let n = self.vertices.len();
        if n < 3 {
            return false;
        }

        let prev_vertex = self.world_vertex(n - 1);
        let first_vertex = self.world_vertex(0);
        let initial_sign = cross_product(first_vertex - prev_vertex, point - prev_vertex) >= 0.0;

        (0..n).all(|i| {
            let current = self.world_vertex(i);
            let next = self.world_vertex((i + 1) % n);
            (cross_product(next - current, point - current) >= 0.0) == initial_sign
        })
    }
}
