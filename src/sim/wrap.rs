//! Toroidal playfield wrapping
//!
//! The view is centered on the origin. Anything that crosses an edge is
//! teleported to the opposite edge; there is no partial overlap.

use glam::Vec2;

use super::polygon::RadialPolygon;

/// Teleport a position that left the view to the opposite edge.
///
/// Each axis is handled independently, so a corner exit wraps both.
pub fn wrap_position(position: &mut Vec2, view_size: Vec2) {
    let half = view_size / 2.0;

    if position.x < -half.x {
        position.x = half.x;
    }
    if position.x > half.x {
        position.x = -half.x;
    }
    if position.y < -half.y {
        position.y = half.y;
    }
    if position.y > half.y {
        position.y = -half.y;
    }
}

/// Translate a shape by `velocity`, then wrap it around the view
pub fn apply_velocity(shape: &mut RadialPolygon, velocity: Vec2, view_size: Vec2) {
    shape.translate(velocity);
    wrap_position(&mut shape.position, view_size);
}
