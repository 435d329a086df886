//! Collision detection between bullets, asteroids and the ship
//!
//! Detection only: these functions report which entities touch and leave
//! removal, scoring and splitting to the tick.

use super::state::{Asteroid, Bullet, Ship};

/// A bullet that struck an asteroid this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BulletHit {
    /// Index into the bullet list
    pub bullet: usize,
    /// Index into the asteroid list
    pub asteroid: usize,
}

/// Find bullet/asteroid hits for one tick.
///
/// Bullets are scanned in order and each stops at the first asteroid whose
/// outline contains its position, so a bullet destroys at most one asteroid.
/// An asteroid claimed by an earlier bullet is skipped by later ones.
/// Bullets flagged in `spent` (already expired) are ignored.
pub fn find_bullet_hits(
    bullets: &[Bullet],
    asteroids: &[Asteroid],
    spent: &[bool],
) -> Vec<BulletHit> {
    let mut hits = Vec::new();
    if asteroids.is_empty() {
        return hits;
    }

    let mut claimed = vec![false; asteroids.len()];
    for (bullet_idx, bullet) in bullets.iter().enumerate() {
        if spent.get(bullet_idx).copied().unwrap_or(false) {
            continue;
        }

        let point = bullet.position();
        let target = asteroids
            .iter()
            .enumerate()
            .find(|(idx, asteroid)| !claimed[*idx] && asteroid.contains(point))
            .map(|(idx, _)| idx);

        if let Some(asteroid_idx) = target {
            claimed[asteroid_idx] = true;
            hits.push(BulletHit {
                bullet: bullet_idx,
                asteroid: asteroid_idx,
            });
        }
    }

    hits
}

/// Index of the first asteroid containing any of the ship's world vertices
pub fn ship_asteroid_collision(ship: &Ship, asteroids: &[Asteroid]) -> Option<usize> {
    let corners = ship.shape.world_vertices();
    asteroids
        .iter()
        .position(|asteroid| corners.iter().any(|&corner| asteroid.contains(corner)))
}
