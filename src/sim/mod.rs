//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per tick, delays counted in ticks
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod polygon;
pub mod random;
pub mod state;
pub mod tick;
pub mod wrap;

pub use collision::{BulletHit, find_bullet_hits, ship_asteroid_collision};
pub use polygon::RadialPolygon;
pub use random::{random_float, random_jitter, random_vec2};
pub use state::{Asteroid, AsteroidSize, Bullet, GamePhase, GameState, SessionStats, Ship};
pub use tick::{TickInput, spawn_wave, tick};
pub use wrap::{apply_velocity, wrap_position};
