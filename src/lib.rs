//! Rock Drift - an asteroids arcade game on a wrapped playfield
//!
//! Core modules:
//! - `sim`: Deterministic simulation (geometry, collisions, round lifecycle)
//! - `renderer`: Draw sink contract and polygon tessellation
//! - `platform`: Input sources
//! - `settings`: Configuration
//! - `game`: Frame driver tying input, simulation and rendering together

pub mod game;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use game::Game;
pub use settings::{Settings, SettingsError};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Default frame-rate cap; one simulation tick per frame
    pub const FRAME_RATE_LIMIT: u32 = 144;
    /// Maximum ticks per rendered frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Default viewport, centered on the origin
    pub const VIEW_WIDTH: f32 = 1920.0;
    pub const VIEW_HEIGHT: f32 = 1080.0;

    /// Ship thrust per tick while held (deceleration is half of this)
    pub const SHIP_ACCELERATION: f32 = 0.1;
    /// Ship rotation per tick while a turn key is held (degrees)
    pub const SHIP_TURN_DEGREES: f32 = 2.0;

    /// Bullet speed (units per tick)
    pub const BULLET_SPEED: f32 = 5.0;
    /// Distance a bullet travels before it expires
    pub const BULLET_RANGE: f32 = 1000.0;

    /// Asteroid tier radii
    pub const SMALL_RADIUS: f32 = 20.0;
    pub const MEDIUM_RADIUS: f32 = 50.0;
    pub const BIG_RADIUS: f32 = 100.0;
    /// Vertices per asteroid outline
    pub const ASTEROID_VERTEX_COUNT: usize = 8;

    /// Cheap-reject distance for radial hit tests against asteroids
    pub const HIT_TEST_MAX_RADIUS: f32 = 2.0 * BIG_RADIUS;

    /// Asteroids in the first wave (and after a restart)
    pub const INITIAL_ASTEROID_COUNT: u32 = 5;
    /// Extra asteroids added per cleared wave
    pub const WAVE_ESCALATION: u32 = 2;
    /// Delay between clearing a wave and spawning the next one
    pub const ROUND_DELAY_TICKS: u64 = 100;
    /// Delay before a restart is accepted after game over
    pub const GAME_OVER_DELAY_TICKS: u64 = 300;
    /// New waves never spawn closer than this to the ship
    pub const SPAWN_SAFE_RADIUS: f32 = 2.0 * BIG_RADIUS;
}

/// Convert degrees to radians
#[inline]
pub fn to_radians(degrees: f32) -> f32 {
    degrees * (std::f32::consts::PI / 180.0)
}

/// Displacement of `distance` along a heading in degrees.
///
/// Headings are screen-space: 0° points up (-y) and angles grow clockwise.
#[inline]
pub fn move_forward(degrees: f32, distance: f32) -> Vec2 {
    let radians = to_radians(degrees - 90.0);
    Vec2::new(radians.cos() * distance, radians.sin() * distance)
}

/// Length of a vector
#[inline]
pub fn magnitude(v: Vec2) -> f32 {
    (v.x * v.x + v.y * v.y).sqrt()
}

/// Unit vector in the direction of `v`, or zero for the zero vector
#[inline]
pub fn normalize(v: Vec2) -> Vec2 {
    let mag = magnitude(v);
    if mag == 0.0 {
        return Vec2::ZERO;
    }
    v / mag
}

/// Linear interpolation between `a` and `b`
#[inline]
pub fn lerp(a: Vec2, b: Vec2, t: f32) -> Vec2 {
    a + (b - a) * t
}

/// z-component of the 3D cross product of two planar vectors
#[inline]
pub fn cross_product(a: Vec2, b: Vec2) -> f32 {
    a.x * b.y - a.y * b.x
}

/// Normalized angle to [0, 2π)
#[inline]
pub fn normalize_angle(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(std::f32::consts::TAU);
    // rem_euclid can round up to TAU for tiny negative inputs
    if wrapped >= std::f32::consts::TAU {
        0.0
    } else {
        wrapped
    }
}

/// Normalized heading to [0, 360)
#[inline]
pub fn normalize_degrees(degrees: f32) -> f32 {
    let wrapped = degrees.rem_euclid(360.0);
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}
