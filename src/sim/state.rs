//! Game state and core simulation types
//!
//! Everything the tick function reads or mutates lives here, including the
//! session counters (frame, next entity id) and the seeded RNG.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::polygon::RadialPolygon;
use super::random::random_float;
use crate::consts::*;
use crate::{magnitude, move_forward, normalize, normalize_degrees};

/// Current phase of the round lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Field is empty; the next wave spawns at `spawn_at`
    RoundClearing { spawn_at: u64 },
    /// Ship destroyed; restart input is accepted from `restart_at`
    GameOver { restart_at: u64 },
}

/// Asteroid size tiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AsteroidSize {
    Small,
    Medium,
    Big,
}

impl AsteroidSize {
    /// Nominal radius before per-vertex jitter
    pub fn radius(self) -> f32 {
        match self {
            AsteroidSize::Small => SMALL_RADIUS,
            AsteroidSize::Medium => MEDIUM_RADIUS,
            AsteroidSize::Big => BIG_RADIUS,
        }
    }

    /// Points awarded for destroying an asteroid of this tier
    pub fn score(self) -> u64 {
        match self {
            AsteroidSize::Small => 100,
            AsteroidSize::Medium => 50,
            AsteroidSize::Big => 20,
        }
    }

    /// Tier of the two fragments this asteroid breaks into, if any
    pub fn split(self) -> Option<AsteroidSize> {
        match self {
            AsteroidSize::Big => Some(AsteroidSize::Medium),
            AsteroidSize::Medium => Some(AsteroidSize::Small),
            AsteroidSize::Small => None,
        }
    }

    /// Positional scatter applied to fragments spawned from this tier
    pub fn fragment_scatter(self) -> f32 {
        match self {
            AsteroidSize::Big => 5.0,
            _ => 2.0,
        }
    }
}

/// The player's ship
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ship {
    pub shape: RadialPolygon,
    pub velocity: Vec2,
}

impl Default for Ship {
    fn default() -> Self {
        Self::new()
    }
}

impl Ship {
    pub fn new() -> Self {
        Self {
            shape: RadialPolygon::ship(),
            velocity: Vec2::ZERO,
        }
    }

    /// Recenter with zero velocity (heading is kept)
    pub fn reset(&mut self) {
        self.shape.position = Vec2::ZERO;
        self.velocity = Vec2::ZERO;
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        self.shape.position
    }

    /// Heading in degrees, normalized to [0, 360)
    pub fn heading(&self) -> f32 {
        normalize_degrees(self.shape.rotation)
    }

    /// Apply one tick of thrust/drag and turning.
    ///
    /// Thrust uses the heading from before this tick's turn. Without thrust
    /// the ship slows by half the thrust rate, never past a standstill.
    pub fn steer(&mut self, thrust: bool, turn_left: bool, turn_right: bool) {
        if thrust {
            self.velocity += move_forward(self.shape.rotation, SHIP_ACCELERATION);
        } else {
            let speed = magnitude(self.velocity);
            if speed > 0.0 {
                self.velocity -= normalize(self.velocity) * (SHIP_ACCELERATION / 2.0).min(speed);
            }
        }

        if turn_left {
            self.shape.rotate(-SHIP_TURN_DEGREES);
        }
        if turn_right {
            self.shape.rotate(SHIP_TURN_DEGREES);
        }
    }
}

/// A drifting asteroid
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Asteroid {
    pub id: u32,
    pub shape: RadialPolygon,
    pub velocity: Vec2,
    pub size: AsteroidSize,
}

impl Asteroid {
    /// Create an asteroid with a jittered outline.
    ///
    /// Each vertex radius is drawn from `radius ± radius / 3`, once.
    pub fn new<R: rand::Rng + ?Sized>(
        id: u32,
        position: Vec2,
        velocity: Vec2,
        size: AsteroidSize,
        rng: &mut R,
    ) -> Self {
        let radius = size.radius();
        let jitter = radius / 3.0;
        let radii: Vec<f32> = (0..ASTEROID_VERTEX_COUNT)
            .map(|_| radius + random_float(rng, -jitter, jitter))
            .collect();

        Self {
            id,
            shape: RadialPolygon::from_radii(&radii).with_position(position),
            velocity,
            size,
        }
    }

    /// Create an asteroid with an explicit outline
    pub fn with_shape(id: u32, shape: RadialPolygon, velocity: Vec2, size: AsteroidSize) -> Self {
        Self {
            id,
            shape,
            velocity,
            size,
        }
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        self.shape.position
    }

    /// Radial hit test with the standard rejection radius
    #[inline]
    pub fn contains(&self, point: Vec2) -> bool {
        self.shape.contains_point(point, HIT_TEST_MAX_RADIUS)
    }
}

/// A projectile fired by the ship
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bullet {
    pub shape: RadialPolygon,
    pub velocity: Vec2,
    /// Distance left before the bullet expires
    pub range: f32,
}

impl Bullet {
    /// Fire from `position` along `heading` (degrees)
    pub fn new(position: Vec2, heading: f32) -> Self {
        Self {
            shape: RadialPolygon::bullet()
                .with_position(position)
                .with_rotation(heading),
            velocity: move_forward(heading, BULLET_SPEED),
            range: BULLET_RANGE,
        }
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        self.shape.position
    }

    #[inline]
    pub fn is_expired(&self) -> bool {
        self.range <= 0.0
    }
}

/// Running counters for the current session (survive restarts)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionStats {
    pub shots_fired: u64,
    pub asteroids_destroyed: u64,
    pub waves_cleared: u32,
    pub games_played: u32,
}

/// Complete game state (deterministic for a given seed and input trace)
#[derive(Debug, Clone, Serialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    #[serde(skip)]
    pub rng: Pcg32,
    /// Playfield size, centered on the origin
    pub view_size: Vec2,
    /// Score for the current game
    pub score: u64,
    /// Asteroids in the most recently scheduled wave
    pub asteroid_target: u32,
    /// 1-based number of the wave on the field (0 before the first spawn)
    pub wave: u32,
    /// Simulation tick counter
    pub frame: u64,
    /// Current phase
    pub phase: GamePhase,
    pub ship: Ship,
    /// Active asteroids, in spawn order
    pub asteroids: Vec<Asteroid>,
    /// Active bullets, in firing order
    pub bullets: Vec<Bullet>,
    pub stats: SessionStats,
    /// Next asteroid id; never reset
    next_id: u32,
}

impl GameState {
    /// Create a new game with the first wave already on the field
    pub fn new(seed: u64, view_size: Vec2) -> Self {
        let mut state = Self::empty(seed, view_size);
        state.wave = 1;
        super::tick::spawn_wave(&mut state);
        state
    }

    /// Create a game with no asteroids (the first tick schedules a wave)
    pub fn empty(seed: u64, view_size: Vec2) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            view_size,
            score: 0,
            asteroid_target: INITIAL_ASTEROID_COUNT,
            wave: 0,
            frame: 0,
            phase: GamePhase::Playing,
            ship: Ship::new(),
            asteroids: Vec::new(),
            bullets: Vec::new(),
            stats: SessionStats {
                games_played: 1,
                ..SessionStats::default()
            },
            next_id: 1,
        }
    }

    /// Allocate a new asteroid id
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Build an asteroid with a fresh id and jittered outline, without adding it
    pub fn make_asteroid(&mut self, position: Vec2, velocity: Vec2, size: AsteroidSize) -> Asteroid {
        let id = self.next_entity_id();
        Asteroid::new(id, position, velocity, size, &mut self.rng)
    }

    /// Add an asteroid to the field and return its id
    pub fn spawn_asteroid(&mut self, position: Vec2, velocity: Vec2, size: AsteroidSize) -> u32 {
        let asteroid = self.make_asteroid(position, velocity, size);
        let id = asteroid.id;
        self.asteroids.push(asteroid);
        id
    }

    /// Fire a bullet from the ship's position along its heading
    pub fn fire(&mut self) {
        let bullet = Bullet::new(self.ship.position(), self.ship.shape.rotation);
        self.bullets.push(bullet);
        self.stats.shots_fired += 1;
    }

    pub fn is_game_over(&self) -> bool {
        matches!(self.phase, GamePhase::GameOver { .. })
    }

    /// Whether restart input would be accepted this frame
    pub fn can_restart(&self) -> bool {
        match self.phase {
            GamePhase::GameOver { restart_at } => self.frame >= restart_at,
            _ => false,
        }
    }
}
