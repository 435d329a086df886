//! Fixed-step simulation tick
//!
//! Advances the game by one frame: ship control, movement with wrapping,
//! collision resolution and the round lifecycle.

use glam::Vec2;

use super::collision::{find_bullet_hits, ship_asteroid_collision};
use super::random::{random_jitter, random_vec2};
use super::state::{Asteroid, AsteroidSize, GamePhase, GameState};
use super::wrap::apply_velocity;
use crate::consts::*;
use crate::magnitude;

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Close the game (handled by the frame driver)
    pub quit: bool,
    /// Accelerate along the current heading
    pub thrust: bool,
    /// Rotate counter-clockwise
    pub turn_left: bool,
    /// Rotate clockwise
    pub turn_right: bool,
    /// Fire one bullet (one-shot)
    pub fire: bool,
    /// Start a new game once game over allows it (one-shot)
    pub restart: bool,
    /// Toggle the debug overlay (handled by the frame driver)
    pub toggle_debug: bool,
}

/// Advance the game state by one tick
pub fn tick(state: &mut GameState, input: &TickInput) {
    state.frame += 1;
    let view = state.view_size;

    if let GamePhase::GameOver { .. } = state.phase {
        // Wreck stays put; the field keeps drifting behind the banner
        for asteroid in &mut state.asteroids {
            apply_velocity(&mut asteroid.shape, asteroid.velocity, view);
        }
        if input.restart && state.can_restart() {
            restart(state);
        }
        return;
    }

    // Ship control
    state.ship.steer(input.thrust, input.turn_left, input.turn_right);
    if input.fire {
        state.fire();
    }

    // Movement and wrapping
    for asteroid in &mut state.asteroids {
        apply_velocity(&mut asteroid.shape, asteroid.velocity, view);
    }
    apply_velocity(&mut state.ship.shape, state.ship.velocity, view);

    let mut bullets_to_remove: Vec<usize> = Vec::new();
    let mut spent = vec![false; state.bullets.len()];
    for (i, bullet) in state.bullets.iter_mut().enumerate() {
        apply_velocity(&mut bullet.shape, bullet.velocity, view);
        bullet.range -= magnitude(bullet.velocity);
        if bullet.is_expired() {
            spent[i] = true;
            bullets_to_remove.push(i);
        }
    }

    // Bullets against asteroids
    let hits = find_bullet_hits(&state.bullets, &state.asteroids, &spent);
    let mut asteroids_to_remove: Vec<usize> = Vec::with_capacity(hits.len());
    let mut asteroids_to_add: Vec<Asteroid> = Vec::new();

    for hit in &hits {
        let (position, velocity, size, id) = {
            let target = &state.asteroids[hit.asteroid];
            (target.position(), target.velocity, target.size, target.id)
        };
        log::debug!(
            "Bullet {} hit asteroid {} ({:?}) at {:?}",
            hit.bullet,
            id,
            size,
            position
        );

        state.score += size.score();
        state.stats.asteroids_destroyed += 1;
        bullets_to_remove.push(hit.bullet);
        asteroids_to_remove.push(hit.asteroid);

        if let Some(fragment) = size.split() {
            let scatter = size.fragment_scatter();
            for _ in 0..2 {
                let offset = random_jitter(&mut state.rng, scatter);
                let drift = random_jitter(&mut state.rng, 1.0);
                let child = state.make_asteroid(position + offset, velocity + drift, fragment);
                asteroids_to_add.push(child);
            }
        }
    }

    remove_indices(&mut state.bullets, bullets_to_remove);
    remove_indices(&mut state.asteroids, asteroids_to_remove);
    state.asteroids.extend(asteroids_to_add);

    match state.phase {
        GamePhase::Playing => {
            if let Some(idx) = ship_asteroid_collision(&state.ship, &state.asteroids) {
                let restart_at = state.frame + GAME_OVER_DELAY_TICKS;
                log::info!(
                    "Ship destroyed by asteroid {} at frame {} (score {})",
                    state.asteroids[idx].id,
                    state.frame,
                    state.score
                );
                state.bullets.clear();
                state.phase = GamePhase::GameOver { restart_at };
            } else if state.asteroids.is_empty() {
                let spawn_at = state.frame + ROUND_DELAY_TICKS;
                log::info!(
                    "Wave {} cleared at frame {}, next wave at frame {}",
                    state.wave,
                    state.frame,
                    spawn_at
                );
                if state.wave > 0 {
                    state.stats.waves_cleared += 1;
                }
                state.ship.reset();
                state.phase = GamePhase::RoundClearing { spawn_at };
            }
        }
        GamePhase::RoundClearing { spawn_at } => {
            if state.frame >= spawn_at {
                state.asteroid_target += WAVE_ESCALATION;
                state.wave += 1;
                spawn_wave(state);
                state.phase = GamePhase::Playing;
            }
        }
        GamePhase::GameOver { .. } => {}
    }
}

/// Reset score and wave size after a game over
fn restart(state: &mut GameState) {
    log::info!("Restarting after game over (final score {})", state.score);
    state.score = 0;
    state.asteroid_target = INITIAL_ASTEROID_COUNT;
    state.wave = 0;
    state.asteroids.clear();
    state.bullets.clear();
    state.ship.reset();
    state.stats.games_played += 1;
    state.phase = GamePhase::Playing;
}

/// Remove the given indices, highest first so earlier indices stay valid
fn remove_indices<T>(items: &mut Vec<T>, mut indices: Vec<usize>) {
    indices.sort_unstable_by(|a, b| b.cmp(a));
    indices.dedup();
    for idx in indices {
        items.remove(idx);
    }
}

/// Spawn `asteroid_target` big asteroids at random positions in the view.
///
/// Positions closer than `SPAWN_SAFE_RADIUS` to the ship are resampled a
/// bounded number of times.
pub fn spawn_wave(state: &mut GameState) {
    const PLACEMENT_ATTEMPTS: u32 = 32;

    let half = state.view_size / 2.0;
    let ship_pos = state.ship.position();
    log::info!(
        "Spawning wave {} with {} asteroids",
        state.wave,
        state.asteroid_target
    );

    for _ in 0..state.asteroid_target {
        let mut position = Vec2::ZERO;
        let mut placed = false;
        for _ in 0..PLACEMENT_ATTEMPTS {
            position = random_vec2(&mut state.rng, -half.x, half.x, -half.y, half.y);
            if position.distance(ship_pos) >= SPAWN_SAFE_RADIUS {
                placed = true;
                break;
            }
        }
        if !placed {
            log::warn!("No safe spawn point found, placing asteroid at {:?}", position);
        }

        let velocity = random_jitter(&mut state.rng, 1.0);
        let id = state.spawn_asteroid(position, velocity, AsteroidSize::Big);
        log::debug!("Asteroid {} spawned at {:?}", id, position);
    }
}
