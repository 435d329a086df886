//! End-to-end gameplay scenarios driven through the public API

use glam::Vec2;
use rock_drift::consts::*;
use rock_drift::platform::ScriptedInput;
use rock_drift::renderer::DrawList;
use rock_drift::sim::{AsteroidSize, Bullet, GamePhase, GameState, TickInput, tick};
use rock_drift::{Game, Settings};

const VIEW: Vec2 = Vec2::new(VIEW_WIDTH, VIEW_HEIGHT);

fn idle() -> TickInput {
    TickInput::default()
}

fn fire() -> TickInput {
    TickInput {
        fire: true,
        ..TickInput::default()
    }
}

#[test]
fn shooting_a_big_asteroid_splits_it() {
    let mut state = GameState::empty(3, VIEW);
    state.spawn_asteroid(Vec2::new(500.0, 0.0), Vec2::ZERO, AsteroidSize::Big);
    state.ship.shape.rotation = 90.0;

    tick(&mut state, &fire());
    assert_eq!(state.bullets.len(), 1);
    assert!(state.bullets[0].velocity.x > 4.99);

    let mut ticks = 0;
    while state.asteroids.len() == 1 && ticks < 200 {
        tick(&mut state, &idle());
        ticks += 1;
    }

    assert_eq!(state.asteroids.len(), 2);
    assert!(state.asteroids.iter().all(|a| a.size == AsteroidSize::Medium));
    assert!(state.bullets.is_empty());
    assert_eq!(state.score, 20);
    assert_eq!(state.stats.asteroids_destroyed, 1);
    assert_eq!(state.phase, GamePhase::Playing);
}

#[test]
fn ship_touching_asteroid_ends_the_game() {
    let mut state = GameState::empty(4, VIEW);
    // Rock centered on the ship's nose
    state.spawn_asteroid(Vec2::new(0.0, -10.0), Vec2::ZERO, AsteroidSize::Big);
    state.bullets.push(Bullet::new(Vec2::new(-600.0, 300.0), 90.0));

    tick(&mut state, &idle());

    assert_eq!(
        state.phase,
        GamePhase::GameOver {
            restart_at: 1 + GAME_OVER_DELAY_TICKS
        }
    );
    assert!(state.bullets.is_empty());
    assert!(!state.can_restart());

    // Firing is ignored while the wreck is on screen
    tick(&mut state, &fire());
    assert!(state.bullets.is_empty());
    assert_eq!(state.stats.shots_fired, 0);
}

#[test]
fn restart_after_game_over_delay() {
    let mut state = GameState::empty(5, VIEW);
    state.spawn_asteroid(Vec2::new(0.0, -10.0), Vec2::ZERO, AsteroidSize::Big);
    state.score = 140;
    tick(&mut state, &idle());
    assert!(state.is_game_over());

    let restart = TickInput {
        restart: true,
        ..TickInput::default()
    };
    while state.is_game_over() {
        tick(&mut state, &restart);
    }

    assert_eq!(state.frame, 1 + GAME_OVER_DELAY_TICKS);
    assert_eq!(state.score, 0);
    assert!(state.asteroids.is_empty());
    assert_eq!(state.stats.games_played, 2);

    // Next tick schedules the first wave of the new game
    tick(&mut state, &idle());
    assert!(matches!(state.phase, GamePhase::RoundClearing { .. }));
}

#[test]
fn waves_escalate_by_two() {
    let mut state = GameState::empty(6, VIEW);

    tick(&mut state, &idle());
    assert_eq!(
        state.phase,
        GamePhase::RoundClearing {
            spawn_at: 1 + ROUND_DELAY_TICKS
        }
    );

    for _ in 0..ROUND_DELAY_TICKS {
        tick(&mut state, &idle());
    }
    assert_eq!(state.phase, GamePhase::Playing);
    assert_eq!(state.asteroids.len(), 7);
    assert_eq!(state.wave, 1);

    state.asteroids.clear();
    tick(&mut state, &idle());
    assert!(matches!(state.phase, GamePhase::RoundClearing { .. }));
    assert_eq!(state.stats.waves_cleared, 1);

    for _ in 0..ROUND_DELAY_TICKS {
        tick(&mut state, &idle());
    }
    assert_eq!(state.asteroids.len(), 9);
    assert_eq!(state.wave, 2);
    assert!(
        state
            .asteroids
            .iter()
            .all(|a| a.position().distance(state.ship.position()) >= SPAWN_SAFE_RADIUS)
    );
}

#[test]
fn scripted_session_runs_to_quit() {
    let settings = Settings {
        seed: Some(11),
        ..Settings::default()
    };
    let dt = settings.sim_dt();
    let mut game = Game::new(settings);
    let mut source = ScriptedInput::default().repeat(fire(), 30).then_quit();
    let mut draw_list = DrawList::new();

    let mut frames = 0;
    while game.frame(&mut source, dt, &mut draw_list) {
        assert!(draw_list.texts.iter().any(|t| t.text.starts_with("Score: ")));
        draw_list.clear();
        frames += 1;
    }

    assert_eq!(frames, 30);
    let summary = game.summary();
    assert_eq!(summary.seed, 11);
    assert_eq!(summary.stats.shots_fired, 30);

    let json = serde_json::to_string(&summary).unwrap();
    assert!(json.contains("\"shots_fired\":30"));
}
