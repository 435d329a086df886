//! Frame driver
//!
//! Turns wall-clock frame time into fixed simulation ticks, tracks the debug
//! overlay toggle and hands each frame to the renderer.

use serde::Serialize;

use crate::Settings;
use crate::consts::MAX_SUBSTEPS;
use crate::platform::InputSource;
use crate::renderer::{DrawSink, render};
use crate::sim::{GamePhase, GameState, SessionStats, TickInput, tick};

/// Longest frame time fed to the accumulator, in seconds
const MAX_FRAME_TIME: f32 = 0.1;

/// Snapshot of a session for reporting
#[derive(Debug, Clone, Serialize)]
pub struct SessionSummary {
    pub seed: u64,
    pub frames: u64,
    pub wave: u32,
    pub score: u64,
    pub phase: GamePhase,
    pub asteroids: usize,
    pub stats: SessionStats,
}

/// Game instance holding all state
pub struct Game {
    state: GameState,
    settings: Settings,
    debug: bool,
    accumulator: f32,
    /// Input carried into the next tick; one-shots stick until consumed
    pending: TickInput,
}

impl Game {
    pub fn new(settings: Settings) -> Self {
        let seed = settings.resolve_seed();
        log::info!(
            "New game: seed {}, view {}x{}, {} ticks/s",
            seed,
            settings.view_width,
            settings.view_height,
            settings.frame_rate_limit
        );
        let state = GameState::new(seed, settings.view_size());
        Self::with_state(settings, state)
    }

    /// Drive an existing state (scenario setups, replays)
    pub fn with_state(settings: Settings, state: GameState) -> Self {
        Self {
            debug: settings.show_debug,
            state,
            settings,
            accumulator: 0.0,
            pending: TickInput::default(),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn debug(&self) -> bool {
        self.debug
    }

    /// Run simulation ticks for `dt` seconds of frame time.
    ///
    /// Returns the number of ticks run, at most `MAX_SUBSTEPS`. Held inputs
    /// apply to every tick; fire and restart apply to the first tick only.
    pub fn update(&mut self, dt: f32, input: TickInput) -> u32 {
        let sim_dt = self.settings.sim_dt();
        self.merge_input(input);
        let dt = if dt.is_finite() { dt } else { 0.0 };
        self.accumulator += dt.clamp(0.0, MAX_FRAME_TIME);

        let mut substeps = 0;
        while self.accumulator >= sim_dt && substeps < MAX_SUBSTEPS {
            self.step();
            self.accumulator -= sim_dt;
            substeps += 1;
        }

        if substeps == MAX_SUBSTEPS && self.accumulator >= sim_dt {
            log::debug!("Dropping {:.4}s of simulation backlog", self.accumulator);
            self.accumulator = 0.0;
        }

        substeps
    }

    /// Run exactly `ticks` simulation ticks with the same held input
    pub fn advance(&mut self, ticks: u32, input: TickInput) {
        self.merge_input(input);
        for _ in 0..ticks {
            self.step();
        }
    }

    /// Poll, simulate and draw one frame. Returns false once quit is requested.
    pub fn frame<I, S>(&mut self, source: &mut I, dt: f32, sink: &mut S) -> bool
    where
        I: InputSource + ?Sized,
        S: DrawSink + ?Sized,
    {
        let input = source.poll_input();
        if input.quit {
            log::info!("Quit requested at frame {}", self.state.frame);
            return false;
        }
        if input.toggle_debug {
            self.debug = !self.debug;
            log::debug!("Debug overlay {}", if self.debug { "on" } else { "off" });
        }

        self.update(dt, input);
        render(&self.state, sink, self.debug);
        true
    }

    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            seed: self.state.seed,
            frames: self.state.frame,
            wave: self.state.wave,
            score: self.state.score,
            phase: self.state.phase,
            asteroids: self.state.asteroids.len(),
            stats: self.state.stats.clone(),
        }
    }

    fn merge_input(&mut self, input: TickInput) {
        let fire = self.pending.fire || input.fire;
        let restart = self.pending.restart || input.restart;
        self.pending = TickInput {
            fire,
            restart,
            ..input
        };
    }

    fn step(&mut self) {
        tick(&mut self.state, &self.pending);
        // Clear one-shot inputs after processing
        self.pending.fire = false;
        self.pending.restart = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::ScriptedInput;
    use crate::renderer::DrawList;

    fn settings() -> Settings {
        Settings {
            seed: Some(9),
            frame_rate_limit: 64,
            ..Settings::default()
        }
    }

    fn fire() -> TickInput {
        TickInput {
            fire: true,
            ..TickInput::default()
        }
    }

    #[test]
    fn test_update_runs_whole_ticks() {
        let mut game = Game::new(settings());
        let dt = game.settings().sim_dt();

        assert_eq!(game.update(dt * 0.5, TickInput::default()), 0);
        assert_eq!(game.update(dt * 0.5, TickInput::default()), 1);
        assert_eq!(game.update(dt * 3.0, TickInput::default()), 3);
        assert_eq!(game.state().frame, 4);
    }

    #[test]
    fn test_update_caps_substeps() {
        // 0.1s at 144 ticks/s is more than the substep cap
        let mut game = Game::new(Settings {
            frame_rate_limit: 144,
            ..settings()
        });
        assert_eq!(game.update(1.0, TickInput::default()), MAX_SUBSTEPS);
        // Backlog is dropped rather than replayed next frame
        assert_eq!(game.update(0.0, TickInput::default()), 0);
    }

    #[test]
    fn test_non_finite_frame_time_is_ignored() {
        let mut game = Game::new(settings());
        let dt = game.settings().sim_dt();

        assert_eq!(game.update(f32::NAN, TickInput::default()), 0);
        assert_eq!(game.update(f32::INFINITY, TickInput::default()), 0);
        assert_eq!(game.update(dt, TickInput::default()), 1);
    }

    #[test]
    fn test_fire_applies_once_per_frame() {
        let mut game = Game::new(settings());
        let dt = game.settings().sim_dt();

        game.update(dt * 4.0, fire());
        assert_eq!(game.state().stats.shots_fired, 1);
    }

    #[test]
    fn test_fire_waits_for_next_tick() {
        let mut game = Game::new(settings());
        let dt = game.settings().sim_dt();

        assert_eq!(game.update(dt * 0.25, fire()), 0);
        assert_eq!(game.state().stats.shots_fired, 0);
        game.update(dt, TickInput::default());
        assert_eq!(game.state().stats.shots_fired, 1);
    }

    #[test]
    fn test_advance_runs_exact_ticks() {
        let mut game = Game::new(settings());
        game.advance(10, fire());
        assert_eq!(game.state().frame, 10);
        assert_eq!(game.state().stats.shots_fired, 1);
    }

    #[test]
    fn test_frame_toggles_debug_and_quits() {
        let mut game = Game::new(settings());
        let toggle = TickInput {
            toggle_debug: true,
            ..TickInput::default()
        };
        let mut source = ScriptedInput::new([toggle]).then_quit();
        let mut sink = DrawList::new();
        let dt = game.settings().sim_dt();

        assert!(game.frame(&mut source, dt, &mut sink));
        assert!(game.debug());
        assert!(!sink.texts.is_empty());
        assert!(sink.shape_count() > 0);

        sink.clear();
        assert!(!game.frame(&mut source, dt, &mut sink));
        assert_eq!(sink.shape_count(), 0);
    }

    #[test]
    fn test_same_seed_same_session() {
        let mut a = Game::new(settings());
        let mut b = Game::new(settings());
        let thrust = TickInput {
            thrust: true,
            turn_left: true,
            ..TickInput::default()
        };
        a.advance(200, thrust);
        b.advance(200, thrust);
        assert_eq!(a.state().ship.position(), b.state().ship.position());
        assert_eq!(a.summary().stats, b.summary().stats);
    }
}
