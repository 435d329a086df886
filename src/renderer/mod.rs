//! Presentation contract
//!
//! The simulation never draws. Each frame, [`render`] walks the game state
//! and emits shape and text requests into a [`DrawSink`]; the platform layer
//! owns the window and flushes the sink after presenting.

pub mod draw_list;
pub mod shapes;
pub mod vertex;

pub use draw_list::{DrawList, TextItem};
pub use vertex::{Vertex, colors};

use glam::Vec2;

use crate::sim::{GamePhase, GameState, RadialPolygon};

/// RGBA color, components in [0, 1]
pub type Color = [f32; 4];

/// Receiver of per-frame draw requests (fire-and-forget)
pub trait DrawSink {
    /// Draw a polygon in world space with the given fill and outline colors
    fn emit_shape(&mut self, polygon: &RadialPolygon, fill: Color, outline: Color);

    /// Draw a line of text with its top-left corner at `position`
    fn emit_text(&mut self, position: Vec2, text: &str);
}

/// Format a vector as fixed-width `(x, y)` with one decimal
pub fn fmt_vec(v: Vec2) -> String {
    format!("({:6.1}, {:6.1})", v.x, v.y)
}

/// Emit everything visible in `state`
pub fn render<S: DrawSink + ?Sized>(state: &GameState, sink: &mut S, debug: bool) {
    let half = state.view_size / 2.0;
    let top_left = Vec2::new(-half.x + 10.0, -half.y + 10.0);

    for bullet in &state.bullets {
        sink.emit_shape(&bullet.shape, colors::BULLET, colors::BULLET);
    }

    if !state.is_game_over() {
        sink.emit_shape(&state.ship.shape, colors::SHIP_FILL, colors::SHIP_OUTLINE);
    }

    for asteroid in &state.asteroids {
        sink.emit_shape(
            &asteroid.shape,
            colors::ASTEROID_FILL,
            colors::ASTEROID_OUTLINE,
        );
    }

    sink.emit_text(top_left, &format!("Score: {}", state.score));

    match state.phase {
        GamePhase::Playing => {}
        GamePhase::RoundClearing { .. } => {
            sink.emit_text(Vec2::new(-40.0, -60.0), &format!("WAVE {}", state.wave + 1));
        }
        GamePhase::GameOver { .. } => {
            sink.emit_text(Vec2::new(-50.0, -20.0), "GAME OVER");
            if state.can_restart() {
                sink.emit_text(Vec2::new(-90.0, 10.0), "Press R to restart");
            }
        }
    }

    if debug {
        render_debug(state, sink, top_left + Vec2::new(0.0, 20.0));
    }
}

fn render_debug<S: DrawSink + ?Sized>(state: &GameState, sink: &mut S, origin: Vec2) {
    let lines = [
        format!("Frame: {}  Phase: {:?}", state.frame, state.phase),
        format!("Ship pos: {}", fmt_vec(state.ship.position())),
        format!("Ship vel: {}", fmt_vec(state.ship.velocity)),
        format!("Heading: {:6.1}", state.ship.heading()),
        format!(
            "Asteroids: {}  Bullets: {}  Wave: {}",
            state.asteroids.len(),
            state.bullets.len(),
            state.wave
        ),
        format!(
            "Shots: {}  Destroyed: {}  Cleared: {}",
            state.stats.shots_fired, state.stats.asteroids_destroyed, state.stats.waves_cleared
        ),
    ];

    for (i, line) in lines.iter().enumerate() {
        sink.emit_text(origin + Vec2::new(0.0, 16.0 * i as f32), line);
    }

    for asteroid in &state.asteroids {
        sink.emit_text(asteroid.position(), &format!("#{}", asteroid.id));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::AsteroidSize;

    #[derive(Default)]
    struct Recorder {
        shapes: usize,
        texts: Vec<String>,
    }

    impl DrawSink for Recorder {
        fn emit_shape(&mut self, _polygon: &RadialPolygon, _fill: Color, _outline: Color) {
            self.shapes += 1;
        }

        fn emit_text(&mut self, _position: Vec2, text: &str) {
            self.texts.push(text.to_string());
        }
    }

    fn view() -> Vec2 {
        Vec2::new(1920.0, 1080.0)
    }

    #[test]
    fn test_fmt_vec() {
        assert_eq!(fmt_vec(Vec2::new(1.0, -300.0)), "(   1.0, -300.0)");
    }

    #[test]
    fn test_render_counts_entities() {
        let mut state = GameState::empty(1, view());
        state.spawn_asteroid(Vec2::new(400.0, 0.0), Vec2::ZERO, AsteroidSize::Big);
        state.fire();

        let mut sink = Recorder::default();
        render(&state, &mut sink, false);

        // ship + asteroid + bullet
        assert_eq!(sink.shapes, 3);
        assert_eq!(sink.texts, vec!["Score: 0".to_string()]);
    }

    #[test]
    fn test_debug_overlay_labels_asteroids() {
        let mut state = GameState::empty(1, view());
        let id = state.spawn_asteroid(Vec2::new(400.0, 0.0), Vec2::ZERO, AsteroidSize::Big);

        let mut sink = Recorder::default();
        render(&state, &mut sink, true);

        assert!(sink.texts.iter().any(|t| t == &format!("#{}", id)));
        assert!(sink.texts.iter().any(|t| t.starts_with("Ship pos: ")));
    }

    #[test]
    fn test_game_over_hides_ship() {
        let mut state = GameState::empty(1, view());
        state.spawn_asteroid(Vec2::new(400.0, 0.0), Vec2::ZERO, AsteroidSize::Big);
        state.phase = GamePhase::GameOver { restart_at: 10 };

        let mut sink = Recorder::default();
        render(&state, &mut sink, false);

        assert_eq!(sink.shapes, 1);
        assert!(sink.texts.iter().any(|t| t == "GAME OVER"));
        assert!(!sink.texts.iter().any(|t| t.contains("restart")));

        state.frame = 10;
        let mut sink = Recorder::default();
        render(&state, &mut sink, false);
        assert!(sink.texts.iter().any(|t| t.contains("restart")));
    }
}
