//! Rock Drift entry point
//!
//! Runs a headless session: loads settings, drives the game with a scripted
//! pilot for a fixed number of frames and prints a JSON summary. A windowed
//! front end plugs in through the same `InputSource` and `DrawSink` seams.

use rock_drift::platform::ScriptedInput;
use rock_drift::renderer::DrawList;
use rock_drift::sim::TickInput;
use rock_drift::{Game, Settings};

/// Frames simulated when no count is given on the command line
const DEFAULT_FRAMES: usize = 1200;

/// A simple pilot: turn and fire in bursts, with the odd thrust
fn demo_script(frames: usize) -> ScriptedInput {
    let inputs = (0..frames).map(|i| TickInput {
        thrust: i % 240 < 20,
        turn_left: i % 90 < 30,
        fire: i % 12 == 0,
        restart: i % 60 == 0,
        ..TickInput::default()
    });
    ScriptedInput::new(inputs).then_quit()
}

fn main() {
    env_logger::init();
    log::info!("Rock Drift (headless) starting...");

    let frames = match std::env::args().nth(1) {
        Some(arg) => arg.parse().unwrap_or_else(|e| {
            log::warn!("Bad frame count {:?} ({}), using {}", arg, e, DEFAULT_FRAMES);
            DEFAULT_FRAMES
        }),
        None => DEFAULT_FRAMES,
    };

    let settings = Settings::load();
    let dt = settings.sim_dt();
    let mut game = Game::new(settings);
    let mut source = demo_script(frames);
    let mut draw_list = DrawList::new();
    let mut vertex_bytes = 0usize;

    while game.frame(&mut source, dt, &mut draw_list) {
        vertex_bytes += draw_list.vertex_bytes().len();
        draw_list.clear();
    }
    log::debug!("Tessellated {} bytes of vertices", vertex_bytes);

    match serde_json::to_string_pretty(&game.summary()) {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("Failed to encode session summary: {}", e),
    }
}
