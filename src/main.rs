//! Spider Ball entry point
//!
//! Native headless driver: loads settings, then plays a scripted session
//! against a simulated 60 Hz display clock and logs what happens.
//!
//! Usage: `spider-ball [settings.json] [level-string]`

use std::path::Path;
use std::process::ExitCode;

use glam::Vec2;

use spider_ball::renderer::MeshRenderer;
use spider_ball::{Error, Game, Settings};

/// Simulated display refresh interval
const FRAME_MS: f64 = 1000.0 / 60.0;
/// Length of the scripted session
const SESSION_FRAMES: u32 = 60 * 20;
/// Frames between scripted shots
const SHOT_INTERVAL: u32 = 40;

#[cfg(not(target_arch = "wasm32"))]
fn main() -> ExitCode {
    env_logger::init();
    log::info!("Spider Ball (native) starting...");

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            eprintln!("spider-ball: {err}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {}

#[cfg(not(target_arch = "wasm32"))]
fn run() -> Result<(), Error> {
    let mut args = std::env::args().skip(1);
    let settings = match args.next() {
        Some(path) => Settings::load(Path::new(&path))?,
        None => Settings::default(),
    };

    let mut renderer = MeshRenderer::new(settings.surface_width, settings.surface_height)?;
    let mut game = Game::new(settings)?;

    if let Some(level) = args.next() {
        game.load_custom_level(&level)?;
        game.start_level_if_not_playing();
    }

    let mut cleared = 0;
    let mut died = 0;
    let mut was_playing = game.is_playing();

    for frame in 0..SESSION_FRAMES {
        let now = f64::from(frame) * FRAME_MS;

        if !game.is_playing() {
            // Click to begin
            game.mouse_down(0, Vec2::new(400.0, 300.0));
        } else if frame % SHOT_INTERVAL == 0 {
            // Alternate arms, aiming up and to either side of the player
            let (button, aim) = if (frame / SHOT_INTERVAL) % 2 == 0 {
                (0, Vec2::new(250.0, 60.0))
            } else {
                (2, Vec2::new(550.0, 60.0))
            };
            game.mouse_move(aim);
            game.mouse_down(button, aim);
        }

        game.advance(now, &mut renderer);

        if was_playing && !game.is_playing() {
            if game.success() {
                cleared += 1;
            } else {
                died += 1;
            }
            log::info!("{}", renderer.banner().unwrap_or_default());
        }
        was_playing = game.is_playing();
    }

    log::info!(
        "Session over: {cleared} cleared, {died} lost, {} frames drawn, last frame {} vertices",
        renderer.frames_drawn(),
        renderer.vertices().len()
    );
    log::info!("HUD: {}", renderer.status_line());
    if log::log_enabled!(log::Level::Debug) {
        if let Some(level) = game.level() {
            match serde_json::to_string(level) {
                Ok(json) => log::debug!("Final level state: {json}"),
                Err(err) => log::warn!("Could not snapshot level: {err}"),
            }
        }
    }
    Ok(())
}
