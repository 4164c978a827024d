//! Render sink contract
//!
//! The game hands a sink one `Frame` per `Game::advance` call. Sinks only
//! read; nothing they do feeds back into the simulation.

use crate::sim::Level;

/// Heads-up display data
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hud {
    /// 1-based level number
    pub level_number: usize,
    /// Simulated time spent in this level
    pub elapsed_secs: f64,
    pub playing: bool,
    /// Meaningful only when not playing: cleared (true) or died (false)
    pub success: bool,
}

impl Hud {
    /// Top-left status line, e.g. `"3: 12.5s"`
    pub fn status_line(&self) -> String {
        format!("{}: {:.1}s", self.level_number, self.elapsed_secs)
    }

    /// Centered banner shown while play is stopped
    pub fn banner(&self) -> Option<&'static str> {
        match (self.playing, self.success) {
            (true, _) => None,
            (false, true) => Some("Level passed - click to begin"),
            (false, false) => Some("Game over - click to begin"),
        }
    }
}

/// Everything a sink needs to draw one frame
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    pub level: &'a Level,
    pub hud: Hud,
}

/// Something that turns frames into pixels (or vertices, or logs)
pub trait RenderSink {
    fn draw(&mut self, frame: &Frame<'_>);
}

impl<S: RenderSink + ?Sized> RenderSink for &mut S {
    fn draw(&mut self, frame: &Frame<'_>) {
        (**self).draw(frame);
    }
}
