//! Game controller
//!
//! Owns the level table, the live `Level`, the play/stop state machine and the
//! fixed-rate clock. Input events land here; `advance` runs however many
//! ticks the wall clock asks for and then hands one frame to a render sink.

use glam::Vec2;

use crate::consts::TICK_MS;
use crate::error::Error;
use crate::input::{Action, InputState, MouseButton};
use crate::render::{Frame, Hud, RenderSink};
use crate::settings::Settings;
use crate::sim::{LEVELS, Level, LevelLayout, TickOutcome, decode, tick};

/// Top-level game state
#[derive(Debug)]
pub struct Game {
    layouts: Vec<LevelLayout>,
    level: Option<Level>,
    level_index: usize,
    playing: bool,
    success: bool,
    /// Ticks run since the current level was loaded
    steps: u64,
    /// Wall-clock time (ms) the current level's tick zero lines up with
    started_at: Option<f64>,
    input: InputState,
    settings: Settings,
}

impl Game {
    /// Decode the built-in levels and start the first one
    pub fn new(settings: Settings) -> Result<Self, Error> {
        Self::with_levels(settings, LEVELS)
    }

    /// Same as `new` with a caller-supplied level table
    ///
    /// Every entry is decoded up front; the first bad one aborts startup.
    pub fn with_levels(settings: Settings, levels: &[&str]) -> Result<Self, Error> {
        let layouts = levels
            .iter()
            .enumerate()
            .map(|(index, text)| {
                decode(text).map_err(|source| Error::Decode {
                    index: Some(index),
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mut game = Self {
            layouts,
            level: None,
            level_index: 0,
            playing: true,
            success: false,
            steps: 0,
            started_at: None,
            input: InputState::new(),
            settings,
        };
        game.set_level(0)?;
        Ok(game)
    }

    /// Build a fresh `Level` for `index` and make it current
    ///
    /// Does not touch the play flag: a stopped game stays stopped.
    pub fn set_level(&mut self, index: usize) -> Result<(), Error> {
        let layout = self.layouts.get(index).ok_or(Error::UnknownLevel {
            index,
            count: self.layouts.len(),
        })?;

        let level = Level::new(index + 1, layout);
        log::info!(
            "Level {}: {} boundary points, {} obstacles",
            level.number,
            level.boundary.len(),
            level.obstacles.len()
        );
        self.level = Some(level);
        self.level_index = index;
        self.success = false;
        self.steps = 0;
        self.started_at = None;
        Ok(())
    }

    /// Resume trigger: reload the current index and play, if stopped
    pub fn start_level_if_not_playing(&mut self) {
        if self.playing {
            return;
        }
        self.input.clear();
        if let Err(err) = self.set_level(self.level_index) {
            log::warn!("Cannot resume: {err}");
            return;
        }
        self.playing = true;
    }

    /// Decode a level string into the last table slot and queue it
    ///
    /// On success play stops so the next resume starts the new level. On
    /// failure the table is left as it was.
    pub fn load_custom_level(&mut self, text: &str) -> Result<(), Error> {
        let layout = match decode(text.trim()) {
            Ok(layout) => layout,
            Err(err) => {
                log::warn!("Rejected custom level: {err}");
                return Err(err.into());
            }
        };
        let Some(slot) = self.layouts.last_mut() else {
            return Err(Error::UnknownLevel { index: 0, count: 0 });
        };

        log::info!(
            "Custom level loaded: {} boundary points, {} obstacles",
            layout.boundary.len(),
            layout.obstacles.len()
        );
        *slot = layout;
        self.level_index = self.layouts.len() - 1;
        self.playing = false;
        Ok(())
    }

    /// Keyboard press by physical key code; auto-repeat is ignored
    pub fn key_down(&mut self, code: &str, repeat: bool) {
        if repeat {
            return;
        }
        if let Some(action) = self.settings.action_for(code) {
            self.input.press_key(action);
        }
    }

    /// Releasing a key drops its press if no tick consumed it yet
    pub fn key_up(&mut self, code: &str) {
        if let Some(action) = self.settings.action_for(code) {
            self.input.release_key(action);
        }
    }

    /// Mouse press in screen coordinates; also acts as the resume trigger
    pub fn mouse_down(&mut self, button: i16, at: Vec2) {
        match MouseButton::from_code(button) {
            Some(button) => self.input.press_button(button, at),
            None => self.input.move_cursor(at),
        }
        self.start_level_if_not_playing();
    }

    pub fn mouse_move(&mut self, at: Vec2) {
        self.input.move_cursor(at);
    }

    /// Run one fixed-timestep tick, if a level is being played
    pub fn step(&mut self) -> Option<TickOutcome> {
        if !self.playing {
            return None;
        }
        let level = self.level.as_mut()?;

        let input = self.input.take_tick_input();
        let outcome = tick(level, &input);
        let number = level.number;

        if outcome.player_lost {
            log::info!("Level {number}: died after {} ticks", self.steps + 1);
            self.playing = false;
        }
        if outcome.target_reached {
            log::info!("Level {number}: cleared after {} ticks", self.steps + 1);
            self.playing = false;
            self.success = true;
            self.level_index = (self.level_index + 1) % self.layouts.len();
        }

        self.apply_overrides();
        self.steps += 1;
        Some(outcome)
    }

    /// Restart / skip keys, consumed after the physics of the tick
    fn apply_overrides(&mut self) {
        if self.input.take_key(Action::Restart) {
            log::info!("Restarting level {}", self.level_index + 1);
            self.playing = false;
        }
        // In-game loading has no source to load from; the press is dropped
        self.input.take_key(Action::LoadCustom);
        if self.input.take_key(Action::NextLevel) {
            self.level_index = (self.level_index + 1).min(self.layouts.len() - 1);
            self.playing = false;
            self.success = true;
            log::info!("Skipping ahead to level {}", self.level_index + 1);
        }
        if self.input.take_key(Action::PreviousLevel) {
            self.level_index = self.level_index.saturating_sub(1);
            self.playing = false;
            self.success = true;
            log::info!("Going back to level {}", self.level_index + 1);
        }
    }

    /// Catch the simulation up to `now_ms`, then draw one frame
    ///
    /// The first call after a level loads anchors the level clock. If more
    /// than `max_catch_up_steps` ticks are owed, the rest are dropped and the
    /// clock re-anchored so the level resumes from where it stopped.
    /// Returns the number of ticks run.
    pub fn advance<S: RenderSink + ?Sized>(&mut self, now_ms: f64, sink: &mut S) -> u32 {
        let started_at = *self.started_at.get_or_insert(now_ms);
        let mut ran = 0;

        while self.playing && self.simulated_ms() < now_ms - started_at {
            if ran >= self.settings.max_catch_up_steps {
                log::warn!(
                    "Fell {:.0}ms behind, skipping ahead",
                    now_ms - started_at - self.simulated_ms()
                );
                self.started_at = Some(now_ms - self.simulated_ms());
                break;
            }
            self.step();
            ran += 1;
        }

        if let Some(level) = &self.level {
            sink.draw(&Frame {
                level,
                hud: self.hud(),
            });
        }
        ran
    }

    fn simulated_ms(&self) -> f64 {
        self.steps as f64 * TICK_MS
    }

    pub fn elapsed_seconds(&self) -> f64 {
        self.simulated_ms() / 1000.0
    }

    pub fn hud(&self) -> Hud {
        Hud {
            level_number: self.level_index + 1,
            elapsed_secs: self.elapsed_seconds(),
            playing: self.playing,
            success: self.success,
        }
    }

    pub fn level(&self) -> Option<&Level> {
        self.level.as_ref()
    }

    pub fn level_index(&self) -> usize {
        self.level_index
    }

    pub fn level_count(&self) -> usize {
        self.layouts.len()
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn success(&self) -> bool {
        self.success
    }

    pub fn steps(&self) -> u64 {
        self.steps
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }
}
