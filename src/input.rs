//! Pressed-key and pressed-button bookkeeping
//!
//! The event layer inserts identifiers as they go down; the simulation
//! removes them as it consumes them. Consumption is edge-triggered: a key
//! or button fires once per press, and several presses between two ticks
//! collapse into one.

use std::collections::HashSet;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::sim::TickInput;

/// Semantic keyboard actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Action {
    FireLeft,
    FireRight,
    FireBoth,
    Restart,
    NextLevel,
    PreviousLevel,
    /// Reserved: consumed but does nothing in-game
    LoadCustom,
}

/// Mouse buttons, numbered as the browser numbers them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
}

impl MouseButton {
    pub fn from_code(code: i16) -> Option<Self> {
        match code {
            0 => Some(MouseButton::Left),
            1 => Some(MouseButton::Middle),
            2 => Some(MouseButton::Right),
            _ => None,
        }
    }
}

/// Currently pressed keys and buttons plus the last cursor position
#[derive(Debug, Clone, Default)]
pub struct InputState {
    keys: HashSet<Action>,
    buttons: HashSet<MouseButton>,
    cursor: Vec2,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press_key(&mut self, action: Action) {
        self.keys.insert(action);
    }

    pub fn release_key(&mut self, action: Action) {
        self.keys.remove(&action);
    }

    /// Record a button press; the cursor moves to where it happened
    pub fn press_button(&mut self, button: MouseButton, at: Vec2) {
        self.buttons.insert(button);
        self.cursor = at;
    }

    pub fn move_cursor(&mut self, at: Vec2) {
        self.cursor = at;
    }

    pub fn cursor(&self) -> Vec2 {
        self.cursor
    }

    pub fn is_pressed(&self, action: Action) -> bool {
        self.keys.contains(&action)
    }

    pub fn is_button_pressed(&self, button: MouseButton) -> bool {
        self.buttons.contains(&button)
    }

    /// Consume a key press, returning whether it was pending
    pub fn take_key(&mut self, action: Action) -> bool {
        self.keys.remove(&action)
    }

    /// Fold key chords into button presses, then consume every button
    ///
    /// Fire-left / fire-right keys act as the left / right button; fire-both
    /// or the middle button act as both.
    pub fn take_tick_input(&mut self) -> TickInput {
        if self.take_key(Action::FireLeft) {
            self.buttons.insert(MouseButton::Left);
        }
        if self.take_key(Action::FireRight) {
            self.buttons.insert(MouseButton::Right);
        }
        if self.take_key(Action::FireBoth) || self.buttons.contains(&MouseButton::Middle) {
            self.buttons.insert(MouseButton::Left);
            self.buttons.insert(MouseButton::Right);
        }

        let input = TickInput {
            fire_left: self.buttons.contains(&MouseButton::Left),
            fire_right: self.buttons.contains(&MouseButton::Right),
            cursor: self.cursor,
        };
        self.buttons.clear();
        input
    }

    /// Drop every pending key and button (the cursor stays)
    pub fn clear(&mut self) {
        self.keys.clear();
        self.buttons.clear();
    }
}
