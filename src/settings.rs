//! Player settings
//!
//! Key bindings and driver limits. Physics constants are fixed and live in
//! `crate::consts`; nothing here changes how the simulation behaves.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::input::Action;

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Physical key code (e.g. "KeyZ") to action
    pub key_bindings: BTreeMap<String, Action>,

    /// Most ticks one `Game::advance` call may run before it gives up
    /// catching up to the wall clock
    pub max_catch_up_steps: u32,

    /// Drawing surface size in pixels
    pub surface_width: u32,
    pub surface_height: u32,
}

impl Default for Settings {
    fn default() -> Self {
        let key_bindings = [
            ("KeyZ", Action::FireLeft),
            ("KeyX", Action::FireRight),
            ("KeyC", Action::FireBoth),
            ("KeyR", Action::Restart),
            ("KeyW", Action::NextLevel),
            ("KeyQ", Action::PreviousLevel),
            ("KeyL", Action::LoadCustom),
        ]
        .into_iter()
        .map(|(code, action)| (code.to_string(), action))
        .collect();

        Self {
            key_bindings,
            // Four simulated seconds
            max_catch_up_steps: 240,
            surface_width: 800,
            surface_height: 600,
        }
    }
}

impl Settings {
    /// Action bound to a key code, if any
    pub fn action_for(&self, code: &str) -> Option<Action> {
        self.key_bindings.get(code).copied()
    }

    /// Parse settings JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load settings from a JSON file, falling back to defaults if it is absent
    pub fn load(path: &Path) -> Result<Self, Error> {
        match std::fs::read_to_string(path) {
            Ok(json) => {
                let settings = Self::from_json(&json)?;
                log::info!("Loaded settings from {}", path.display());
                Ok(settings)
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                log::info!("No settings at {}, using defaults", path.display());
                Ok(Self::default())
            }
            Err(err) => {
                log::warn!("Could not read {}: {err}, using defaults", path.display());
                Ok(Self::default())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bindings() {
        let settings = Settings::default();
        assert_eq!(settings.action_for("KeyZ"), Some(Action::FireLeft));
        assert_eq!(settings.action_for("KeyC"), Some(Action::FireBoth));
        assert_eq!(settings.action_for("KeyQ"), Some(Action::PreviousLevel));
        assert_eq!(settings.action_for("Space"), None);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings = Settings::from_json(r#"{ "max_catch_up_steps": 30 }"#).unwrap();
        assert_eq!(settings.max_catch_up_steps, 30);
        assert_eq!(settings.surface_width, 800);
        assert_eq!(settings.action_for("KeyX"), Some(Action::FireRight));
    }

    #[test]
    fn test_custom_bindings() {
        let json = r#"{ "key_bindings": { "Space": "fire-both", "Escape": "restart" } }"#;
        let settings = Settings::from_json(json).unwrap();
        assert_eq!(settings.action_for("Space"), Some(Action::FireBoth));
        assert_eq!(settings.action_for("Escape"), Some(Action::Restart));
        // Replacing the map drops the default bindings
        assert_eq!(settings.action_for("KeyZ"), None);
    }

    #[test]
    fn test_bad_json_is_an_error() {
        let err = Settings::from_json(r#"{ "key_bindings": { "KeyZ": "jump" } }"#).unwrap_err();
        assert!(matches!(err, Error::Settings(_)));
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let settings = Settings::load(Path::new("/nonexistent/spider-ball.json")).unwrap();
        assert_eq!(settings, Settings::default());
    }
}
