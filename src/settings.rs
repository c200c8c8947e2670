//! Player preferences
//!
//! Persisted separately from high scores.

use serde::{Deserialize, Serialize};

use crate::persistence::{self, KeyValueStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Play sound effects
    pub sound_on: bool,
    /// Vibrate on lost lives and game over
    pub vibration_on: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sound_on: true,
            vibration_on: true,
        }
    }
}

impl Settings {
    pub const STORAGE_KEY: &'static str = "brick_breaker_settings";

    pub fn load(store: &dyn KeyValueStore) -> Self {
        persistence::load_or_default(store, Self::STORAGE_KEY)
    }

    pub fn save(&self, store: &mut dyn KeyValueStore) -> persistence::Result<()> {
        persistence::save_json(store, Self::STORAGE_KEY, self)?;
        log::info!(
            "Settings saved (sound: {}, vibration: {})",
            self.sound_on,
            self.vibration_on
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemoryStore;

    #[test]
    fn test_defaults_are_on() {
        let store = MemoryStore::new();
        assert_eq!(Settings::load(&store), Settings::default());
        assert!(Settings::default().sound_on);
        assert!(Settings::default().vibration_on);
    }

    #[test]
    fn test_save_and_load() {
        let mut store = MemoryStore::new();
        let settings = Settings {
            sound_on: false,
            vibration_on: true,
        };
        settings.save(&mut store).unwrap();
        assert_eq!(Settings::load(&store), settings);
    }

    #[test]
    fn test_missing_field_uses_default() {
        let mut store = MemoryStore::new();
        store
            .set(Settings::STORAGE_KEY, r#"{ "sound_on": false }"#)
            .unwrap();
        let settings = Settings::load(&store);
        assert!(!settings.sound_on);
        assert!(settings.vibration_on);
    }
}
