use serde::{Deserialize, Serialize};

use crate::config::{ConfigContentProvider, ConfigManager, ConfigSerializer, Validate};
use crate::log;
use super::constants::{clamp_speed, DEFAULT_SPEED, MAX_SPEED, MIN_SPEED};

/// Player preferences and the best score, kept between runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub walls_enabled: bool,
    pub speed: u32,
    pub high_score: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            walls_enabled: true,
            speed: DEFAULT_SPEED,
            high_score: 0,
        }
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<(), String> {
        if !(MIN_SPEED..=MAX_SPEED).contains(&self.speed) {
            return Err(format!(
                "speed must be between {} and {}, got {}",
                MIN_SPEED, MAX_SPEED, self.speed
            ));
        }
        Ok(())
    }

    /// A stored speed outside the range is clamped so the rest of the record survives.
    fn repair(&mut self) {
        let speed = clamp_speed(self.speed);
        if speed != self.speed {
            log!("Stored speed {} is out of range, using {}", self.speed, speed);
            self.speed = speed;
        }
    }
}

impl Settings {
    pub fn toggle_walls(&mut self) {
        self.walls_enabled = !self.walls_enabled;
    }

    pub fn increase_speed(&mut self) {
        self.speed = (self.speed + 1).min(MAX_SPEED);
    }

    pub fn decrease_speed(&mut self) {
        self.speed = self.speed.saturating_sub(1).max(MIN_SPEED);
    }
}

/// Where the session loads its settings from and saves them to.
pub trait SettingsStore {
    /// Never fails: missing or unreadable data yields [`Settings::default`],
    /// an out-of-range speed is clamped.
    fn load_settings(&self) -> Settings;
    fn save_settings(&self, settings: &Settings) -> Result<(), String>;
}

impl<TConfigContentProvider, TConfigSerializer> SettingsStore
    for ConfigManager<TConfigContentProvider, Settings, TConfigSerializer>
where
    TConfigContentProvider: ConfigContentProvider,
    TConfigSerializer: ConfigSerializer<Settings>,
{
    fn load_settings(&self) -> Settings {
        self.load_or_default()
    }

    fn save_settings(&self, settings: &Settings) -> Result<(), String> {
        self.set_config(settings)
    }
}
