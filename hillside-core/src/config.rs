use serde::{Deserialize, Serialize};

use crate::walker::WALKER_COUNT;

pub const DEFAULT_WINDOW_WIDTH: i32 = 900;
pub const DEFAULT_WINDOW_HEIGHT: i32 = 700;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError(pub String);

impl ConfigError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Startup knobs for the scene. Every field has a built-in default, so an
/// empty JSON object is a valid config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneConfig {
    #[serde(default = "default_walkers")]
    pub walkers: usize,
    /// None seeds the simulation from entropy at startup.
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default = "default_window_width")]
    pub window_width: i32,
    #[serde(default = "default_window_height")]
    pub window_height: i32,
}

impl SceneConfig {
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(text)
            .map_err(|err| ConfigError::new(format!("invalid scene config: {err}")))
    }
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            walkers: default_walkers(),
            seed: None,
            window_width: default_window_width(),
            window_height: default_window_height(),
        }
    }
}

fn default_walkers() -> usize {
    WALKER_COUNT
}

fn default_window_width() -> i32 {
    DEFAULT_WINDOW_WIDTH
}

fn default_window_height() -> i32 {
    DEFAULT_WINDOW_HEIGHT
}
