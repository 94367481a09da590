use std::path::Path;

use serde::{Deserialize, Serialize};

/// Text streaming timings, in seconds. `fast_multiplier` scales the
/// per-character delay while the player holds the fast-forward input;
/// it shortens the wait, it never skips it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaybackConfig {
    pub letter_delay: f32,
    pub sentence_delay: f32,
    pub fast_multiplier: f32,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            letter_delay: 0.05,
            sentence_delay: 1.0,
            fast_multiplier: 0.5,
        }
    }
}

impl PlaybackConfig {
    /// Loads timings from a TOML file, falling back to defaults when
    /// the file is missing or malformed.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(_) => {
                log::warn!("config file not found at {:?}, using defaults", path);
                return Self::default();
            }
        };
        toml::from_str(&content).unwrap_or_else(|e| {
            log::error!("config syntax error: {}, using defaults", e);
            Self::default()
        })
    }
}
