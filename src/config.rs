//! # Session Configuration
//!
//! YAML-backed settings for a game session. Parsing goes through a raw
//! deserialization struct and then validation, so out-of-range values
//! produce a readable [`EarshotError::Config`] instead of surfacing deep in
//! the generator.
//!
//! ## Example
//! ```rust
//! use earshot::parse_config;
//!
//! let config = parse_config("bars: 2\ntempo: 90\n").unwrap();
//! assert_eq!(config.bars, 2);
//! assert_eq!(config.tempo, 90);
//! ```

use crate::error::EarshotError;
use serde::Deserialize;

/// Validated session settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameConfig {
    /// Measures per phrase, 1 (easy) or 2 (hard). Fixed for the session.
    pub bars: usize,
    /// Playback tempo in quarter-note BPM.
    pub tempo: u16,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            bars: 1,
            tempo: 120,
        }
    }
}

/// Raw shape for YAML deserialization; every field optional.
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct RawConfig {
    bars: Option<usize>,
    tempo: Option<u16>,
}

/// Parse and validate session config from YAML.
///
/// Missing fields take their defaults (1 bar, 120 BPM).
///
/// # Errors
/// Returns [`EarshotError::Config`] on malformed YAML, unknown keys, a bar
/// count other than 1 or 2, or a tempo outside 20..=300.
pub fn parse_config(yaml: &str) -> Result<GameConfig, EarshotError> {
    let raw: RawConfig = serde_yaml::from_str(yaml)
        .map_err(|e| EarshotError::Config(e.to_string()))?;

    let defaults = GameConfig::default();
    let config = GameConfig {
        bars: raw.bars.unwrap_or(defaults.bars),
        tempo: raw.tempo.unwrap_or(defaults.tempo),
    };

    if config.bars != 1 && config.bars != 2 {
        return Err(EarshotError::Config(format!(
            "bars must be 1 or 2, got {}",
            config.bars
        )));
    }
    if !(20..=300).contains(&config.tempo) {
        return Err(EarshotError::Config(format!(
            "tempo must be between 20 and 300 BPM, got {}",
            config.tempo
        )));
    }

    Ok(config)
}
