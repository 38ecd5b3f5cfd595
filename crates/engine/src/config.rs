//! Runtime configuration read from the environment.
//!
//! - `MEMORY_SEED`: u64 RNG seed for reproducible decks (default: random)
//! - `MEMORY_LOG_PATH`: log file path (default: no logging)
//! - `MEMORY_LOG_LEVEL`: `error`, `warn`, `info`, `debug` or `trace` (default: `info`)
//! - `MEMORY_AUDIO_DISABLED`: set to "1" or "true" to silence the bell

use log::LevelFilter;

use crate::core::RoundConfig;
use crate::types::GAME_OVER_PAUSE_MS;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub round: RoundConfig,
    pub seed: Option<u64>,
    pub log_path: Option<String>,
    pub log_level: LevelFilter,
    pub audio_disabled: bool,
    /// How long the game-over screen stays up before a new round.
    pub game_over_pause_ms: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            round: RoundConfig::default(),
            seed: None,
            log_path: None,
            log_level: LevelFilter::Info,
            audio_disabled: false,
            game_over_pause_ms: GAME_OVER_PAUSE_MS,
        }
    }
}

impl GameConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let seed = lookup("MEMORY_SEED").and_then(|s| s.trim().parse().ok());

        let log_path = lookup("MEMORY_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) });

        let log_level = lookup("MEMORY_LOG_LEVEL")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(LevelFilter::Info);

        let audio_disabled = lookup("MEMORY_AUDIO_DISABLED")
            .map(|v| v == "1" || v.to_lowercase() == "true")
            .unwrap_or(false);

        Self {
            seed,
            log_path,
            log_level,
            audio_disabled,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = GameConfig::from_lookup(lookup(&[]));
        assert_eq!(config, GameConfig::default());
        assert_eq!(config.game_over_pause_ms, 2000);
    }

    #[test]
    fn reads_all_variables() {
        let config = GameConfig::from_lookup(lookup(&[
            ("MEMORY_SEED", "42"),
            ("MEMORY_LOG_PATH", " /tmp/memory.log "),
            ("MEMORY_LOG_LEVEL", "debug"),
            ("MEMORY_AUDIO_DISABLED", "TRUE"),
        ]));
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.log_path.as_deref(), Some("/tmp/memory.log"));
        assert_eq!(config.log_level, LevelFilter::Debug);
        assert!(config.audio_disabled);
    }

    #[test]
    fn ignores_malformed_values() {
        let config = GameConfig::from_lookup(lookup(&[
            ("MEMORY_SEED", "not-a-number"),
            ("MEMORY_LOG_PATH", "   "),
            ("MEMORY_LOG_LEVEL", "loud"),
            ("MEMORY_AUDIO_DISABLED", "0"),
        ]));
        assert_eq!(config.seed, None);
        assert_eq!(config.log_path, None);
        assert_eq!(config.log_level, LevelFilter::Info);
        assert!(!config.audio_disabled);
    }
}
