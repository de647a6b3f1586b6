use log::LevelFilter;
use serde::Deserialize;

use crate::ai::DEFAULT_SEARCH_DEPTH;
use crate::error::GameError;
use crate::types::Color;

/// Settings for one game session. Missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GameConfig {
    /// Plies searched for each computer move, `1..=DEFAULT_SEARCH_DEPTH`.
    pub search_depth: u8,
    /// Color played by the computer; the human plays the other one.
    pub computer: Color,
    /// `log` level name such as `"debug"` or `"off"`.
    pub log_level: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            search_depth: DEFAULT_SEARCH_DEPTH,
            computer: Color::White,
            log_level: "warn".to_string(),
        }
    }
}

impl GameConfig {
    /// Rejects a depth of 0, which never yields a move, and depths past the
    /// default, which the unpruned search cannot finish in reasonable time.
    pub fn validate(&self) -> Result<(), GameError> {
        if (1..=DEFAULT_SEARCH_DEPTH).contains(&self.search_depth) {
            Ok(())
        } else {
            Err(GameError::InvalidSearchDepth {
                depth: self.search_depth,
            })
        }
    }

    pub fn human(&self) -> Color {
        !self.computer
    }

    /// Parsed log level; unknown names fall back to `warn`.
    pub fn log_level_filter(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Warn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_classic_setup() {
        let config = GameConfig::default();

        assert_eq!(config.search_depth, 4);
        assert_eq!(config.computer, Color::White);
        assert_eq!(config.human(), Color::Black);
        assert_eq!(config.log_level_filter(), LevelFilter::Warn);
    }

    #[test]
    fn search_depth_must_stay_in_range() {
        assert_eq!(GameConfig::default().validate(), Ok(()));
        for depth in [1, DEFAULT_SEARCH_DEPTH] {
            let config = GameConfig {
                search_depth: depth,
                ..GameConfig::default()
            };
            assert_eq!(config.validate(), Ok(()));
        }
        for depth in [0, DEFAULT_SEARCH_DEPTH + 1, u8::MAX] {
            let config = GameConfig {
                search_depth: depth,
                ..GameConfig::default()
            };
            assert_eq!(
                config.validate(),
                Err(GameError::InvalidSearchDepth { depth })
            );
        }
    }

    #[test]
    fn log_level_parses_case_insensitively() {
        let config = GameConfig {
            log_level: "DEBUG".to_string(),
            ..GameConfig::default()
        };
        assert_eq!(config.log_level_filter(), LevelFilter::Debug);

        let config = GameConfig {
            log_level: "chatty".to_string(),
            ..GameConfig::default()
        };
        assert_eq!(config.log_level_filter(), LevelFilter::Warn);
    }
}
