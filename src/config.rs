//! Engine and front-end settings, loadable from TOML

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::search::narrow::DEFAULT_FALLBACK_CAP;

/// Deepest search accepted by validation
pub const MAX_SEARCH_DEPTH: u8 = 32;

/// Search settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Plies searched below the root before the cutoff
    pub max_depth: u8,
    /// Opening candidates kept after the center tie-break
    pub fallback_cap: usize,
    /// Seed for the opening tie-break; entropy when absent
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            max_depth: 6,
            fallback_cap: DEFAULT_FALLBACK_CAP,
            seed: None,
        }
    }
}

/// Front-end settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Human takes Black (moves first) in a new PvE game
    pub human_first: bool,
    /// Search depth for PvP hints
    pub hint_depth: u8,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            human_first: true,
            hint_depth: 3,
        }
    }
}

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub engine: EngineConfig,
    pub ui: UiConfig,
}

impl GameConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: GameConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            log::warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.engine.fallback_cap == 0 {
            return Err(ConfigError::Validation(
                "engine.fallback_cap must be > 0".into(),
            ));
        }
        if self.engine.max_depth > MAX_SEARCH_DEPTH {
            return Err(ConfigError::Validation(format!(
                "engine.max_depth must be <= {MAX_SEARCH_DEPTH}"
            )));
        }
        if self.ui.hint_depth > MAX_SEARCH_DEPTH {
            return Err(ConfigError::Validation(format!(
                "ui.hint_depth must be <= {MAX_SEARCH_DEPTH}"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_are_valid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.engine.max_depth, 6);
        assert_eq!(config.engine.fallback_cap, 4);
        assert_eq!(config.engine.seed, None);
        assert!(config.ui.human_first);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: GameConfig = toml::from_str("[engine]\nmax_depth = 9\nseed = 17\n").unwrap();
        assert_eq!(config.engine.max_depth, 9);
        assert_eq!(config.engine.seed, Some(17));
        assert_eq!(config.engine.fallback_cap, 4);
        assert_eq!(config.ui, UiConfig::default());
    }

    #[test]
    fn test_validation_rejects_zero_cap() {
        let mut config = GameConfig::default();
        config.engine.fallback_cap = 0;
        let err = config.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "config validation error: engine.fallback_cap must be > 0"
        );
    }

    #[test]
    fn test_validation_rejects_deep_search() {
        let mut config = GameConfig::default();
        config.engine.max_depth = 40;
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[engine]\nfallback_cap = 2\n\n[ui]\nhuman_first = false").unwrap();
        let config = GameConfig::load(file.path()).unwrap();
        assert_eq!(config.engine.fallback_cap, 2);
        assert!(!config.ui.human_first);
    }

    #[test]
    fn test_load_invalid_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[engine\nmax_depth = ").unwrap();
        assert!(matches!(
            GameConfig::load(file.path()),
            Err(ConfigError::TomlParse(_))
        ));
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = GameConfig::load_or_default(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, GameConfig::default());
    }
}
