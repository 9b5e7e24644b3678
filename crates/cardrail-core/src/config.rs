//! Configuration loading
//!
//! Read from `<config dir>/cardrail/config.toml`. A missing default file
//! means built-in defaults; an explicitly requested file must exist.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use crate::constants::{layout, motion, paths, TRACKED_CARDS};
use crate::content::{default_cards, Card, DEFAULT_TITLE};

/// Configuration error type
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML for this schema
    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// Config could not be written back out
    #[error("serialization error: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// Layout values out of range
    #[error("invalid layout: {0}")]
    InvalidLayout(String),

    /// Motion values out of range
    #[error("invalid motion: {0}")]
    InvalidMotion(String),

    /// No cards configured
    #[error("at least one card is required")]
    NoCards,

    /// More cards than there are navigation dots
    #[error("{found} cards configured, at most {max} are supported")]
    TooManyCards { found: usize, max: usize },
}

/// Card geometry, in terminal cells
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub card_width: u16,
    pub gutter: u16,
    pub padding: u16,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            card_width: layout::CARD_WIDTH,
            gutter: layout::GUTTER,
            padding: layout::PADDING,
        }
    }
}

/// Scrolling behaviour
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    /// Fraction of the remaining distance covered per frame, in (0, 1]
    pub smoothing: f64,
    /// Idle frames after a wheel scroll before snapping
    pub snap_idle_ticks: u32,
    /// Cells per wheel notch
    pub wheel_step: u16,
    /// Frame interval in milliseconds
    pub tick_ms: u64,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            smoothing: motion::SMOOTHING,
            snap_idle_ticks: motion::SNAP_IDLE_TICKS,
            wheel_step: motion::WHEEL_STEP,
            tick_ms: motion::TICK_MS,
        }
    }
}

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Heading above the cards
    pub title: String,
    /// Theme name
    pub theme: String,
    pub layout: LayoutConfig,
    pub motion: MotionConfig,
    pub cards: Vec<Card>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            theme: "cardrail".to_string(),
            layout: LayoutConfig::default(),
            motion: MotionConfig::default(),
            cards: default_cards(),
        }
    }
}

impl Config {
    /// Default config file location
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(paths::APP_DIR_NAME).join(paths::CONFIG_FILE_NAME))
    }

    /// Load and validate.
    ///
    /// With `path` the file must exist. Without it the default location is
    /// tried and defaults are used if nothing is there.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let (path, required) = match path {
            Some(path) => (Some(path.to_path_buf()), true),
            None => (Self::default_path(), false),
        };

        let Some(path) = path else {
            debug!("no config directory on this platform, using defaults");
            return Ok(Self::default());
        };

        if !required && !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let text = std::fs::read_to_string(&path).map_err(|source| ConfigError::Io {
            path: path.clone(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        info!(path = %path.display(), cards = config.cards.len(), "loaded config");
        Ok(config)
    }

    /// Parse and validate a TOML document
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Render as TOML
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Check value ranges
    pub fn validate(&self) -> Result<(), ConfigError> {
        let layout_cfg = &self.layout;
        if layout_cfg.card_width < layout::MIN_CARD_WIDTH {
            return Err(ConfigError::InvalidLayout(format!(
                "card_width {} is below the minimum of {}",
                layout_cfg.card_width,
                layout::MIN_CARD_WIDTH
            )));
        }
        if layout_cfg.gutter > layout_cfg.card_width {
            return Err(ConfigError::InvalidLayout(format!(
                "gutter {} is wider than card_width {}",
                layout_cfg.gutter, layout_cfg.card_width
            )));
        }

        let motion_cfg = &self.motion;
        if !(motion::MIN_SMOOTHING..=1.0).contains(&motion_cfg.smoothing) {
            return Err(ConfigError::InvalidMotion(format!(
                "smoothing must be in [{}, 1], got {}",
                motion::MIN_SMOOTHING,
                motion_cfg.smoothing
            )));
        }
        if motion_cfg.tick_ms == 0 {
            return Err(ConfigError::InvalidMotion(
                "tick_ms must be positive".to_string(),
            ));
        }

        match self.cards.len() {
            0 => Err(ConfigError::NoCards),
            n if n > TRACKED_CARDS => Err(ConfigError::TooManyCards {
                found: n,
                max: TRACKED_CARDS,
            }),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    #[test]
    fn test_defaults_are_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.cards.len(), TRACKED_CARDS);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = Config::from_toml_str(
            r#"
            theme = "nord"

            [layout]
            card_width = 24
            "#,
        )
        .expect("valid config");

        assert_eq!(config.theme, "nord");
        assert_eq!(config.layout.card_width, 24);
        assert_eq!(config.layout.gutter, layout::GUTTER);
        assert_eq!(config.motion, MotionConfig::default());
        assert_eq!(config.cards, default_cards());
    }

    #[test]
    fn test_cards_from_file() {
        let config = Config::from_toml_str(
            r#"
            [[cards]]
            headline = "One"
            body = "First"

            [[cards]]
            headline = "Two"
            body = "Second"
            link = "More"
            "#,
        )
        .expect("valid config");

        assert_eq!(config.cards.len(), 2);
        assert_eq!(config.cards[1].link.as_deref(), Some("More"));
        assert_eq!(config.cards[0].footnote, None);
    }

    #[test]
    fn test_rejects_bad_values() {
        let err = Config::from_toml_str("[layout]\ncard_width = 3").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidLayout(_)));

        let err = Config::from_toml_str("[layout]\ncard_width = 10\ngutter = 11").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidLayout(_)));

        let err = Config::from_toml_str("[motion]\nsmoothing = 0.0").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidMotion(_)));

        let err = Config::from_toml_str("[motion]\nsmoothing = 0.01").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidMotion(_)));
        assert!(Config::from_toml_str("[motion]\nsmoothing = 0.05").is_ok());

        let err = Config::from_toml_str("[motion]\ntick_ms = 0").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidMotion(_)));

        let err = Config::from_toml_str("cards = []").unwrap_err();
        assert!(matches!(err, ConfigError::NoCards));

        let err = Config::from_toml_str("theme = 5").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_rejects_too_many_cards() {
        let mut config = Config::default();
        config.cards.push(Card::new("Five", "Extra"));
        let err = config.validate().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::TooManyCards {
                found: 5,
                max: TRACKED_CARDS
            }
        ));
    }

    #[test]
    fn test_round_trip_through_toml() {
        let config = Config::default();
        let text = config.to_toml_string().expect("serializable");
        assert_eq!(Config::from_toml_str(&text).expect("parses"), config);
    }

    #[test]
    fn test_load_explicit_file() {
        let mut file = NamedTempFile::new().expect("temp file");
        writeln!(file, "title = \"Welcome\"").expect("write");

        let config = Config::load(Some(file.path())).expect("loads");
        assert_eq!(config.title, "Welcome");
    }

    #[test]
    fn test_load_missing_explicit_file_is_error() {
        let dir = TempDir::new().expect("temp dir");
        let err = Config::load(Some(&dir.path().join("absent.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
