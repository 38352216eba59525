//! Configuration management for squadhub.
//!
//! This module provides configuration loading and validation using figment,
//! supporting TOML config files, environment variables, and defaults.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::time::Duration;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::controller::DEFAULT_SCROLL_THRESHOLD;
use crate::error::{Error, Result};
use crate::format::DateStyle;
use crate::palette::{is_hex_color, TagPalette};
use crate::view::ViewContext;

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Default config directory name.
const CONFIG_DIR_NAME: &str = "squadhub";

/// Application configuration.
///
/// Configuration is loaded from (in order of precedence, highest first):
/// 1. Environment variables (prefixed with `SQUADHUB_`, sections separated by
///    a double underscore, e.g. `SQUADHUB_UI__COPY_FEEDBACK_MS`)
/// 2. TOML config file at `~/.config/squadhub/config.toml`
/// 3. Default values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Page-level settings.
    pub site: SiteConfig,
    /// Where the records come from.
    pub data: DataConfig,
    /// Interaction timings and thresholds.
    pub ui: UiConfig,
    /// Tag color overrides, keyed by tag.
    pub palette: BTreeMap<String, String>,
}

/// Page-level configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Document title and heading.
    pub title: String,
    /// Token order for displayed dates.
    pub date_style: DateStyle,
    /// Stylesheet href written into the page.
    pub stylesheet: String,
    /// Script that wires the page's controls; empty to omit the tag.
    pub script: String,
    /// Where `build` writes the page.
    pub output_path: PathBuf,
}

/// Dataset configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// JSON dataset to load instead of the built-in data.
    pub path: Option<PathBuf>,
}

/// Interaction configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// How long "Copied!" stays on the button, in milliseconds.
    pub copy_feedback_ms: u64,
    /// How long "Copy failed" stays on the button, in milliseconds.
    pub copy_failure_feedback_ms: u64,
    /// Scroll offset in pixels past which the scroll-to-top control shows.
    pub scroll_top_threshold: f64,
    /// Longest time `copy` keeps serving a clipboard selection it owns, in
    /// milliseconds. Zero releases it immediately.
    pub clipboard_hold_ms: u64,
    /// How often a held selection is checked for replacement, in milliseconds.
    pub clipboard_poll_ms: u64,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Squadron Hub".to_string(),
            date_style: DateStyle::default(),
            stylesheet: "styles.css".to_string(),
            script: "script.js".to_string(),
            output_path: PathBuf::from("index.html"),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            copy_feedback_ms: 1100,
            copy_failure_feedback_ms: 1200,
            scroll_top_threshold: DEFAULT_SCROLL_THRESHOLD,
            clipboard_hold_ms: 30_000,
            clipboard_poll_ms: 500,
        }
    }
}

impl UiConfig {
    /// Success feedback duration.
    #[must_use]
    pub fn copy_feedback(&self) -> Duration {
        Duration::from_millis(self.copy_feedback_ms)
    }

    /// Failure feedback duration.
    #[must_use]
    pub fn copy_failure_feedback(&self) -> Duration {
        Duration::from_millis(self.copy_failure_feedback_ms)
    }

    /// Upper bound on holding an owned clipboard selection.
    #[must_use]
    pub fn clipboard_hold(&self) -> Duration {
        Duration::from_millis(self.clipboard_hold_ms)
    }

    /// Interval between checks of a held selection.
    #[must_use]
    pub fn clipboard_poll(&self) -> Duration {
        Duration::from_millis(self.clipboard_poll_ms)
    }
}

impl Config {
    /// Load configuration from all sources.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration with an optional custom config path.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load_from(config_path: Option<PathBuf>) -> Result<Self> {
        let config_file = config_path.unwrap_or_else(Self::default_config_path);

        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(&config_file))
            .merge(Env::prefixed("SQUADHUB_").split("__"));

        let config: Config = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default configuration file path.
    #[must_use]
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join(CONFIG_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid.
    pub fn validate(&self) -> Result<()> {
        if self.site.title.trim().is_empty() {
            return Err(Error::ConfigValidation {
                message: "site.title must not be empty".to_string(),
            });
        }

        if self.ui.copy_feedback_ms == 0 || self.ui.copy_failure_feedback_ms == 0 {
            return Err(Error::ConfigValidation {
                message: "copy feedback durations must be greater than 0".to_string(),
            });
        }

        if self.ui.clipboard_poll_ms == 0 {
            return Err(Error::ConfigValidation {
                message: "clipboard_poll_ms must be greater than 0".to_string(),
            });
        }

        if !self.ui.scroll_top_threshold.is_finite() || self.ui.scroll_top_threshold < 0.0 {
            return Err(Error::ConfigValidation {
                message: format!(
                    "scroll_top_threshold must be a non-negative number, got {}",
                    self.ui.scroll_top_threshold
                ),
            });
        }

        for (tag, color) in &self.palette {
            if !is_hex_color(color) {
                return Err(Error::ConfigValidation {
                    message: format!("invalid palette color for '{tag}': {color}"),
                });
            }
        }

        Ok(())
    }

    /// Tag palette with configured overrides applied.
    ///
    /// # Errors
    ///
    /// Returns an error if an override is not a hex color.
    pub fn palette(&self) -> Result<TagPalette> {
        TagPalette::with_overrides(&self.palette)
    }

    /// View-model settings derived from this configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the palette overrides are invalid.
    pub fn view_context(&self) -> Result<ViewContext> {
        Ok(ViewContext {
            palette: self.palette()?,
            date_style: self.site.date_style,
        })
    }
}
