//! Wizard window configuration.
//!
//! [`WizardConfig`] gathers the chrome settings of a wizard: title, size,
//! padding, locale and decoration. It can be built in code or loaded from a
//! TOML or JSON file:
//!
//! ```
//! use horizon_wizard::WizardConfig;
//!
//! let config = WizardConfig::from_toml_str(r#"
//!     name = "Create account"
//!     width = 800
//!     locale = "fr-FR"
//!     actions_background = { r = 240, g = 240, b = 240 }
//! "#).unwrap();
//!
//! assert_eq!(config.size(), (800, 500));
//! assert_eq!(config.locale(), "fr-FR");
//! ```

use std::path::{Path, PathBuf};

use horizon_wizard_core::logging::targets;
use serde::{Deserialize, Serialize};

use crate::error::{Result, WizardError};
use crate::langpack::system_locale;
use crate::shell::Color;

/// Default window width in pixels.
pub const DEFAULT_WIDTH: u32 = 700;
/// Default window height in pixels.
pub const DEFAULT_HEIGHT: u32 = 500;
/// Default layout padding in pixels.
pub const DEFAULT_PADDING: u32 = 5;

/// Chrome settings of a wizard.
///
/// A width or height of 0 selects the default size. An absent locale selects
/// the system locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WizardConfig {
    pub name: String,
    pub width: u32,
    pub height: u32,
    pub horizontal_padding: u32,
    pub vertical_padding: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header_icon: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header_image: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub side_image: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actions_background: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub problem_background: Option<Color>,
}

impl Default for WizardConfig {
    fn default() -> Self {
        Self {
            name: String::new(),
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            horizontal_padding: DEFAULT_PADDING,
            vertical_padding: DEFAULT_PADDING,
            locale: None,
            header_icon: None,
            header_image: None,
            side_image: None,
            actions_background: None,
            problem_background: None,
        }
    }
}

impl WizardConfig {
    /// Create a configuration with default settings and the given title.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Set the window size using builder pattern.
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the layout padding using builder pattern.
    pub fn with_padding(mut self, horizontal: u32, vertical: u32) -> Self {
        self.horizontal_padding = horizontal;
        self.vertical_padding = vertical;
        self
    }

    /// Set the locale using builder pattern.
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    /// Set the header icon using builder pattern.
    pub fn with_header_icon(mut self, path: impl Into<PathBuf>) -> Self {
        self.header_icon = Some(path.into());
        self
    }

    /// Set the header background image using builder pattern.
    pub fn with_header_image(mut self, path: impl Into<PathBuf>) -> Self {
        self.header_image = Some(path.into());
        self
    }

    /// Set the left-side image using builder pattern.
    pub fn with_side_image(mut self, path: impl Into<PathBuf>) -> Self {
        self.side_image = Some(path.into());
        self
    }

    /// Set the button bar background using builder pattern.
    pub fn with_actions_background(mut self, color: Color) -> Self {
        self.actions_background = Some(color);
        self
    }

    /// Set the problem area background using builder pattern.
    pub fn with_problem_background(mut self, color: Color) -> Self {
        self.problem_background = Some(color);
        self
    }

    /// Effective window size.
    pub fn size(&self) -> (u32, u32) {
        (
            non_zero_or(self.width, DEFAULT_WIDTH),
            non_zero_or(self.height, DEFAULT_HEIGHT),
        )
    }

    /// Effective layout padding.
    pub fn padding(&self) -> (u32, u32) {
        (self.horizontal_padding, self.vertical_padding)
    }

    /// Effective locale tag.
    pub fn locale(&self) -> String {
        self.locale.clone().unwrap_or_else(system_locale)
    }

    /// Parse a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| WizardError::config(e.to_string()))
    }

    /// Parse a JSON document.
    pub fn from_json_str(content: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(|e| WizardError::config(e.to_string()))
    }

    /// Serialize as TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| WizardError::config(e.to_string()))
    }

    /// Serialize as JSON.
    pub fn to_json_string(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| WizardError::config(e.to_string()))
    }

    /// Load a configuration file.
    ///
    /// Files ending in `.json` are parsed as JSON, everything else as TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| WizardError::io(path, e))?;
        let config = match ConfigFormat::of(path) {
            ConfigFormat::Json => Self::from_json_str(&content),
            ConfigFormat::Toml => Self::from_toml_str(&content),
        };
        match &config {
            Ok(_) => tracing::debug!(target: targets::CONFIG, path = %path.display(), "configuration loaded"),
            Err(e) => tracing::error!(target: targets::CONFIG, path = %path.display(), error = %e, "invalid configuration"),
        }
        config
    }

    /// Write a configuration file, in the format chosen like [`load`](Self::load).
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let content = match ConfigFormat::of(path) {
            ConfigFormat::Json => self.to_json_string()?,
            ConfigFormat::Toml => self.to_toml_string()?,
        };
        std::fs::write(path, content).map_err(|e| WizardError::io(path, e))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfigFormat {
    Toml,
    Json,
}

impl ConfigFormat {
    fn of(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Toml,
        }
    }
}

fn non_zero_or(value: u32, default: u32) -> u32 {
    if value == 0 { default } else { value }
}
