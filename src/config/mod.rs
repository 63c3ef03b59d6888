//! Configuration file support for bezelshot.
//!
//! This module handles loading and validating mock-up settings from the
//! configuration file located at `~/.config/bezelshot/config.toml` (or a path
//! given on the command line). Settings cover the target device, colors, the
//! device frame, marketing text and where output files go.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod types;

// Re-export commonly used types at module level
pub use enums::FontWeightSpec;
pub use types::{BezelConfig, OutputConfig, TextConfig, ThemeConfig};

use crate::compositor::RenderConfig;
use crate::device::{self, DEFAULT_DEVICE, DeviceSpec};
use crate::draw::{Color, FontWeight};
use anyhow::{Context, Result};
use log::{debug, info, warn};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure containing all user settings.
///
/// This is the root configuration type that gets deserialized from the TOML file.
/// All fields have sensible defaults and will use those if not specified in the config file.
///
/// # Example TOML
/// ```toml
/// device = "iphone-6.9"
///
/// [theme]
/// background_color = "#0099FF"
/// bezel_color = "#F5F5F7"
/// text_color = "#FFFFFF"
///
/// [bezel]
/// width = 20
/// top_distance = 400
/// size_factor = 1.0
/// border_radius = 30
///
/// [text]
/// message = "Best app ever!"
/// font_family = "Inter, sans-serif"
/// font_size = 54
/// font_weight = "bold"
/// top_distance = 200
///
/// [output]
/// directory = "~/Pictures/bezelshot"
/// filename_template = "{device}-%Y%m%d-{index}"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Config {
    /// Target device id (see `bezelshot devices`)
    #[serde(default = "default_device")]
    pub device: String,

    /// Canvas colors
    #[serde(default)]
    pub theme: ThemeConfig,

    /// Device frame settings
    #[serde(default)]
    pub bezel: BezelConfig,

    /// Marketing text settings
    #[serde(default)]
    pub text: TextConfig,

    /// Output location
    #[serde(default)]
    pub output: OutputConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            device: default_device(),
            theme: ThemeConfig::default(),
            bezel: BezelConfig::default(),
            text: TextConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

fn default_device() -> String {
    DEFAULT_DEVICE.to_string()
}

/// Clamps an optional value into `range`, logging when it had to move.
fn clamp_option(value: &mut Option<f64>, name: &str, min: f64, max: f64) {
    if let Some(v) = value
        && !(min..=max).contains(&*v)
    {
        warn!(
            "Invalid {} {:.2}, clamping to {}-{} range",
            name, *v, min, max
        );
        *v = if v.is_nan() { min } else { v.clamp(min, max) };
    }
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Numeric values outside their range are clamped and a warning is
    /// logged. Colors are only checked here for a warning; rendering fails
    /// on a malformed color.
    ///
    /// Validated ranges:
    /// - `bezel.width`: 0 - 400
    /// - `bezel.size_factor`: 0.1 - 3.0
    /// - `bezel.border_radius`: 0 - 1000
    /// - `text.font_size`: 4 - 400
    pub fn validate_and_clamp(&mut self) {
        clamp_option(&mut self.bezel.width, "bezel width", 0.0, 400.0);
        clamp_option(&mut self.bezel.size_factor, "bezel size_factor", 0.1, 3.0);
        clamp_option(&mut self.bezel.border_radius, "bezel border_radius", 0.0, 1000.0);
        clamp_option(&mut self.text.font_size, "font_size", 4.0, 400.0);

        if self.text.font_weight.to_weight().is_none() {
            warn!(
                "Invalid font_weight {:?}, falling back to 'normal'",
                self.text.font_weight
            );
            self.text.font_weight = FontWeightSpec::default();
        }

        if self.text.font_family.trim().is_empty() {
            warn!("Empty font_family, falling back to 'sans-serif'");
            self.text.font_family = TextConfig::default().font_family;
        }

        for (name, value) in [
            ("background_color", &self.theme.background_color),
            ("bezel_color", &self.theme.bezel_color),
            ("text_color", &self.theme.text_color),
        ] {
            if Color::from_hex(value).is_none() {
                warn!("{} '{}' is not a 6-digit hex color", name, value);
            }
        }
    }

    /// Resolves the configured device.
    pub fn device_spec(&self) -> crate::error::Result<&'static DeviceSpec> {
        device::lookup(&self.device)
    }

    /// Builds the per-render configuration for a device.
    ///
    /// Layout values left unset in the file come from the device preset.
    pub fn render_config(&self, device: &DeviceSpec) -> RenderConfig {
        let preset = device.preset;
        RenderConfig {
            canvas_width: device.width as i32,
            canvas_height: device.height as i32,
            background_color: self.theme.background_color.clone(),
            bezel_color: self.theme.bezel_color.clone(),
            text_color: self.theme.text_color.clone(),
            bezel_width: self.bezel.width.unwrap_or(preset.bezel_width),
            bezel_top_distance: self
                .bezel
                .top_distance
                .unwrap_or(preset.bezel_top_distance),
            device_size_factor: self
                .bezel
                .size_factor
                .unwrap_or(preset.device_size_factor),
            border_radius: self.bezel.border_radius.unwrap_or(preset.border_radius),
            font_family: self.text.font_family.clone(),
            font_size: self.text.font_size.unwrap_or(preset.font_size),
            font_weight: self.text.font_weight.to_weight().unwrap_or(FontWeight::NORMAL),
            text_top_distance: self.text.top_distance.unwrap_or(preset.text_top_distance),
            marketing_message: self.text.message.clone(),
        }
    }

    /// Returns a copy with every preset-dependent value filled in for `device`.
    ///
    /// This is what `bezelshot config --export` prints, so the exported file
    /// reproduces the render exactly.
    pub fn resolved_for(&self, device: &DeviceSpec) -> Config {
        let render = self.render_config(device);
        let mut resolved = self.clone();
        resolved.device = device.id.to_string();
        resolved.bezel = BezelConfig {
            width: Some(render.bezel_width),
            top_distance: Some(render.bezel_top_distance),
            size_factor: Some(render.device_size_factor),
            border_radius: Some(render.border_radius),
        };
        resolved.text.font_size = Some(render.font_size);
        resolved.text.top_distance = Some(render.text_top_distance);
        resolved.text.font_weight = render.font_weight.into();
        resolved
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/bezelshot/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("bezelshot");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default location, or returns defaults if not found.
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Loads configuration from an explicit file.
    ///
    /// All loaded values are validated and clamped to acceptable ranges.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The file cannot be read
    /// - The file contains invalid TOML syntax
    pub fn load_from(config_path: &Path) -> Result<Self> {
        let config_str = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let mut config = Self::from_toml(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        config.validate_and_clamp();
        Ok(config)
    }

    /// Parses a TOML document without validation.
    pub fn from_toml(config_str: &str) -> Result<Self> {
        Ok(toml::from_str(config_str)?)
    }

    /// Serializes the configuration to pretty TOML.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }

    /// Creates a default configuration file at the default location.
    ///
    /// # Errors
    /// Returns an error if:
    /// - A config file already exists at the target path
    /// - The config directory cannot be created
    /// - The file cannot be written
    pub fn create_default_file() -> Result<PathBuf> {
        let config_path = Self::get_config_path()?;

        if config_path.exists() {
            return Err(anyhow::anyhow!(
                "Config file already exists at {}",
                config_path.display()
            ));
        }

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        fs::write(&config_path, Self::default().to_toml()?)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

        info!("Created default config at {}", config_path.display());
        Ok(config_path)
    }

    /// JSON schema describing the configuration file.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }
}
