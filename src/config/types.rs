//! Configuration type definitions.

use super::enums::FontWeightSpec;
use crate::output::{FileSaveConfig, expand_tilde};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Canvas colors.
///
/// Every color is a 6-digit hex string such as `"#0099FF"` (the `#` is
/// optional). Malformed values are rejected when rendering starts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ThemeConfig {
    /// Canvas background
    #[serde(default = "default_background_color")]
    pub background_color: String,

    /// Device frame around the screenshot
    #[serde(default = "default_bezel_color")]
    pub bezel_color: String,

    /// Marketing text
    #[serde(default = "default_text_color")]
    pub text_color: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            background_color: default_background_color(),
            bezel_color: default_bezel_color(),
            text_color: default_text_color(),
        }
    }
}

/// Device frame settings.
///
/// Unset values come from the selected device's preset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct BezelConfig {
    /// Frame thickness in pixels (valid range: 0 - 400)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,

    /// Y of the frame's top edge in pixels; negative values move it above the canvas
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_distance: Option<f64>,

    /// Multiplier applied after fitting the device into 85% x 70% of the canvas
    /// (valid range: 0.1 - 3.0)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size_factor: Option<f64>,

    /// Outer corner radius in pixels (valid range: 0 - 1000)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<f64>,
}

/// Marketing text settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TextConfig {
    /// Message to draw above the device; `\n` starts a new paragraph
    #[serde(default = "default_message")]
    pub message: String,

    /// Family fallback list (e.g., "Inter, Arial, sans-serif")
    /// The first family must be installed or be a generic family like "sans-serif"
    #[serde(default = "default_font_family")]
    pub font_family: String,

    /// Font size in pixels (valid range: 4 - 400); unset uses the device preset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,

    /// Font weight ("normal", "bold", or 100-900)
    #[serde(default)]
    pub font_weight: FontWeightSpec,

    /// Baseline of the first line in pixels; unset uses the device preset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_distance: Option<f64>,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            message: default_message(),
            font_family: default_font_family(),
            font_size: None,
            font_weight: FontWeightSpec::default(),
            top_distance: None,
        }
    }
}

/// Where rendered mock-ups are written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct OutputConfig {
    /// Output directory (supports `~/`)
    #[serde(default = "default_output_directory")]
    pub directory: String,

    /// File name without extension; chrono specifiers plus `{device}` and `{index}`
    #[serde(default = "default_filename_template")]
    pub filename_template: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: default_output_directory(),
            filename_template: default_filename_template(),
        }
    }
}

impl OutputConfig {
    /// Resolves the directory and template for the file saver.
    pub fn to_save_config(&self) -> FileSaveConfig {
        FileSaveConfig {
            save_directory: expand_tilde(&self.directory),
            filename_template: self.filename_template.clone(),
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_background_color() -> String {
    "#0099FF".to_string()
}

fn default_bezel_color() -> String {
    "#F5F5F7".to_string()
}

fn default_text_color() -> String {
    "#FFFFFF".to_string()
}

fn default_message() -> String {
    "Best app ever!".to_string()
}

fn default_font_family() -> String {
    "sans-serif".to_string()
}

fn default_output_directory() -> String {
    ".".to_string()
}

fn default_filename_template() -> String {
    FileSaveConfig::default().filename_template
}
