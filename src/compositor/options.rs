use crate::device::DeviceSpec;
use crate::draw::{Color, FontDescriptor, FontWeight};
use crate::error::Result;

/// Everything one render call needs besides the screenshot itself.
///
/// Built fresh per render (usually by [`crate::Config::render_config`]) and
/// never modified by the compositor. Colors stay as the user wrote them and
/// are validated when rendering starts.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    pub canvas_width: i32,
    pub canvas_height: i32,
    pub background_color: String,
    pub bezel_color: String,
    pub text_color: String,
    /// Thickness of the frame around the screenshot
    pub bezel_width: f64,
    /// Y of the bezel's top edge; may be negative
    pub bezel_top_distance: f64,
    /// Multiplier on top of the auto-fit scale
    pub device_size_factor: f64,
    /// Outer corner radius of the bezel
    pub border_radius: f64,
    /// Comma-separated family fallback list
    pub font_family: String,
    pub font_size: f64,
    pub font_weight: FontWeight,
    /// Baseline of the first text line
    pub text_top_distance: f64,
    /// Paragraphs separated by `\n`
    pub marketing_message: String,
}

/// The three colors of a render, parsed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub background: Color,
    pub bezel: Color,
    pub text: Color,
}

impl RenderConfig {
    /// Creates a config for a device canvas using the device's preset
    /// layout and the stock colors and font.
    pub fn for_device(device: &DeviceSpec) -> Self {
        let preset = device.preset;
        Self {
            canvas_width: device.width as i32,
            canvas_height: device.height as i32,
            background_color: "#0099FF".to_string(),
            bezel_color: "#F5F5F7".to_string(),
            text_color: "#FFFFFF".to_string(),
            bezel_width: preset.bezel_width,
            bezel_top_distance: preset.bezel_top_distance,
            device_size_factor: preset.device_size_factor,
            border_radius: preset.border_radius,
            font_family: "sans-serif".to_string(),
            font_size: preset.font_size,
            font_weight: FontWeight::NORMAL,
            text_top_distance: preset.text_top_distance,
            marketing_message: String::new(),
        }
    }

    /// Parses the three hex colors.
    ///
    /// # Errors
    /// Returns [`crate::RenderError::MalformedColor`] for the first color
    /// that is not 6-digit hex.
    pub fn palette(&self) -> Result<Palette> {
        Ok(Palette {
            background: Color::parse_field("background_color", &self.background_color)?,
            bezel: Color::parse_field("bezel_color", &self.bezel_color)?,
            text: Color::parse_field("text_color", &self.text_color)?,
        })
    }

    /// The font used for both measuring and drawing the message.
    pub fn font(&self) -> FontDescriptor {
        FontDescriptor::new(self.font_family.clone(), self.font_weight, self.font_size)
    }
}
