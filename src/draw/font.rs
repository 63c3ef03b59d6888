//! Font descriptor for text rendering.

use std::fmt;

/// Numeric font weight in the CSS range 100-900.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontWeight(u16);

impl FontWeight {
    pub const NORMAL: FontWeight = FontWeight(400);
    pub const BOLD: FontWeight = FontWeight(700);

    /// Creates a weight from a numeric value, accepting 100-900.
    pub fn from_numeric(value: u16) -> Option<Self> {
        (100..=900).contains(&value).then_some(Self(value))
    }

    /// Parses a CSS-style weight keyword: `normal`, `bold`, or `100`-`900`.
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        match value.to_lowercase().as_str() {
            "normal" | "regular" => Some(Self::NORMAL),
            "bold" => Some(Self::BOLD),
            other => other.parse::<u16>().ok().and_then(Self::from_numeric),
        }
    }

    pub fn value(self) -> u16 {
        self.0
    }

    /// Maps the weight onto the closest Pango weight.
    pub fn to_pango(self) -> pango::Weight {
        match (self.0 + 50) / 100 {
            0 | 1 => pango::Weight::Thin,
            2 => pango::Weight::Ultralight,
            3 => pango::Weight::Light,
            4 => pango::Weight::Normal,
            5 => pango::Weight::Medium,
            6 => pango::Weight::Semibold,
            7 => pango::Weight::Bold,
            8 => pango::Weight::Ultrabold,
            _ => pango::Weight::Heavy,
        }
    }
}

impl Default for FontWeight {
    fn default() -> Self {
        Self::NORMAL
    }
}

impl fmt::Display for FontWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::NORMAL => write!(f, "normal"),
            Self::BOLD => write!(f, "bold"),
            Self(value) => write!(f, "{value}"),
        }
    }
}

/// Font configuration for text rendering.
///
/// Describes which font to use: a comma-separated family fallback list,
/// weight, and size in pixels. The same descriptor is handed to the
/// measurer and the drawer so line wrapping matches the glyphs on the
/// canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct FontDescriptor {
    /// Family fallback list (e.g., "Inter, Arial, sans-serif")
    pub family: String,

    pub weight: FontWeight,

    /// Font size in pixels
    pub size: f64,
}

impl FontDescriptor {
    /// Creates a new font descriptor with the specified parameters.
    pub fn new(family: impl Into<String>, weight: FontWeight, size: f64) -> Self {
        Self {
            family: family.into(),
            weight,
            size,
        }
    }

    /// Family names in fallback order, with quotes and whitespace removed.
    pub fn families(&self) -> Vec<String> {
        self.family
            .split(',')
            .map(|name| name.trim().trim_matches(|c| c == '"' || c == '\'').trim())
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// The first family of the fallback list, the one that must be installed.
    pub fn primary_family(&self) -> Option<String> {
        self.families().into_iter().next()
    }

    /// Builds the Pango description used for both measuring and drawing.
    ///
    /// The size is set as an absolute pixel size so it does not depend on
    /// the output resolution.
    pub fn to_pango(&self) -> pango::FontDescription {
        let mut desc = pango::FontDescription::new();
        desc.set_family(&self.families().join(","));
        desc.set_weight(self.weight.to_pango());
        desc.set_absolute_size(self.size * pango::SCALE as f64);
        desc
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weight_keywords_and_numbers() {
        assert_eq!(FontWeight::parse("normal"), Some(FontWeight::NORMAL));
        assert_eq!(FontWeight::parse("Bold"), Some(FontWeight::BOLD));
        assert_eq!(FontWeight::parse("600").map(FontWeight::value), Some(600));
        assert_eq!(FontWeight::parse("950"), None);
        assert_eq!(FontWeight::parse("heavy-ish"), None);
    }

    #[test]
    fn weight_maps_to_nearest_pango_weight() {
        assert_eq!(FontWeight::NORMAL.to_pango(), pango::Weight::Normal);
        assert_eq!(FontWeight::BOLD.to_pango(), pango::Weight::Bold);
        assert_eq!(FontWeight::from_numeric(100).unwrap().to_pango(), pango::Weight::Thin);
        assert_eq!(FontWeight::from_numeric(900).unwrap().to_pango(), pango::Weight::Heavy);
    }

    #[test]
    fn families_strip_quotes_and_keep_order() {
        let font = FontDescriptor::new("'DM Sans', \"Arial\" , sans-serif", FontWeight::NORMAL, 54.0);
        assert_eq!(font.families(), vec!["DM Sans", "Arial", "sans-serif"]);
        assert_eq!(font.primary_family().as_deref(), Some("DM Sans"));
    }

    #[test]
    fn pango_description_uses_absolute_pixels() {
        let font = FontDescriptor::new("Inter", FontWeight::BOLD, 54.0);
        let desc = font.to_pango();
        assert_eq!(desc.size(), 54 * pango::SCALE);
        assert_eq!(desc.weight(), pango::Weight::Bold);
    }
}
