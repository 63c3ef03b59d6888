//! Text measurement used by the line-wrapping layout.

use super::font::FontDescriptor;
use crate::error::Result;
use pango::prelude::*;
use std::collections::HashSet;

/// Generic CSS family keywords that fontconfig always resolves to something.
const GENERIC_FAMILIES: &[&str] = &[
    "sans-serif",
    "sans",
    "serif",
    "monospace",
    "cursive",
    "fantasy",
    "system-ui",
];

/// Measures rendered text widths.
///
/// Implementations must be deterministic for fixed inputs and agree with
/// the glyphs the rasterizer draws, otherwise wrapped lines overflow.
pub trait TextMeasurer {
    /// Width in pixels of `text` rendered with `font`.
    fn measure(&self, text: &str, font: &FontDescriptor) -> f64;

    /// Whether `family` can be used for both measuring and drawing.
    fn has_family(&self, family: &str) -> bool;
}

/// Measures text with Pango, using the same Cairo font options as the
/// rasterizer.
pub struct PangoMeasurer {
    layout: pango::Layout,
    families: HashSet<String>,
}

impl PangoMeasurer {
    /// Creates a measurer backed by the default Pango/Cairo font map.
    ///
    /// # Errors
    /// Returns an error if the scratch Cairo surface cannot be created.
    pub fn new() -> Result<Self> {
        let surface = cairo::ImageSurface::create(cairo::Format::ARgb32, 1, 1)?;
        let ctx = cairo::Context::new(&surface)?;
        let layout = pangocairo::functions::create_layout(&ctx);

        let families: HashSet<String> = layout
            .context()
            .font_map()
            .map(|font_map| {
                font_map
                    .list_families()
                    .iter()
                    .map(|family| family.name().to_lowercase())
                    .collect()
            })
            .unwrap_or_default();
        log::debug!("Pango font map lists {} families", families.len());

        Ok(Self { layout, families })
    }
}

impl TextMeasurer for PangoMeasurer {
    fn measure(&self, text: &str, font: &FontDescriptor) -> f64 {
        self.layout.set_font_description(Some(&font.to_pango()));
        self.layout.set_text(text);
        let (_ink_rect, logical_rect) = self.layout.extents();
        logical_rect.width() as f64 / pango::SCALE as f64
    }

    fn has_family(&self, family: &str) -> bool {
        let family = family.to_lowercase();
        GENERIC_FAMILIES.contains(&family.as_str()) || self.families.contains(&family)
    }
}

/// Measurer that gives every character the same advance.
///
/// Useful where real font metrics are not wanted, e.g. for layout previews
/// that must not depend on installed fonts. Every family is accepted.
#[derive(Debug, Clone, Copy)]
pub struct FixedAdvanceMeasurer {
    /// Width of one character in pixels
    pub advance: f64,
}

impl FixedAdvanceMeasurer {
    pub fn new(advance: f64) -> Self {
        Self { advance }
    }
}

impl TextMeasurer for FixedAdvanceMeasurer {
    fn measure(&self, text: &str, _font: &FontDescriptor) -> f64 {
        text.chars().count() as f64 * self.advance
    }

    fn has_family(&self, _family: &str) -> bool {
        true
    }
}
