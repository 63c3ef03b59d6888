//! Mock-up compositor.
//!
//! Turns a [`RenderConfig`] and a [`SourceImage`] into a finished canvas:
//! background fill, rounded bezel, screenshot clipped to the rounded screen
//! area, then the wrapped marketing text. The pipeline is pure; the same
//! inputs always produce the same pixels.

pub mod layout;
pub mod options;

pub use layout::{Layout, TextBlock, TextLine, compute_layout, layout_text, wrap_text};
pub use options::{Palette, RenderConfig};

use crate::draw::render::rasterize;
use crate::draw::{DrawCommand, Frame, TextMeasurer, shape};
use crate::error::{RenderError, Result};
use crate::output::RasterImage;
use crate::source::SourceImage;

/// Checks the parts of the config that must hold before anything is drawn.
///
/// Returns the parsed colors.
///
/// # Errors
/// - [`RenderError::InvalidCanvas`] for a non-positive canvas size
/// - [`RenderError::MalformedColor`] for a color that is not 6-digit hex
/// - [`RenderError::FontUnavailable`] if the measurer cannot use the primary family
pub fn validate(config: &RenderConfig, measurer: &dyn TextMeasurer) -> Result<Palette> {
    if config.canvas_width <= 0 || config.canvas_height <= 0 {
        return Err(RenderError::InvalidCanvas {
            width: config.canvas_width as i64,
            height: config.canvas_height as i64,
        });
    }

    let palette = config.palette()?;

    let primary = config
        .font()
        .primary_family()
        .ok_or_else(|| RenderError::FontUnavailable(config.font_family.clone()))?;
    if !measurer.has_family(&primary) {
        return Err(RenderError::FontUnavailable(primary));
    }

    Ok(palette)
}

/// Builds the ordered draw commands for one mock-up without rasterizing.
///
/// # Errors
/// Same as [`validate`].
pub fn build_frame(
    config: &RenderConfig,
    image: &SourceImage,
    measurer: &dyn TextMeasurer,
) -> Result<Frame> {
    let palette = validate(config, measurer)?;
    let layout = compute_layout(config, image.width(), image.height());
    log::debug!(
        "Layout: scale {:.4}, bezel {:?}, screen {:?}, inner radius {:.1}",
        layout.scale,
        layout.bezel_rect,
        layout.screen_rect,
        layout.inner_radius
    );

    let mut frame = Frame::new(config.canvas_width, config.canvas_height);
    frame.push(DrawCommand::Fill {
        color: palette.background,
    });
    frame.push(DrawCommand::FillPath {
        path: shape::rounded_rect(layout.bezel_rect, layout.outer_radius),
        color: palette.bezel,
    });
    frame.push(DrawCommand::ClippedImage {
        clip: shape::rounded_rect(layout.screen_rect, layout.inner_radius),
        dest: layout.screen_rect,
    });

    let text = layout_text(config, measurer);
    let center_x = config.canvas_width as f64 / 2.0;
    let font = config.font();
    for line in text.lines {
        frame.push(DrawCommand::Text {
            text: line.text,
            center_x,
            baseline_y: line.baseline_y,
            color: palette.text,
            font: font.clone(),
        });
    }

    Ok(frame)
}

/// Renders the mock-up to a `canvas_width x canvas_height` raster.
///
/// # Errors
/// Configuration problems (see [`validate`]) fail the call before any
/// drawing happens; otherwise only Cairo failures are reported.
pub fn render(
    config: &RenderConfig,
    image: &SourceImage,
    measurer: &dyn TextMeasurer,
) -> Result<RasterImage> {
    let frame = build_frame(config, image, measurer)?;
    log::info!(
        "Rendering {}x{} canvas ({} draw commands)",
        frame.width,
        frame.height,
        frame.commands.len()
    );
    rasterize(&frame, image)
}
