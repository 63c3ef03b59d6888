//! Cairo-based rasterization of a [`Frame`].

use super::color::Color;
use super::font::FontDescriptor;
use super::frame::{DrawCommand, Frame};
use super::shape::{self, PathSegment};
use crate::error::{RenderError, Result};
use crate::output::RasterImage;
use crate::source::SourceImage;
use crate::util::Rect;

/// Rasterizes a frame onto a fresh ARGB32 surface of the frame's size.
///
/// The surface is owned by this call alone; once every command has been
/// replayed, its pixels are copied into the returned [`RasterImage`].
///
/// # Errors
/// Returns an error if the surface cannot be created or a Cairo drawing
/// operation fails.
pub fn rasterize(frame: &Frame, image: &SourceImage) -> Result<RasterImage> {
    if frame.width <= 0 || frame.height <= 0 {
        return Err(RenderError::InvalidCanvas {
            width: frame.width as i64,
            height: frame.height as i64,
        });
    }

    let mut surface =
        cairo::ImageSurface::create(cairo::Format::ARgb32, frame.width, frame.height)?;
    {
        let ctx = cairo::Context::new(&surface)?;
        let image_surface = image.to_surface()?;
        render_frame(&ctx, frame, &image_surface)?;
    }
    surface.flush();

    RasterImage::from_surface(&mut surface)
}

/// Replays every command of the frame, bottom layer first.
pub fn render_frame(
    ctx: &cairo::Context,
    frame: &Frame,
    image_surface: &cairo::ImageSurface,
) -> Result<()> {
    for command in &frame.commands {
        render_command(ctx, command, image_surface)?;
    }
    Ok(())
}

/// Renders a single command.
///
/// Each command saves and restores the context, so clips and transforms
/// never outlive the command that set them.
pub fn render_command(
    ctx: &cairo::Context,
    command: &DrawCommand,
    image_surface: &cairo::ImageSurface,
) -> Result<()> {
    ctx.save()?;
    let result = match command {
        DrawCommand::Fill { color } => render_fill(ctx, *color),
        DrawCommand::FillPath { path, color } => render_path(ctx, path, *color),
        DrawCommand::ClippedImage { clip, dest } => {
            render_clipped_image(ctx, clip, *dest, image_surface)
        }
        DrawCommand::Text {
            text,
            center_x,
            baseline_y,
            color,
            font,
        } => render_text(ctx, text, *center_x, *baseline_y, *color, font),
    };
    ctx.restore()?;
    result
}

/// Paints the whole surface with an opaque color.
fn render_fill(ctx: &cairo::Context, color: Color) -> Result<()> {
    color.apply(ctx);
    ctx.set_operator(cairo::Operator::Source);
    ctx.paint()?;
    Ok(())
}

/// Fills a closed outline.
fn render_path(ctx: &cairo::Context, path: &[PathSegment], color: Color) -> Result<()> {
    shape::append_path(ctx, path);
    color.apply(ctx);
    ctx.fill()?;
    Ok(())
}

/// Paints the source image into `dest`, clipped to the outline.
fn render_clipped_image(
    ctx: &cairo::Context,
    clip: &[PathSegment],
    dest: Rect,
    image_surface: &cairo::ImageSurface,
) -> Result<()> {
    let (image_width, image_height) = (image_surface.width(), image_surface.height());
    if image_width <= 0 || image_height <= 0 || dest.width <= 0.0 || dest.height <= 0.0 {
        log::debug!("Skipping empty screenshot area {:?}", dest);
        return Ok(());
    }

    shape::append_path(ctx, clip);
    ctx.clip();

    ctx.translate(dest.x, dest.y);
    ctx.scale(
        dest.width / image_width as f64,
        dest.height / image_height as f64,
    );
    ctx.set_source_surface(image_surface, 0.0, 0.0)?;

    // Pad keeps the outermost pixels from blending with transparent black.
    let source = ctx.source();
    source.set_filter(cairo::Filter::Good);
    source.set_extend(cairo::Extend::Pad);

    ctx.rectangle(0.0, 0.0, image_width as f64, image_height as f64);
    ctx.fill()?;
    Ok(())
}

/// Renders one line of text horizontally centered on `center_x`.
///
/// `baseline_y` is the alphabetic baseline; Pango positions layouts by
/// their top-left corner, so the layout baseline is subtracted.
pub fn render_text(
    ctx: &cairo::Context,
    text: &str,
    center_x: f64,
    baseline_y: f64,
    color: Color,
    font: &FontDescriptor,
) -> Result<()> {
    ctx.set_antialias(cairo::Antialias::Best);

    let layout = pangocairo::functions::create_layout(ctx);
    layout.set_font_description(Some(&font.to_pango()));
    layout.set_text(text);

    let (_ink_rect, logical_rect) = layout.extents();
    let width = logical_rect.width() as f64 / pango::SCALE as f64;
    let baseline = layout.baseline() as f64 / pango::SCALE as f64;

    ctx.move_to(center_x - width / 2.0, baseline_y - baseline);
    color.apply(ctx);
    pangocairo::functions::show_layout(ctx, &layout);
    Ok(())
}
