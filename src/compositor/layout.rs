//! Mock-up geometry and marketing text layout.

use super::options::RenderConfig;
use crate::draw::{FontDescriptor, TextMeasurer};
use crate::util::Rect;

/// Share of the canvas width the bezel may take before the size factor.
pub const MAX_WIDTH_RATIO: f64 = 0.85;
/// Share of the canvas height the bezel may take before the size factor.
pub const MAX_HEIGHT_RATIO: f64 = 0.70;
/// Share of the canvas width available to one text line.
pub const TEXT_WIDTH_RATIO: f64 = 0.8;
/// Line height as a multiple of the font size.
pub const LINE_HEIGHT_FACTOR: f64 = 1.2;

/// Where the bezel and the screenshot land on the canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    /// Uniform factor applied to the screenshot
    pub scale: f64,
    /// Outer rectangle of the bezel
    pub bezel_rect: Rect,
    /// Screenshot area inside the bezel
    pub screen_rect: Rect,
    pub outer_radius: f64,
    /// Corner radius of the screenshot area, never negative
    pub inner_radius: f64,
}

/// Computes the bezel and screen rectangles for a screenshot.
///
/// The screenshot plus its bezel is fitted into 85% x 70% of the canvas,
/// then multiplied by `device_size_factor`, which may push it past that
/// envelope. The bezel is always centered horizontally; its top edge sits
/// at `bezel_top_distance`.
pub fn compute_layout(config: &RenderConfig, image_width: u32, image_height: u32) -> Layout {
    let bezel = config.bezel_width;
    let max_width = config.canvas_width as f64 * MAX_WIDTH_RATIO;
    let max_height = config.canvas_height as f64 * MAX_HEIGHT_RATIO;

    let scale = (max_width / (image_width as f64 + bezel * 2.0))
        .min(max_height / (image_height as f64 + bezel * 2.0))
        * config.device_size_factor;

    let scaled_width = image_width as f64 * scale;
    let scaled_height = image_height as f64 * scale;
    let bezel_width = scaled_width + bezel * 2.0;
    let bezel_height = scaled_height + bezel * 2.0;

    let bezel_rect = Rect::new(
        (config.canvas_width as f64 - bezel_width) / 2.0,
        config.bezel_top_distance,
        bezel_width,
        bezel_height,
    );
    let screen_rect = Rect::new(
        bezel_rect.x + bezel,
        bezel_rect.y + bezel,
        scaled_width,
        scaled_height,
    );

    Layout {
        scale,
        bezel_rect,
        screen_rect,
        outer_radius: config.border_radius,
        inner_radius: (config.border_radius - bezel).max(0.0),
    }
}

/// One wrapped line of the marketing message.
#[derive(Debug, Clone, PartialEq)]
pub struct TextLine {
    pub text: String,
    pub baseline_y: f64,
}

/// Result of laying out the message.
#[derive(Debug, Clone, PartialEq)]
pub struct TextBlock {
    /// Lines to draw, top to bottom
    pub lines: Vec<TextLine>,
    /// Baseline the next line would use
    pub end_y: f64,
}

/// Greedy word wrap of a multi-paragraph message.
///
/// Paragraphs are separated by `\n`. A whitespace-only paragraph draws
/// nothing but still takes one line. Within a paragraph words are split on
/// single spaces and appended while the measured line stays within
/// `width_limit`; the first word of a line is placed without measuring, so
/// an overlong word gets a line of its own and no line is ever empty.
pub fn wrap_text(
    message: &str,
    measurer: &dyn TextMeasurer,
    font: &FontDescriptor,
    width_limit: f64,
    top: f64,
    line_height: f64,
) -> TextBlock {
    let mut lines = Vec::new();
    let mut current_y = top;

    for paragraph in message.split('\n') {
        if paragraph.trim().is_empty() {
            current_y += line_height;
            continue;
        }

        let mut words = paragraph.split(' ');
        let mut current_line = words.next().unwrap_or_default().to_string();

        for word in words {
            let test_line = format!("{} {}", current_line, word);
            if measurer.measure(&test_line, font) > width_limit {
                lines.push(TextLine {
                    text: std::mem::replace(&mut current_line, word.to_string()),
                    baseline_y: current_y,
                });
                current_y += line_height;
            } else {
                current_line = test_line;
            }
        }

        lines.push(TextLine {
            text: current_line,
            baseline_y: current_y,
        });
        current_y += line_height;
    }

    TextBlock {
        lines,
        end_y: current_y,
    }
}

/// Lays out the configured message with the fixed wrap envelope and line height.
pub fn layout_text(config: &RenderConfig, measurer: &dyn TextMeasurer) -> TextBlock {
    wrap_text(
        &config.marketing_message,
        measurer,
        &config.font(),
        config.canvas_width as f64 * TEXT_WIDTH_RATIO,
        config.text_top_distance,
        config.font_size * LINE_HEIGHT_FACTOR,
    )
}
