//! Frame container for the ordered draw commands of one mock-up.

use super::color::Color;
use super::font::FontDescriptor;
use super::shape::PathSegment;
use crate::util::Rect;

/// A single drawing operation.
///
/// Commands carry everything they need; no drawing state leaks from one
/// command into the next.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Paint the whole canvas with a solid color
    Fill { color: Color },
    /// Fill a closed outline
    FillPath {
        path: Vec<PathSegment>,
        color: Color,
    },
    /// Paint the source image into `dest` (uniformly scaled to fill it),
    /// restricted to the `clip` outline
    ClippedImage {
        clip: Vec<PathSegment>,
        dest: Rect,
    },
    /// Draw one line of text centered on `center_x`, `baseline_y` being the
    /// alphabetic baseline
    Text {
        text: String,
        center_x: f64,
        baseline_y: f64,
        color: Color,
        font: FontDescriptor,
    },
}

/// Ordered list of draw commands for one canvas.
///
/// The first command is the bottom layer. A frame is built once by the
/// compositor and then only read by the rasterizer.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub width: i32,
    pub height: i32,
    /// Commands in draw order (first = bottom layer, last = top layer)
    pub commands: Vec<DrawCommand>,
}

impl Frame {
    /// Creates a new empty frame for a canvas of the given size.
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            commands: Vec::new(),
        }
    }

    /// Appends a command on top of the existing ones.
    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    /// Text commands in draw order.
    pub fn text_lines(&self) -> impl Iterator<Item = (&str, f64)> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Text {
                text, baseline_y, ..
            } => Some((text.as_str(), *baseline_y)),
            _ => None,
        })
    }
}
