//! Rendering primitives (Cairo/Pango-based).
//!
//! This module defines the drawing types used by the compositor:
//! - [`Color`]: sRGB color parsed from hex strings
//! - [`FontDescriptor`]: family fallback list, weight and pixel size
//! - [`shape`]: rounded-rectangle outlines shared by fill and clip
//! - [`Frame`]: ordered draw commands for one canvas
//! - [`TextMeasurer`]: text widths for line wrapping
//! - Rasterization of frames with Cairo

pub mod color;
pub mod font;
pub mod frame;
pub mod measure;
pub mod render;
pub mod shape;

// Re-export commonly used types at module level
pub use color::Color;
pub use font::{FontDescriptor, FontWeight};
pub use frame::{DrawCommand, Frame};
pub use measure::{FixedAdvanceMeasurer, PangoMeasurer, TextMeasurer};
pub use shape::PathSegment;
