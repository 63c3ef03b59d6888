//! Error types for the compositor and its collaborators.

use thiserror::Error;

/// Result type alias for render operations.
pub type Result<T> = std::result::Result<T, RenderError>;

/// Errors that can occur while preparing or rendering a mock-up.
///
/// Every failure is deterministic for a given input; the caller fixes the
/// offending field and renders again.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Unknown device '{0}' (run `bezelshot devices` for the list)")]
    UnknownDevice(String),

    #[error("Canvas dimensions must be positive, got {width}x{height}")]
    InvalidCanvas { width: i64, height: i64 },

    #[error("Font family '{0}' is not available")]
    FontUnavailable(String),

    #[error("Invalid {field} '{value}': expected 6 hex digits like #0099FF")]
    MalformedColor { field: &'static str, value: String },

    #[error(
        "Image dimensions must be {expected_width} x {expected_height} pixels for {device}, got {width} x {height}"
    )]
    DimensionMismatch {
        device: String,
        expected_width: u32,
        expected_height: u32,
        width: u32,
        height: u32,
    },

    #[error("Unsupported image: {0} (PNG or JPEG expected)")]
    UnsupportedImage(String),

    #[error("Failed to decode image: {0}")]
    ImageDecode(#[from] image::ImageError),

    #[error("Cairo error: {0}")]
    Cairo(#[from] cairo::Error),

    #[error("Surface data unavailable: {0}")]
    SurfaceBorrow(#[from] cairo::BorrowError),

    #[error("PNG encoding failed: {0}")]
    Png(String),

    #[error("Render task failed: {0}")]
    Task(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl RenderError {
    /// Whether the error stems from the render configuration rather than
    /// the source image or the drawing backend.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            RenderError::UnknownDevice(_)
                | RenderError::InvalidCanvas { .. }
                | RenderError::FontUnavailable(_)
                | RenderError::MalformedColor { .. }
        )
    }
}
