//! Finished rasters, PNG encoding and file saving.

use crate::error::{RenderError, Result};
use chrono::Local;
use std::fmt::{self, Write as _};
use std::fs;
use std::path::{Path, PathBuf};

/// A rendered canvas.
///
/// Pixels are stored exactly as Cairo produced them: ARGB32, premultiplied
/// alpha, native-endian `u32` per pixel, `stride` bytes per row.
#[derive(Clone, PartialEq, Eq)]
pub struct RasterImage {
    width: u32,
    height: u32,
    stride: usize,
    data: Vec<u8>,
}

impl fmt::Debug for RasterImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RasterImage")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("stride", &self.stride)
            .finish()
    }
}

impl RasterImage {
    /// Copies the pixels out of a finished surface.
    ///
    /// The surface must not be referenced by a live Cairo context.
    pub fn from_surface(surface: &mut cairo::ImageSurface) -> Result<Self> {
        surface.flush();
        let width = surface.width() as u32;
        let height = surface.height() as u32;
        let stride = surface.stride() as usize;
        let data = surface.data()?.to_vec();
        Ok(Self {
            width,
            height,
            stride,
            data,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Straight-alpha RGBA of one pixel, or `None` outside the canvas.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let offset = y as usize * self.stride + x as usize * 4;
        let bytes: [u8; 4] = self.data.get(offset..offset + 4)?.try_into().ok()?;
        Some(unpremultiply(u32::from_ne_bytes(bytes)))
    }

    /// All pixels as tightly packed straight-alpha RGBA rows.
    pub fn to_rgba(&self) -> Vec<u8> {
        let mut rgba = Vec::with_capacity(self.width as usize * self.height as usize * 4);
        for row in self.data.chunks_exact(self.stride).take(self.height as usize) {
            for px in row[..self.width as usize * 4].chunks_exact(4) {
                let bytes = [px[0], px[1], px[2], px[3]];
                rgba.extend_from_slice(&unpremultiply(u32::from_ne_bytes(bytes)));
            }
        }
        rgba
    }

    /// Encodes the canvas as PNG.
    ///
    /// # Errors
    /// Returns [`RenderError::Png`] if Cairo fails to write the stream.
    pub fn encode_png(&self) -> Result<Vec<u8>> {
        let surface = cairo::ImageSurface::create_for_data(
            self.data.clone(),
            cairo::Format::ARgb32,
            self.width as i32,
            self.height as i32,
            self.stride as i32,
        )?;

        let mut png = Vec::new();
        surface
            .write_to_png(&mut png)
            .map_err(|e| RenderError::Png(e.to_string()))?;
        log::debug!(
            "Encoded {}x{} canvas to PNG ({} bytes)",
            self.width,
            self.height,
            png.len()
        );
        Ok(png)
    }
}

fn unpremultiply(pixel: u32) -> [u8; 4] {
    let a = (pixel >> 24) & 0xFF;
    let channel = |shift: u32| {
        let c = (pixel >> shift) & 0xFF;
        if a == 0 { 0 } else { ((c * 255 + a / 2) / a).min(255) as u8 }
    };
    [channel(16), channel(8), channel(0), a as u8]
}

/// Configuration for file saving.
#[derive(Debug, Clone)]
pub struct FileSaveConfig {
    /// Directory to save mock-ups to.
    pub save_directory: PathBuf,
    /// Filename template: chrono format specifiers plus `{device}` and `{index}`.
    pub filename_template: String,
}

impl Default for FileSaveConfig {
    fn default() -> Self {
        Self {
            save_directory: PathBuf::from("."),
            filename_template: "app-store-screenshot-{device}".to_string(),
        }
    }
}

/// Generate a filename based on the template, device and current time.
///
/// Templates with invalid chrono specifiers are used verbatim.
///
/// # Arguments
/// * `template` - Template string with chrono format specifiers
/// * `device` - Device identifier substituted for `{device}`
/// * `index` - 1-based position in a batch, substituted for `{index}`
///
/// # Returns
/// Generated filename with `.png` extension
pub fn generate_filename(template: &str, device: &str, index: usize) -> String {
    let template = template
        .replace("{device}", device)
        .replace("{index}", &index.to_string());

    let mut filename = String::new();
    if write!(filename, "{}", Local::now().format(&template)).is_err() {
        log::warn!("Invalid time specifiers in filename template '{}'", template);
        filename = template;
    }
    format!("{}.png", filename)
}

/// Ensure the save directory exists, creating it if necessary.
pub fn ensure_directory_exists(directory: &Path) -> Result<PathBuf> {
    if !directory.exists() {
        log::info!("Creating output directory: {}", directory.display());
        fs::create_dir_all(directory)?;
    }

    let canonical = directory
        .canonicalize()
        .unwrap_or_else(|_| directory.to_path_buf());

    Ok(canonical)
}

/// Save PNG bytes to a file named from the template.
///
/// # Returns
/// Path to the saved file
pub fn save_png(
    png: &[u8],
    config: &FileSaveConfig,
    device: &str,
    index: usize,
) -> Result<PathBuf> {
    let directory = ensure_directory_exists(&config.save_directory)?;
    let filename = generate_filename(&config.filename_template, device, index);
    let file_path = directory.join(&filename);

    log::info!(
        "Saving mock-up to: {} ({} bytes)",
        file_path.display(),
        png.len()
    );
    fs::write(&file_path, png)?;

    Ok(file_path)
}

/// Expand tilde (~) in path strings.
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(stripped);
    }
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn raster(width: i32, height: i32, rgba: (f64, f64, f64, f64)) -> RasterImage {
        let mut surface =
            cairo::ImageSurface::create(cairo::Format::ARgb32, width, height).unwrap();
        {
            let ctx = cairo::Context::new(&surface).unwrap();
            ctx.set_source_rgba(rgba.0, rgba.1, rgba.2, rgba.3);
            ctx.paint().unwrap();
        }
        RasterImage::from_surface(&mut surface).unwrap()
    }

    #[test]
    fn pixel_reads_straight_rgba() {
        let image = raster(3, 2, (1.0, 0.0, 0.0, 1.0));
        assert_eq!(image.pixel(2, 1), Some([255, 0, 0, 255]));
        assert_eq!(image.pixel(3, 0), None);
        assert_eq!(image.to_rgba().len(), 3 * 2 * 4);
    }

    #[test]
    fn unpremultiply_restores_color() {
        let pixel = (128u32 << 24) | (128 << 16);
        assert_eq!(unpremultiply(pixel), [255, 0, 0, 128]);
        assert_eq!(unpremultiply(0), [0, 0, 0, 0]);
    }

    #[test]
    fn encodes_png_signature() {
        let png = raster(4, 4, (0.0, 0.6, 1.0, 1.0)).encode_png().unwrap();
        assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");
    }

    #[test]
    fn test_generate_filename() {
        let filename = generate_filename("shot-{device}-{index}_%Y", "ipad-11", 3);
        assert!(filename.starts_with("shot-ipad-11-3_"));
        assert!(filename.ends_with(".png"));
        assert!(filename.contains("20"));
    }

    #[test]
    fn default_template_uses_device() {
        let config = FileSaveConfig::default();
        assert_eq!(
            generate_filename(&config.filename_template, "iphone-6.9", 1),
            "app-store-screenshot-iphone-6.9.png"
        );
    }

    #[test]
    fn save_png_creates_directory() {
        let temp = TempDir::new().unwrap();
        let config = FileSaveConfig {
            save_directory: temp.path().join("nested/out"),
            filename_template: "mock-{index}".to_string(),
        };
        let path = save_png(b"png-bytes", &config, "ipad-11", 2).unwrap();
        assert!(path.ends_with("mock-2.png"));
        assert_eq!(std::fs::read(path).unwrap(), b"png-bytes");
    }

    #[test]
    fn test_expand_tilde() {
        let expanded = expand_tilde("~/Pictures");
        assert!(!expanded.to_string_lossy().starts_with("~"));

        let no_tilde = expand_tilde("/absolute/path");
        assert_eq!(no_tilde, PathBuf::from("/absolute/path"));
    }
}
