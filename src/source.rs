//! Decoded screenshot images handed to the compositor.

use crate::device::DeviceSpec;
use crate::error::{RenderError, Result};
use std::fmt;
use std::path::Path;

/// A decoded screenshot: RGBA8 pixels with straight alpha, row-major.
#[derive(Clone, PartialEq, Eq)]
pub struct SourceImage {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl fmt::Debug for SourceImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SourceImage")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("bytes", &self.data.len())
            .finish()
    }
}

impl SourceImage {
    /// Wraps an RGBA8 buffer.
    ///
    /// Returns `None` if the buffer length does not match `width * height * 4`.
    pub fn from_rgba(width: u32, height: u32, data: Vec<u8>) -> Option<Self> {
        (data.len() == width as usize * height as usize * 4).then_some(Self {
            width,
            height,
            data,
        })
    }

    /// Creates an image filled with a single RGBA color.
    pub fn solid(width: u32, height: u32, rgba: [u8; 4]) -> Self {
        let data = rgba
            .iter()
            .copied()
            .cycle()
            .take(width as usize * height as usize * 4)
            .collect();
        Self {
            width,
            height,
            data,
        }
    }

    /// Decodes PNG or JPEG bytes.
    ///
    /// # Errors
    /// Returns [`RenderError::UnsupportedImage`] for any other format and
    /// [`RenderError::ImageDecode`] if the bytes are corrupt.
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        let format = image::guess_format(bytes)
            .map_err(|_| RenderError::UnsupportedImage("unrecognized data".to_string()))?;
        if !matches!(format, image::ImageFormat::Png | image::ImageFormat::Jpeg) {
            return Err(RenderError::UnsupportedImage(format!("{:?}", format)));
        }

        let decoded = image::load_from_memory_with_format(bytes, format)?.to_rgba8();
        let (width, height) = decoded.dimensions();
        log::debug!("Decoded {:?} screenshot {}x{}", format, width, height);

        Ok(Self {
            width,
            height,
            data: decoded.into_raw(),
        })
    }

    /// Reads and decodes an image file.
    pub fn load(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path)?;
        log::info!("Loaded {} ({} bytes)", path.display(), bytes.len());
        Self::decode(&bytes)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA8 pixels.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Checks that the screenshot has exactly the device's canvas size.
    ///
    /// This is the upload-time check; the compositor itself accepts any size.
    pub fn check_device(&self, device: &DeviceSpec) -> Result<()> {
        if self.width == device.width && self.height == device.height {
            return Ok(());
        }
        Err(RenderError::DimensionMismatch {
            device: device.name.to_string(),
            expected_width: device.width,
            expected_height: device.height,
            width: self.width,
            height: self.height,
        })
    }

    /// Converts the pixels into a Cairo surface (premultiplied ARGB32).
    pub fn to_surface(&self) -> Result<cairo::ImageSurface> {
        let mut surface = cairo::ImageSurface::create(
            cairo::Format::ARgb32,
            self.width as i32,
            self.height as i32,
        )?;
        if self.width == 0 || self.height == 0 {
            return Ok(surface);
        }

        let stride = surface.stride() as usize;
        {
            let mut target = surface.data()?;
            for (y, row) in self.data.chunks_exact(self.width as usize * 4).enumerate() {
                let out_row = &mut target[y * stride..y * stride + self.width as usize * 4];
                for (src, dst) in row.chunks_exact(4).zip(out_row.chunks_exact_mut(4)) {
                    dst.copy_from_slice(&premultiply_argb(src[0], src[1], src[2], src[3]));
                }
            }
        }
        surface.mark_dirty();
        Ok(surface)
    }
}

/// Packs straight-alpha RGBA into Cairo's native-endian premultiplied ARGB32.
fn premultiply_argb(r: u8, g: u8, b: u8, a: u8) -> [u8; 4] {
    let scale = |c: u8| (c as u32 * a as u32 + 127) / 255;
    let pixel = (a as u32) << 24 | scale(r) << 16 | scale(g) << 8 | scale(b);
    pixel.to_ne_bytes()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device;

    fn encode_png(image: &image::RgbaImage) -> Vec<u8> {
        let mut bytes = std::io::Cursor::new(Vec::new());
        image
            .write_to(&mut bytes, image::ImageOutputFormat::Png)
            .unwrap();
        bytes.into_inner()
    }

    #[test]
    fn from_rgba_checks_length() {
        assert!(SourceImage::from_rgba(2, 2, vec![0; 16]).is_some());
        assert!(SourceImage::from_rgba(2, 2, vec![0; 15]).is_none());
    }

    #[test]
    fn decodes_png() {
        let png = encode_png(&image::RgbaImage::from_pixel(3, 2, image::Rgba([1, 2, 3, 255])));
        let decoded = SourceImage::decode(&png).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (3, 2));
        assert_eq!(&decoded.data()[..4], &[1, 2, 3, 255]);
    }

    #[test]
    fn rejects_unknown_formats() {
        assert!(matches!(
            SourceImage::decode(b"definitely not an image"),
            Err(RenderError::UnsupportedImage(_))
        ));
    }

    #[test]
    fn device_check_reports_expected_size() {
        let device = device::lookup("iphone-6.5").unwrap();
        let image = SourceImage::solid(100, 200, [0, 0, 0, 255]);
        match image.check_device(device) {
            Err(RenderError::DimensionMismatch {
                expected_width,
                expected_height,
                ..
            }) => assert_eq!((expected_width, expected_height), (1284, 2778)),
            other => panic!("unexpected result: {other:?}"),
        }

        let exact = SourceImage::solid(1284, 2778, [0, 0, 0, 255]);
        assert!(exact.check_device(device).is_ok());
    }

    #[test]
    fn premultiplies_translucent_pixels() {
        let pixel = u32::from_ne_bytes(premultiply_argb(255, 0, 0, 128));
        assert_eq!(pixel >> 24, 128);
        assert_eq!((pixel >> 16) & 0xFF, 128);
    }
}
