//! Library exports for the bezelshot compositor.
//!
//! A render takes one screenshot and a [`RenderConfig`] and produces a store
//! mock-up: solid background, marketing text wrapped above the device, and the
//! screenshot inside a rounded bezel. The CLI in `main.rs` is a thin layer on
//! top of these modules, so other tools can share the same layout and
//! validation code.
//!
//! ```no_run
//! use bezelshot::{Config, PangoMeasurer, SourceImage, compositor};
//!
//! # fn main() -> anyhow::Result<()> {
//! let config = Config::load()?;
//! let device = config.device_spec()?;
//! let image = SourceImage::load("screen.png".as_ref())?;
//! let measurer = PangoMeasurer::new()?;
//! let raster = compositor::render(&config.render_config(device), &image, &measurer)?;
//! std::fs::write("mockup.png", raster.encode_png()?)?;
//! # Ok(())
//! # }
//! ```

pub mod batch;
pub mod compositor;
pub mod config;
pub mod device;
pub mod draw;
pub mod error;
pub mod output;
pub mod source;
pub mod util;

pub use compositor::{RenderConfig, render};
pub use config::Config;
pub use device::DeviceSpec;
pub use draw::{FixedAdvanceMeasurer, PangoMeasurer, TextMeasurer};
pub use error::RenderError;
pub use output::RasterImage;
pub use source::SourceImage;
