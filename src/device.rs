//! Device catalog: store-listing canvas sizes and per-device style presets.

use crate::error::{RenderError, Result};
use std::fmt;

/// Store category a device belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceCategory {
    Iphone,
    Ipad,
    AndroidPhone,
    AndroidTablet,
}

impl DeviceCategory {
    /// All categories in listing order.
    pub const ALL: [DeviceCategory; 4] = [
        DeviceCategory::Iphone,
        DeviceCategory::Ipad,
        DeviceCategory::AndroidPhone,
        DeviceCategory::AndroidTablet,
    ];
}

impl fmt::Display for DeviceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            DeviceCategory::Iphone => "iPhone",
            DeviceCategory::Ipad => "iPad",
            DeviceCategory::AndroidPhone => "Android phone",
            DeviceCategory::AndroidTablet => "Android tablet",
        };
        f.write_str(label)
    }
}

/// Layout defaults tuned for one canvas size.
///
/// Used for any layout value the configuration leaves unset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StylePreset {
    pub bezel_width: f64,
    pub bezel_top_distance: f64,
    pub border_radius: f64,
    pub device_size_factor: f64,
    pub font_size: f64,
    pub text_top_distance: f64,
}

/// One supported output device.
#[derive(Debug, Clone, PartialEq)]
pub struct DeviceSpec {
    /// Identifier used in configs and on the command line
    pub id: &'static str,
    /// Alternative identifiers accepted by [`lookup`]
    pub aliases: &'static [&'static str],
    /// Human-readable name
    pub name: &'static str,
    pub category: DeviceCategory,
    /// Display size label, e.g. `6.9"`
    pub display_size: &'static str,
    /// Canvas width in pixels
    pub width: u32,
    /// Canvas height in pixels
    pub height: u32,
    pub preset: StylePreset,
}

const fn preset(
    bezel_width: f64,
    font_size: f64,
    text_top_distance: f64,
    bezel_top_distance: f64,
    border_radius: f64,
    device_size_factor: f64,
) -> StylePreset {
    StylePreset {
        bezel_width,
        bezel_top_distance,
        border_radius,
        device_size_factor,
        font_size,
        text_top_distance,
    }
}

/// Identifier of the device used when nothing else is configured.
pub const DEFAULT_DEVICE: &str = "iphone-6.9";

static DEVICES: &[DeviceSpec] = &[
    DeviceSpec {
        id: "iphone-6.9",
        aliases: &["iphone16promax"],
        name: "iPhone 16 Pro Max",
        category: DeviceCategory::Iphone,
        display_size: "6.9\"",
        width: 1320,
        height: 2868,
        preset: preset(20.0, 54.0, 200.0, 400.0, 30.0, 1.0),
    },
    DeviceSpec {
        id: "iphone-6.7",
        aliases: &["iphone15promax"],
        name: "iPhone 15 Pro Max",
        category: DeviceCategory::Iphone,
        display_size: "6.7\"",
        width: 1290,
        height: 2796,
        preset: preset(20.0, 54.0, 200.0, 400.0, 30.0, 1.0),
    },
    DeviceSpec {
        id: "iphone-6.5",
        aliases: &["iphone13promax"],
        name: "iPhone 13 Pro Max",
        category: DeviceCategory::Iphone,
        display_size: "6.5\"",
        width: 1284,
        height: 2778,
        preset: preset(20.0, 54.0, 200.0, 400.0, 30.0, 1.0),
    },
    DeviceSpec {
        id: "iphone-6.3",
        aliases: &["iphone16pro"],
        name: "iPhone 16 Pro",
        category: DeviceCategory::Iphone,
        display_size: "6.3\"",
        width: 1206,
        height: 2622,
        preset: preset(18.0, 50.0, 180.0, 370.0, 28.0, 1.0),
    },
    DeviceSpec {
        id: "iphone-6.1",
        aliases: &["iphone15"],
        name: "iPhone 15",
        category: DeviceCategory::Iphone,
        display_size: "6.1\"",
        width: 1179,
        height: 2556,
        preset: preset(18.0, 48.0, 180.0, 360.0, 28.0, 1.0),
    },
    DeviceSpec {
        id: "iphone-5.5",
        aliases: &["iphone8plus"],
        name: "iPhone 8 Plus",
        category: DeviceCategory::Iphone,
        display_size: "5.5\"",
        width: 1242,
        height: 2208,
        preset: preset(18.0, 50.0, 160.0, 300.0, 20.0, 0.95),
    },
    DeviceSpec {
        id: "ipad-13",
        aliases: &["ipadpro13"],
        name: "iPad Pro 13\" (M4)",
        category: DeviceCategory::Ipad,
        display_size: "13\"",
        width: 2064,
        height: 2752,
        preset: preset(28.0, 80.0, 200.0, 380.0, 40.0, 0.9),
    },
    DeviceSpec {
        id: "ipad-12.9",
        aliases: &["ipadpro129"],
        name: "iPad Pro 12.9\"",
        category: DeviceCategory::Ipad,
        display_size: "12.9\"",
        width: 2048,
        height: 2732,
        preset: preset(28.0, 80.0, 200.0, 380.0, 40.0, 0.9),
    },
    DeviceSpec {
        id: "ipad-11",
        aliases: &["ipadpro11"],
        name: "iPad Pro 11\"",
        category: DeviceCategory::Ipad,
        display_size: "11\"",
        width: 1668,
        height: 2388,
        preset: preset(24.0, 68.0, 180.0, 340.0, 36.0, 0.9),
    },
    DeviceSpec {
        id: "android-phone",
        aliases: &["androidphone"],
        name: "Android phone (FHD)",
        category: DeviceCategory::AndroidPhone,
        display_size: "1080p",
        width: 1080,
        height: 1920,
        preset: preset(16.0, 44.0, 140.0, 280.0, 24.0, 1.0),
    },
    DeviceSpec {
        id: "android-phone-qhd",
        aliases: &["androidphoneqhd"],
        name: "Android phone (QHD+)",
        category: DeviceCategory::AndroidPhone,
        display_size: "1440p",
        width: 1440,
        height: 3120,
        preset: preset(22.0, 60.0, 220.0, 440.0, 32.0, 1.0),
    },
    DeviceSpec {
        id: "android-tablet-7",
        aliases: &["androidtablet7"],
        name: "Android tablet 7\"",
        category: DeviceCategory::AndroidTablet,
        display_size: "7\"",
        width: 1200,
        height: 1920,
        preset: preset(18.0, 50.0, 150.0, 300.0, 26.0, 0.9),
    },
    DeviceSpec {
        id: "android-tablet-10",
        aliases: &["androidtablet10"],
        name: "Android tablet 10\"",
        category: DeviceCategory::AndroidTablet,
        display_size: "10\"",
        width: 1600,
        height: 2560,
        preset: preset(24.0, 64.0, 200.0, 380.0, 32.0, 0.9),
    },
];

/// All supported devices, grouped by category in listing order.
pub fn all() -> &'static [DeviceSpec] {
    DEVICES
}

/// Devices of one category.
pub fn by_category(category: DeviceCategory) -> impl Iterator<Item = &'static DeviceSpec> {
    DEVICES
        .iter()
        .filter(move |device| device.category == category)
}

/// Looks up a device by id or alias (case-insensitive).
///
/// # Errors
/// Returns [`RenderError::UnknownDevice`] for identifiers not in the
/// catalog; there is no fallback device.
pub fn lookup(id: &str) -> Result<&'static DeviceSpec> {
    let wanted = id.trim().to_lowercase();
    DEVICES
        .iter()
        .find(|device| device.id == wanted || device.aliases.contains(&wanted.as_str()))
        .ok_or_else(|| RenderError::UnknownDevice(id.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn lookup_by_id_and_alias() {
        let device = lookup("iphone-6.9").unwrap();
        assert_eq!((device.width, device.height), (1320, 2868));
        assert_eq!(lookup("iPhone16ProMax").unwrap().id, "iphone-6.9");
    }

    #[test]
    fn unknown_device_is_an_error() {
        match lookup("nokia-3310") {
            Err(RenderError::UnknownDevice(id)) => assert_eq!(id, "nokia-3310"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn default_device_exists() {
        assert!(lookup(DEFAULT_DEVICE).is_ok());
    }

    #[test]
    fn identifiers_are_unique() {
        let mut seen = HashSet::new();
        for device in all() {
            assert!(seen.insert(device.id), "duplicate id {}", device.id);
            for alias in device.aliases {
                assert!(seen.insert(*alias), "duplicate alias {}", alias);
            }
        }
    }

    #[test]
    fn every_category_has_devices() {
        for category in DeviceCategory::ALL {
            assert!(by_category(category).count() > 0, "{category} is empty");
        }
    }

    #[test]
    fn presets_are_sane() {
        for device in all() {
            assert!(device.width > 0 && device.height > 0);
            assert!(device.preset.font_size > 0.0);
            assert!(device.preset.device_size_factor > 0.0);
            assert!(device.preset.bezel_width >= 0.0);
        }
    }
}
