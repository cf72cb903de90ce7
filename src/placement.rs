//! Where the overlay window goes.
//!
//! Monitors are enumerated by the host and handed in as plain rectangles.

use tracing::warn;

use crate::error::{Error, Result};
use crate::model::{ReticleSettings, ResolutionMode};

/// A monitor's geometry in virtual-desktop pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenRect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl ScreenRect {
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Largest custom extent accepted; keeps window coordinates inside `i32`.
pub const MAX_EXTENT: u32 = i32::MAX as u32;

/// Parse the two custom-resolution text fields.
pub fn parse_custom_resolution(width: &str, height: &str) -> Result<(u32, u32)> {
    let parse = |s: &str| {
        s.trim()
            .parse::<u32>()
            .ok()
            .filter(|v| (1..=MAX_EXTENT).contains(v))
    };
    match (parse(width), parse(height)) {
        (Some(w), Some(h)) => Ok((w, h)),
        _ => {
            warn!(width, height, "rejected custom resolution");
            Err(Error::InvalidResolution {
                width: width.to_string(),
                height: height.to_string(),
            })
        }
    }
}

/// Extent the overlay is centered in: the custom resolution when selected
/// and set, otherwise the monitor's native size.
pub fn effective_extent(settings: &ReticleSettings, screen: &ScreenRect) -> (u32, u32) {
    match (settings.resolution, settings.custom_resolution) {
        (ResolutionMode::Custom, Some(custom)) => custom,
        _ => (screen.width, screen.height),
    }
}

/// Top-left corner of a `size × size` overlay.
pub fn overlay_origin(
    settings: &ReticleSettings,
    size: u32,
    screens: &[ScreenRect],
) -> Result<(i32, i32)> {
    if let Some(position) = settings.position {
        return Ok(position);
    }
    if screens.is_empty() {
        return Err(Error::NoMonitors);
    }
    let screen = screens
        .get(settings.monitor_index)
        .ok_or(Error::MonitorOutOfRange {
            index: settings.monitor_index,
            count: screens.len(),
        })?;

    let (w, h) = effective_extent(settings, screen);
    Ok((center_on(screen.x, w, size), center_on(screen.y, h, size)))
}

// Extents may come from a preset file unchecked, so work in i64 and
// saturate back into window coordinates.
fn center_on(start: i32, extent: u32, size: u32) -> i32 {
    let v = i64::from(start) + (i64::from(extent) - i64::from(size)) / 2;
    v.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}
