//! Geometry resolver: raw settings to absolute pixel dimensions.
//!
//! All inputs are coerced, never rejected:
//! - size lies in [`MIN_SIZE`, `MAX_SIZE`] and is always even, so there is
//!   a true center pixel for symmetric drawing
//! - gap never exceeds `center - 1`, so segments cannot invert or cross
//! - the dot scales with the canvas unless sized explicitly

use crate::model::constants::*;
use crate::model::ReticleSettings;

/// Pixel-space dimensions derived from one settings snapshot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dimensions {
    pub size: u32,
    pub center: u32,
    pub gap: u32,
    pub size_f: f64,
    pub center_f: f64,
    pub gap_f: f64,
    pub dot_size: u32,
    pub dot_enabled: bool,
}

impl Dimensions {
    /// Arm length shared by T-Shape, X-Shape and Diamond.
    pub fn arm_length(&self) -> u32 {
        self.size / ARM_LENGTH_DIVISOR
    }
}

/// Resolve `settings` into [`Dimensions`].
pub fn resolve(settings: &ReticleSettings) -> Dimensions {
    let size = even_size(settings.size);
    let center = size / 2;
    let gap = clamp_gap(settings.gap, center);
    let dot_size = settings
        .dot_size
        .unwrap_or_else(|| (size / DOT_SIZE_DIVISOR).max(MIN_AUTO_DOT));

    Dimensions {
        size,
        center,
        gap,
        size_f: size as f64,
        center_f: center as f64,
        gap_f: gap as f64,
        dot_size,
        dot_enabled: settings.dot_enabled,
    }
}

fn even_size(size: u32) -> u32 {
    // MAX_SIZE is even, so rounding up cannot leave the range
    let size = size.clamp(MIN_SIZE, MAX_SIZE);
    if size % 2 == 1 {
        size + 1
    } else {
        size
    }
}

// center >= 4 because size >= 8
fn clamp_gap(gap: u32, center: u32) -> u32 {
    gap.min(center - 1)
}
