//! Reticle settings record (pure Rust, no I/O).
//!
//! This is the value every UI control edits and every preset stores. It is
//! rebuilt as a whole and handed to the renderer by value; nothing mutates
//! it in place while a frame is being produced.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::color::Color;
use super::constants::*;

/// Persisted shape selector.
///
/// Unknown names are kept verbatim so a preset written by another version
/// survives a load/save cycle; they render nothing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ShapeName {
    Crosshair,
    Circle,
    TShape,
    XShape,
    Diamond,
    Other(String),
}

impl ShapeName {
    pub fn as_str(&self) -> &str {
        match self {
            ShapeName::Crosshair => SHAPE_CROSSHAIR,
            ShapeName::Circle => SHAPE_CIRCLE,
            ShapeName::TShape => SHAPE_T,
            ShapeName::XShape => SHAPE_X,
            ShapeName::Diamond => SHAPE_DIAMOND,
            ShapeName::Other(name) => name,
        }
    }

    /// Whether the gap setting affects this shape.
    pub fn uses_gap(&self) -> bool {
        matches!(
            self,
            ShapeName::Crosshair | ShapeName::TShape | ShapeName::XShape | ShapeName::Diamond
        )
    }

    /// Whether the fill style setting affects this shape.
    pub fn uses_fill_style(&self) -> bool {
        matches!(self, ShapeName::Circle)
    }

    /// Whether the angle setting affects this shape.
    pub fn uses_angle(&self) -> bool {
        matches!(
            self,
            ShapeName::Crosshair | ShapeName::XShape | ShapeName::Diamond
        )
    }
}

impl From<String> for ShapeName {
    fn from(s: String) -> Self {
        match s.as_str() {
            SHAPE_CROSSHAIR => ShapeName::Crosshair,
            SHAPE_CIRCLE => ShapeName::Circle,
            SHAPE_T => ShapeName::TShape,
            SHAPE_X => ShapeName::XShape,
            SHAPE_DIAMOND => ShapeName::Diamond,
            _ => ShapeName::Other(s),
        }
    }
}

impl From<&str> for ShapeName {
    fn from(s: &str) -> Self {
        ShapeName::from(s.to_string())
    }
}

impl From<ShapeName> for String {
    fn from(shape: ShapeName) -> Self {
        match shape {
            ShapeName::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for ShapeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Circle interior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FillStyle {
    #[default]
    Full,
    Ring,
}

/// Where the overlay takes its screen extent from.
///
/// Older presets store the resolution picker's label (`"1920x1080 (Native)"`,
/// `"Custom..."`), so any text mentioning `Custom` reads as [`Custom`] and
/// everything else as [`Native`].
///
/// [`Custom`]: ResolutionMode::Custom
/// [`Native`]: ResolutionMode::Native
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String")]
pub enum ResolutionMode {
    #[default]
    Native,
    Custom,
}

impl From<String> for ResolutionMode {
    fn from(s: String) -> Self {
        if s.contains("Custom") {
            ResolutionMode::Custom
        } else {
            ResolutionMode::Native
        }
    }
}

/// Complete reticle configuration, serializable to/from JSON.
///
/// Keys missing from an older preset fall back to [`Default`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReticleSettings {
    pub shape: ShapeName,
    /// Canvas size in pixels; the resolver coerces it to an even value ≥ 8.
    pub size: u32,
    pub thickness: u32,
    /// Center gap in pixels; the resolver clamps it to `center - 1`.
    pub gap: u32,
    pub color: Color,
    pub outline_enabled: bool,
    pub outline_color: Color,
    pub outline_thickness: u32,
    /// Main layer opacity [0, 100].
    pub opacity: u32,
    /// Outline layer opacity [0, 100].
    pub outline_opacity: u32,
    pub fill_style: FillStyle,
    pub dot_enabled: bool,
    /// Center dot diameter; `None` scales it with the canvas.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dot_size: Option<u32>,
    /// Degrees. `None` means the shape's own default.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub angle: Option<f64>,
    pub monitor_index: usize,
    pub resolution: ResolutionMode,
    pub custom_resolution: Option<(u32, u32)>,
    /// Stored overlay origin, overrides centering on the monitor.
    pub position: Option<(i32, i32)>,
}

impl Default for ReticleSettings {
    fn default() -> Self {
        Self {
            shape: ShapeName::Crosshair,
            size: DEFAULT_SIZE,
            thickness: DEFAULT_THICKNESS,
            gap: DEFAULT_GAP,
            color: Color::from_tuple(DEFAULT_COLOR),
            outline_enabled: false,
            outline_color: Color::from_tuple(DEFAULT_OUTLINE_COLOR),
            outline_thickness: DEFAULT_OUTLINE_THICKNESS,
            opacity: DEFAULT_OPACITY_PCT,
            outline_opacity: DEFAULT_OPACITY_PCT,
            fill_style: FillStyle::default(),
            dot_enabled: false,
            dot_size: None,
            angle: None,
            monitor_index: 0,
            resolution: ResolutionMode::default(),
            custom_resolution: None,
            position: None,
        }
    }
}

impl ReticleSettings {
    /// Clamps values the renderer cannot coerce on its own.
    ///
    /// Size and gap are left alone; `geometry::resolve` owns those rules.
    pub fn validate(&mut self) {
        self.thickness = self.thickness.max(MIN_THICKNESS);
        self.outline_thickness = self.outline_thickness.max(MIN_OUTLINE_THICKNESS);
        self.opacity = self.opacity.clamp(MIN_OPACITY, MAX_OPACITY);
        self.outline_opacity = self.outline_opacity.clamp(MIN_OPACITY, MAX_OPACITY);
        if let Some(dot) = self.dot_size.as_mut() {
            *dot = (*dot).max(1);
        }
        if let Some(angle) = self.angle {
            if !angle.is_finite() {
                self.angle = None;
            }
        }
    }

    /// Consuming variant of [`validate`](Self::validate).
    pub fn validated(mut self) -> Self {
        self.validate();
        self
    }

    /// Angle for the configured shape, in degrees.
    pub fn effective_angle(&self) -> f64 {
        match self.shape {
            ShapeName::XShape => self
                .angle
                .unwrap_or(DEFAULT_X_ANGLE)
                .clamp(MIN_X_ANGLE, MAX_X_ANGLE),
            _ => self.angle.unwrap_or(DEFAULT_ROTATION),
        }
    }
}
