//! Configuration constants and default values.
//!
//! This module contains all application constants including visual defaults,
//! geometry limits and storage locations.

// === Visual Defaults ===

/// Default reticle canvas size in pixels.
pub const DEFAULT_SIZE: u32 = 8;

/// Default line thickness in pixels.
pub const DEFAULT_THICKNESS: u32 = 1;

/// Default center gap in pixels.
pub const DEFAULT_GAP: u32 = 0;

/// Default primary color (R, G, B) - red.
pub const DEFAULT_COLOR: (u8, u8, u8) = (0xFF, 0x00, 0x00);

/// Default outline color (R, G, B) - black.
pub const DEFAULT_OUTLINE_COLOR: (u8, u8, u8) = (0x00, 0x00, 0x00);

/// Default extra width added by the outline pass.
pub const DEFAULT_OUTLINE_THICKNESS: u32 = 2;

/// Default layer opacity percentage (100 = fully opaque).
pub const DEFAULT_OPACITY_PCT: u32 = 100;

/// X-Shape arm angle when none is configured, in degrees.
pub const DEFAULT_X_ANGLE: f64 = 45.0;

/// Crosshair and Diamond rotation when none is configured, in degrees.
pub const DEFAULT_ROTATION: f64 = 0.0;

// === Shape Names (as persisted) ===

pub const SHAPE_CROSSHAIR: &str = "Crosshair";
pub const SHAPE_CIRCLE: &str = "Circle";
pub const SHAPE_T: &str = "T-Shape";
pub const SHAPE_X: &str = "X-Shape";
pub const SHAPE_DIAMOND: &str = "Diamond";

/// Shapes offered to the user, in picker order.
pub const SHAPE_NAMES: [&str; 5] = [SHAPE_CROSSHAIR, SHAPE_CIRCLE, SHAPE_T, SHAPE_X, SHAPE_DIAMOND];

// === Geometry Limits ===

/// Smallest canvas the resolver will produce.
pub const MIN_SIZE: u32 = 8;

/// Largest canvas the resolver will produce. Even, and small enough that
/// placement arithmetic stays inside `i32`.
pub const MAX_SIZE: u32 = i32::MAX as u32 - 1;

/// Minimum line thickness in pixels.
pub const MIN_THICKNESS: u32 = 1;

/// Minimum outline thickness in pixels.
pub const MIN_OUTLINE_THICKNESS: u32 = 1;

/// Opacity percentage bounds.
pub const MIN_OPACITY: u32 = 0;
pub const MAX_OPACITY: u32 = 100;

/// X-Shape arm angle bounds, in degrees.
pub const MIN_X_ANGLE: f64 = 0.0;
pub const MAX_X_ANGLE: f64 = 90.0;

/// Smallest automatic center dot, in pixels.
pub const MIN_AUTO_DOT: u32 = 2;

/// Automatic dot size is `size / DOT_SIZE_DIVISOR`.
pub const DOT_SIZE_DIVISOR: u32 = 16;

/// Arm length is `size / ARM_LENGTH_DIVISOR` for T, X and Diamond.
pub const ARM_LENGTH_DIVISOR: u32 = 3;

// === Storage ===

/// Environment variable overriding the data root.
pub const ENV_DATA_ROOT: &str = "CROSSGEN_HOME";

/// Data root directory name under the user's home.
pub const DATA_DIR_NAME: &str = ".crossgen";

/// Presets directory under the data root.
pub const PRESETS_DIR_NAME: &str = "presets";

/// Preferences file under the data root.
pub const PREFERENCES_FILE_NAME: &str = "preferences.json";

/// Preset file extension.
pub const PRESET_EXTENSION: &str = "json";
