//! Pure reticle core used by the overlay. Keep this crate free of window
//! management so everything here can run as normal integration tests.
//!
//! Data flow:
//!
//! ```text
//! ReticleSettings → geometry::resolve → Dimensions
//!                 → Reticle::shape    → Shape
//!                 → render::paint     → Canvas (outline pass, then main pass)
//! ```

pub mod app;
pub mod error;
pub mod events;
pub mod geometry;
pub mod model;
pub mod placement;
pub mod render;
pub mod shapes;
pub mod storage;

// Re-export the types most callers touch
pub use error::{Error, Result};
pub use events::{AppEvent, EventBus, EventPublisher};
pub use geometry::{resolve, Dimensions};
pub use model::{Color, FillStyle, ReticleSettings};
pub use render::{paint, Canvas, DrawList, Reticle};
pub use shapes::{render, Pass, Point, Primitive, Shape};

/// Clamp a value to [lo, hi]
pub fn clamp(v: f64, lo: f64, hi: f64) -> f64 {
    if v < lo {
        lo
    } else if v > hi {
        hi
    } else {
        v
    }
}

/// Convert 8-bit RGB to `#RRGGBB`.
pub fn color_to_hex(r: u8, g: u8, b: u8) -> String {
    format!("#{:02X}{:02X}{:02X}", r, g, b)
}

/// Parse `#RRGGBB` or `#RRGGBBAA` into 8-bit channels.
///
/// Whitespace is ignored and the leading `#` is optional. Alpha defaults to
/// 255 for the six-digit form.
pub fn parse_hex_color(s: &str) -> Option<(u8, u8, u8, u8)> {
    let t = s.trim();
    let t = t.strip_prefix('#').unwrap_or(t);
    let hex = t.chars().filter(|c| !c.is_whitespace()).collect::<String>();
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    match hex.len() {
        6 => Some((channel(0)?, channel(2)?, channel(4)?, 255)),
        8 => Some((channel(0)?, channel(2)?, channel(4)?, channel(6)?)),
        _ => None,
    }
}

/// Percentage in [0, 100] to a layer alpha in [0.0, 1.0].
pub fn percent_to_alpha(pct: u32) -> f64 {
    clamp(pct as f64, 0.0, 100.0) / 100.0
}
