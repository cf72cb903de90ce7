//! Reticle domain model.
//!
//! This module contains pure data (no I/O) including the settings record,
//! its color type and the configuration constants.
//!
//! Persistence lives in `storage`.

pub mod color;
pub mod constants;
pub mod settings;

pub use color::Color;
pub use constants::*;
pub use settings::{FillStyle, ReticleSettings, ResolutionMode, ShapeName};
