//! Application controller.
//!
//! Sits between the host UI and the pure core: owns the current settings
//! snapshot, the last good frame, and the two stores.

pub mod controller;

pub use controller::{Frame, OverlayController};
