//! Event system between the controller and the host UI.
//!
//! The controller publishes; the host drains once per UI turn and repaints
//! or shows notifications. Uses std `mpsc` channels.
//!
//! ```text
//! ┌──────────────────┐  publish()  ┌──────────┐  drain()  ┌──────────────┐
//! │ OverlayController├────────────►│ EventBus ├──────────►│ host UI loop │
//! └──────────────────┘             └──────────┘           └──────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use crossgen::events::{AppEvent, EventBus};
//!
//! let bus = EventBus::new();
//! let publisher = bus.publisher();
//! publisher.publish(AppEvent::FrameUpdated);
//!
//! for event in bus.drain() {
//!     assert!(event.requires_repaint());
//! }
//! ```

pub mod bus;
pub mod types;

pub use bus::{EventBus, EventPublisher};
pub use types::{AppEvent, Level, Notification};
