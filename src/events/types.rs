//! Application events published by the controller.
//!
//! The host drains these after each user action: `FrameUpdated` means the
//! overlay surface should be invalidated, `Notify` carries a message for a
//! non-modal notification.

/// Severity of a user-facing notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Warning,
    Error,
}

/// A message for the user. Never fatal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: Level,
    pub title: String,
    pub message: String,
}

impl Notification {
    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Level::Info, title, message)
    }

    pub fn warning(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Level::Warning, title, message)
    }

    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Level::Error, title, message)
    }

    fn new(level: Level, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level,
            title: title.into(),
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// A new frame was recorded; repaint the overlay.
    FrameUpdated,

    PresetSaved(String),

    PresetLoaded(String),

    PresetDeleted(String),

    Notify(Notification),
}

impl AppEvent {
    /// Returns true if the overlay surface must be repainted.
    pub fn requires_repaint(&self) -> bool {
        matches!(self, AppEvent::FrameUpdated | AppEvent::PresetLoaded(_))
    }

    /// Returns a human-readable description of the event for debugging.
    pub fn description(&self) -> &'static str {
        match self {
            AppEvent::FrameUpdated => "Overlay frame updated",
            AppEvent::PresetSaved(_) => "Preset saved",
            AppEvent::PresetLoaded(_) => "Preset loaded",
            AppEvent::PresetDeleted(_) => "Preset deleted",
            AppEvent::Notify(_) => "User notification",
        }
    }
}
