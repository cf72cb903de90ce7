//! Crate-wide error type.
//!
//! Nothing here is fatal to the overlay: the controller turns every variant
//! into a user-facing notification and keeps its previous state.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize settings: {0}")]
    Json(#[from] serde_json::Error),

    #[error("preset name is empty")]
    EmptyPresetName,

    #[error("invalid preset name '{0}'")]
    InvalidPresetName(String),

    #[error("preset '{0}' not found")]
    PresetNotFound(String),

    #[error("preset '{name}' is malformed: {source}")]
    MalformedPreset {
        name: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("no presets found")]
    NoPresets,

    #[error("invalid resolution values '{width}' x '{height}'")]
    InvalidResolution { width: String, height: String },

    #[error("no monitors available")]
    NoMonitors,

    #[error("monitor {index} out of range ({count} available)")]
    MonitorOutOfRange { index: usize, count: usize },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}
