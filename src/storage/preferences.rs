//! Last-used settings, stored in `<data root>/preferences.json`.
//!
//! Uses an in-memory cache to avoid disk I/O on every control change.
//! Call `flush()` to persist changes to disk.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::{data_root, to_json_pretty, write_file};
use crate::error::Result;
use crate::model::constants::*;
use crate::model::ReticleSettings;

#[derive(Debug)]
pub struct Preferences {
    path: PathBuf,
    cache: Option<ReticleSettings>,
    dirty: bool,
}

impl Preferences {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cache: None,
            dirty: false,
        }
    }

    /// `<data root>/preferences.json`
    pub fn default_location() -> Self {
        Self::new(data_root().join(PREFERENCES_FILE_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Cached settings, loading from disk on first use.
    pub fn get(&mut self) -> ReticleSettings {
        if self.cache.is_none() {
            self.cache = Some(load_from_disk(&self.path));
        }
        self.cache.clone().unwrap_or_default()
    }

    /// Update the cache and mark it dirty. Nothing is written until
    /// [`flush`](Self::flush).
    pub fn set(&mut self, settings: ReticleSettings) {
        self.cache = Some(settings);
        self.dirty = true;
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Write the cache to disk if dirty.
    ///
    /// Call this when the settings panel closes or the app exits.
    pub fn flush(&mut self) -> Result<()> {
        if !self.dirty {
            return Ok(());
        }
        if let Some(settings) = &self.cache {
            write_file(&self.path, &to_json_pretty(settings)?)?;
            debug!(path = %self.path.display(), "preferences flushed");
        }
        self.dirty = false;
        Ok(())
    }
}

/// Load settings from `path`, returning defaults if missing or invalid.
fn load_from_disk(path: &Path) -> ReticleSettings {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => return ReticleSettings::default(),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "failed to read preferences");
            return ReticleSettings::default();
        }
    };
    match serde_json::from_str::<ReticleSettings>(&contents) {
        Ok(settings) => settings.validated(),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "malformed preferences, using defaults");
            ReticleSettings::default()
        }
    }
}
