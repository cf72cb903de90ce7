//! Named presets, one JSON file each.
//!
//! No versioning: a preset written by an older build loads with its missing
//! keys defaulted.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::{data_root, to_json_pretty, write_file};
use crate::error::{Error, Result};
use crate::model::constants::*;
use crate::model::ReticleSettings;

#[derive(Debug, Clone)]
pub struct PresetStore {
    dir: PathBuf,
}

impl PresetStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// `<data root>/presets`
    pub fn default_location() -> Self {
        Self::new(data_root().join(PRESETS_DIR_NAME))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File backing `name`, after validation.
    pub fn path_for(&self, name: &str) -> Result<PathBuf> {
        let name = validate_name(name)?;
        Ok(self.dir.join(format!("{name}.{PRESET_EXTENSION}")))
    }

    /// Write `settings` under `name`, replacing an existing preset.
    pub fn save(&self, name: &str, settings: &ReticleSettings) -> Result<PathBuf> {
        let path = self.path_for(name)?;
        write_file(&path, &to_json_pretty(settings)?)?;
        info!(preset = name.trim(), path = %path.display(), "preset saved");
        Ok(path)
    }

    pub fn load(&self, name: &str) -> Result<ReticleSettings> {
        let path = self.path_for(name)?;
        let name = name.trim();
        let contents = fs::read_to_string(&path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => Error::PresetNotFound(name.to_string()),
            _ => Error::io(&path, e),
        })?;
        let settings: ReticleSettings =
            serde_json::from_str(&contents).map_err(|source| Error::MalformedPreset {
                name: name.to_string(),
                source,
            })?;
        debug!(preset = name, "preset loaded");
        Ok(settings)
    }

    pub fn delete(&self, name: &str) -> Result<()> {
        let path = self.path_for(name)?;
        fs::remove_file(&path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => Error::PresetNotFound(name.trim().to_string()),
            _ => Error::io(&path, e),
        })?;
        info!(preset = name.trim(), "preset deleted");
        Ok(())
    }

    /// Sorted preset names. A missing directory means no presets.
    pub fn list(&self) -> Result<Vec<String>> {
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(Error::io(&self.dir, e)),
        };

        let mut names = Vec::new();
        for entry in entries {
            let path = entry.map_err(|e| Error::io(&self.dir, e))?.path();
            if !path.is_file() {
                continue;
            }
            if path.extension().and_then(|e| e.to_str()) != Some(PRESET_EXTENSION) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                names.push(stem.to_string());
            }
        }
        names.sort();
        Ok(names)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.path_for(name).map(|p| p.is_file()).unwrap_or(false)
    }
}

fn validate_name(name: &str) -> Result<&str> {
    let name = name.trim();
    if name.is_empty() {
        return Err(Error::EmptyPresetName);
    }
    let bad = name.contains(['/', '\\'])
        || name == "."
        || name.contains("..")
        || name.chars().any(char::is_control);
    if bad {
        return Err(Error::InvalidPresetName(name.to_string()));
    }
    Ok(name)
}
