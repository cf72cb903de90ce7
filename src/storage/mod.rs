//! JSON persistence.
//!
//! Layout under the data root (`$CROSSGEN_HOME`, else `~/.crossgen`):
//!
//! ```text
//! preferences.json      last-used settings
//! presets/<name>.json   one file per named preset
//! ```

pub mod preferences;
pub mod presets;

pub use preferences::Preferences;
pub use presets::PresetStore;

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::error::{Error, Result};
use crate::model::constants::*;

/// Root directory for all persisted state.
pub fn data_root() -> PathBuf {
    if let Some(dir) = std::env::var_os(ENV_DATA_ROOT) {
        return PathBuf::from(dir);
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DATA_DIR_NAME)
}

/// Serialize with four-space indentation.
pub(crate) fn to_json_pretty<T: Serialize>(value: &T) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser)?;
    Ok(buf)
}

/// Write `bytes` to `path`, creating parent directories.
pub(crate) fn write_file(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }
    fs::write(path, bytes).map_err(|e| Error::io(path, e))
}
