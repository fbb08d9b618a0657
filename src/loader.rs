use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::error::LoadError;
use crate::models::SaveFile;

/// A save file that parsed successfully
#[derive(Debug, Clone)]
pub struct LoadedSave {
    pub path: PathBuf,
    pub save: SaveFile,
}

impl LoadedSave {
    /// Base name of the file, used in report headers and notes
    pub fn file_name(&self) -> String {
        display_name(&self.path)
    }
}

pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Read and parse a save file
pub fn load_save(path: &Path) -> Result<LoadedSave, LoadError> {
    debug!("Reading save file {path:?}");

    let content = fs::read_to_string(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => LoadError::NotFound {
            path: path.display().to_string(),
        },
        _ => LoadError::Unreadable {
            path: path.display().to_string(),
            source,
        },
    })?;

    let save = parse_save(path, content)?;
    info!("Loaded save file {path:?}");

    Ok(LoadedSave {
        path: path.to_path_buf(),
        save,
    })
}

/// Parse save file content; `path` is only used for error display
pub fn parse_save(path: &Path, content: String) -> Result<SaveFile, LoadError> {
    serde_json::from_str(&content).map_err(|e| LoadError::malformed(path, content.clone(), &e))
}
