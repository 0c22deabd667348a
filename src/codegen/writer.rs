//! Persistence of the generated module.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::service::MODULE_BASENAME;

/// Reserved subdirectory at the service root holding generated artifacts.
pub const RESERVED_DIR: &str = ".offline-local-auth";

/// Errors persisting the generated module. There is no safe fallback
/// location, so these abort initialization.
#[derive(Debug, Error)]
pub enum PersistError {
    #[error("failed to create {dir}: {source}")]
    CreateDir {
        dir: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: io::Error,
    },
}

/// Location of the generated module for a given service root.
pub fn generated_module_path(service_root: &Path) -> PathBuf {
    service_root.join(RESERVED_DIR).join(MODULE_BASENAME)
}

/// Writes the generated source, creating the reserved directory if needed
/// and fully overwriting any previous contents.
pub fn persist(service_root: &Path, source: &str) -> Result<PathBuf, PersistError> {
    let dir = service_root.join(RESERVED_DIR);
    fs::create_dir_all(&dir).map_err(|source| PersistError::CreateDir {
        dir: dir.display().to_string(),
        source,
    })?;

    let path = generated_module_path(service_root);
    fs::write(&path, source).map_err(|source| PersistError::Write {
        path: path.display().to_string(),
        source,
    })?;
    Ok(path)
}
