//! # piecechipper-model-dirs
//!
//! Resolves where a `tokenizer.model` file lives.

use std::{
    env,
    path::{Path, PathBuf},
};

use directories_next::ProjectDirs;

/// Attempt to build a System/$USER [`ProjectDirs`] for piecechipper.
///
/// Used to determine the default data directory.
pub fn piecechipper_project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("io", "crates", "piecechipper")
}

/// The model file name looked up in a data directory.
pub const MODEL_FILE_NAME: &str = "tokenizer.model";

/// Environment variable key naming a model file directly.
pub const PIECECHIPPER_MODEL: &str = "PIECECHIPPER_MODEL";

/// Environment variable key to override the default data directory.
pub const PIECECHIPPER_DATA_DIR: &str = "PIECECHIPPER_DATA_DIR";

/// Get the data directory for piecechipper.
///
/// The resolution order is:
/// 1. `path`, if present.
/// 2. [`PIECECHIPPER_DATA_DIR`] env var.
/// 3. `project_dirs().data_dir()`
/// 4. `None`
pub fn resolve_data_dir<P: AsRef<Path>>(path: Option<P>) -> Option<PathBuf> {
    if let Some(path) = path {
        path.as_ref().to_path_buf().into()
    } else if let Ok(path) = env::var(PIECECHIPPER_DATA_DIR) {
        PathBuf::from(path).into()
    } else if let Some(pds) = piecechipper_project_dirs() {
        pds.data_dir().to_path_buf().into()
    } else {
        None
    }
}

/// Get the model file path.
///
/// The resolution order is:
/// 1. `path`, if present.
/// 2. [`PIECECHIPPER_MODEL`] env var.
/// 3. [`MODEL_FILE_NAME`] in [`resolve_data_dir`].
///
/// The file is not required to exist.
pub fn resolve_model_path<P: AsRef<Path>>(path: Option<P>) -> anyhow::Result<PathBuf> {
    if let Some(path) = path {
        return Ok(path.as_ref().to_path_buf());
    }
    if let Ok(path) = env::var(PIECECHIPPER_MODEL) {
        return Ok(PathBuf::from(path));
    }
    match resolve_data_dir(None::<&Path>) {
        Some(dir) => Ok(dir.join(MODEL_FILE_NAME)),
        None => anyhow::bail!(
            "Unable to resolve data dir; pass a model path or set {PIECECHIPPER_MODEL}."
        ),
    }
}

/// Like [`resolve_model_path`], but the file must exist.
pub fn find_model_path<P: AsRef<Path>>(path: Option<P>) -> anyhow::Result<PathBuf> {
    let path = resolve_model_path(path)?;
    if !path.is_file() {
        anyhow::bail!("model file not found: {}", path.display());
    }
    Ok(path)
}
