//! Filesystem port used by the module store.

use std::path::{Path, PathBuf};

use crate::domain::AppError;

/// File operations needed to load modules and persist assembled prompts.
pub trait ModuleFilesystem {
    /// Whether `path` exists and is a directory.
    fn dir_exists(&self, path: &Path) -> bool;

    /// Whether `path` exists and is a regular file.
    fn file_exists(&self, path: &Path) -> bool;

    /// Regular files directly inside `dir`, in no particular order.
    fn list_files(&self, dir: &Path) -> Result<Vec<PathBuf>, AppError>;

    /// Read a file as UTF-8 text.
    fn read_file(&self, path: &Path) -> Result<String, AppError>;

    /// Create `path` and any missing parents. Succeeds if it already exists.
    fn create_dir_all(&self, path: &Path) -> Result<(), AppError>;

    /// Write `content` to `path`, replacing any existing file.
    fn write_file(&self, path: &Path, content: &str) -> Result<(), AppError>;
}
