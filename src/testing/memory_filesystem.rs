//! In-memory test double for `ModuleFilesystem`.

use std::collections::{BTreeMap, BTreeSet};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::domain::AppError;
use crate::ports::ModuleFilesystem;

#[derive(Debug, Default)]
struct State {
    files: BTreeMap<PathBuf, String>,
    dirs: BTreeSet<PathBuf>,
    read_only: bool,
}

/// In-memory filesystem. Listings come back in reverse order so callers
/// cannot depend on enumeration order.
#[derive(Clone, Debug, Default)]
pub struct MemoryModuleFilesystem {
    state: Arc<Mutex<State>>,
}

impl MemoryModuleFilesystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a file and all of its ancestor directories.
    pub fn add_file(&self, path: impl AsRef<Path>, content: &str) {
        let path = path.as_ref();
        let mut state = self.state.lock().unwrap();
        for ancestor in path.ancestors().skip(1) {
            if !ancestor.as_os_str().is_empty() {
                state.dirs.insert(ancestor.to_path_buf());
            }
        }
        state.files.insert(path.to_path_buf(), content.to_string());
    }

    pub fn add_dir(&self, path: impl AsRef<Path>) {
        self.state.lock().unwrap().dirs.insert(path.as_ref().to_path_buf());
    }

    /// Make every write fail with `PermissionDenied`.
    pub fn set_read_only(&self, read_only: bool) {
        self.state.lock().unwrap().read_only = read_only;
    }

    pub fn file(&self, path: impl AsRef<Path>) -> Option<String> {
        self.state.lock().unwrap().files.get(path.as_ref()).cloned()
    }

    fn ensure_writable(&self, path: &Path) -> Result<(), AppError> {
        if self.state.lock().unwrap().read_only {
            return Err(AppError::io_failure(
                path,
                io::Error::new(io::ErrorKind::PermissionDenied, "read-only test filesystem"),
            ));
        }
        Ok(())
    }
}

impl ModuleFilesystem for MemoryModuleFilesystem {
    fn dir_exists(&self, path: &Path) -> bool {
        self.state.lock().unwrap().dirs.contains(path)
    }

    fn file_exists(&self, path: &Path) -> bool {
        self.state.lock().unwrap().files.contains_key(path)
    }

    fn list_files(&self, dir: &Path) -> Result<Vec<PathBuf>, AppError> {
        let state = self.state.lock().unwrap();
        if !state.dirs.contains(dir) {
            return Err(AppError::io_failure(
                dir,
                io::Error::new(io::ErrorKind::NotFound, "directory not found"),
            ));
        }
        Ok(state.files.keys().rev().filter(|path| path.parent() == Some(dir)).cloned().collect())
    }

    fn read_file(&self, path: &Path) -> Result<String, AppError> {
        self.file(path).ok_or_else(|| {
            AppError::io_failure(path, io::Error::new(io::ErrorKind::NotFound, "file not found"))
        })
    }

    fn create_dir_all(&self, path: &Path) -> Result<(), AppError> {
        self.ensure_writable(path)?;
        let mut state = self.state.lock().unwrap();
        for ancestor in path.ancestors() {
            if !ancestor.as_os_str().is_empty() {
                state.dirs.insert(ancestor.to_path_buf());
            }
        }
        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> Result<(), AppError> {
        self.ensure_writable(path)?;
        let mut state = self.state.lock().unwrap();
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !state.dirs.contains(parent)
        {
            return Err(AppError::io_failure(
                path,
                io::Error::new(io::ErrorKind::NotFound, "parent directory missing"),
            ));
        }
        state.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }
}
