use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::AppError;
use crate::ports::ModuleFilesystem;

/// `std::fs`-backed implementation of [`ModuleFilesystem`].
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalModuleFilesystem;

impl ModuleFilesystem for LocalModuleFilesystem {
    fn dir_exists(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn file_exists(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn list_files(&self, dir: &Path) -> Result<Vec<PathBuf>, AppError> {
        let entries = fs::read_dir(dir).map_err(|err| AppError::io_failure(dir, err))?;

        let mut files = Vec::new();
        for entry in entries {
            let path = entry.map_err(|err| AppError::io_failure(dir, err))?.path();
            if path.is_file() {
                files.push(path);
            }
        }
        Ok(files)
    }

    fn read_file(&self, path: &Path) -> Result<String, AppError> {
        fs::read_to_string(path).map_err(|err| AppError::io_failure(path, err))
    }

    fn create_dir_all(&self, path: &Path) -> Result<(), AppError> {
        fs::create_dir_all(path).map_err(|err| AppError::io_failure(path, err))
    }

    fn write_file(&self, path: &Path, content: &str) -> Result<(), AppError> {
        fs::write(path, content).map_err(|err| AppError::io_failure(path, err))
    }
}
