use std::path::{Path, PathBuf};

use crate::adapters::starter_modules;
use crate::domain::AppError;
use crate::ports::ModuleFilesystem;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitOutcome {
    pub dir: PathBuf,
    pub written: Vec<PathBuf>,
}

/// Write the bundled starter modules into `dir`.
///
/// Refuses to touch a directory that already holds files unless `force` is set,
/// in which case same-named files are overwritten and others are left alone.
pub fn execute(
    fs: &impl ModuleFilesystem,
    dir: &Path,
    force: bool,
) -> Result<InitOutcome, AppError> {
    if fs.dir_exists(dir) && !force && !fs.list_files(dir)?.is_empty() {
        return Err(AppError::ModulesDirectoryExists(dir.to_path_buf()));
    }

    fs.create_dir_all(dir)?;

    let mut written = Vec::new();
    for module in starter_modules() {
        let path = dir.join(module.file_name);
        fs.write_file(&path, module.content)?;
        written.push(path);
    }

    Ok(InitOutcome { dir: dir.to_path_buf(), written })
}
