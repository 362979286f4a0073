//! Configuration loading.

use std::io;
use std::path::Path;

use crate::domain::{AppConfig, AppError};
use crate::ports::ModuleFilesystem;

/// Config file looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "modprompt.toml";

/// Load the configuration.
///
/// An explicit `path` must exist. Without one, `modprompt.toml` is read when
/// present and defaults are used otherwise.
pub fn load_config(fs: &impl ModuleFilesystem, path: Option<&Path>) -> Result<AppConfig, AppError> {
    let (path, required) = match path {
        Some(path) => (path, true),
        None => (Path::new(DEFAULT_CONFIG_FILE), false),
    };

    if !fs.file_exists(path) {
        if required {
            return Err(AppError::io_failure(
                path,
                io::Error::new(io::ErrorKind::NotFound, "config file not found"),
            ));
        }
        return Ok(AppConfig::default());
    }

    let content = fs.read_file(path)?;
    parse_config_content(&content)
}

/// Parse configuration from string content.
pub fn parse_config_content(content: &str) -> Result<AppConfig, AppError> {
    let config: AppConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}
