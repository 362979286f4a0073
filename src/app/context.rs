use crate::app::ModuleStore;
use crate::domain::{AppConfig, AppError};
use crate::ports::ModuleFilesystem;

/// Application context holding the filesystem and resolved configuration.
#[derive(Debug, Clone)]
pub struct AppContext<F: ModuleFilesystem + Clone> {
    fs: F,
    config: AppConfig,
}

impl<F: ModuleFilesystem + Clone> AppContext<F> {
    pub fn new(fs: F, config: AppConfig) -> Self {
        Self { fs, config }
    }

    pub fn fs(&self) -> &F {
        &self.fs
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Load the module store described by `[modules]`.
    pub fn open_store(&self) -> Result<ModuleStore<F>, AppError> {
        ModuleStore::load(
            self.fs.clone(),
            self.config.modules.dir.clone(),
            &self.config.modules.extension,
        )
    }
}
