//! modprompt: assemble LLM system prompts from modular text fragments.
//!
//! Each file in a modules directory is one named fragment. A [`ModuleStore`]
//! loads them once and concatenates any selection, in order, behind a fixed
//! header and with separators between modules.
//!
//! ```no_run
//! use modprompt::ModuleSelection;
//!
//! let store = modprompt::open("prompt_modules")?;
//! println!("{:?}", store.list_modules());
//! let _prompt = store.assemble(&ModuleSelection::only(["01_identity", "04_tone"]));
//! store.save(std::path::Path::new("output/minimal_prompt.txt"), &ModuleSelection::All)?;
//! # Ok::<(), modprompt::AppError>(())
//! ```

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

use std::path::{Path, PathBuf};

use adapters::LocalModuleFilesystem;

pub use app::ModuleStore;
pub use app::commands::init::InitOutcome;
pub use app::commands::send::SAMPLE_MESSAGES;
pub use domain::{AppConfig, AppError, AssembledPrompt, ModuleSelection};
pub use ports::{GenerationClient, GenerationRequest, GenerationResponse};

/// Load the `*.md` modules in `dir`.
pub fn open(dir: impl Into<PathBuf>) -> Result<ModuleStore<LocalModuleFilesystem>, AppError> {
    open_with_extension(dir, &domain::ModulesConfig::default().extension)
}

/// Load the modules in `dir` whose files carry `extension`.
pub fn open_with_extension(
    dir: impl Into<PathBuf>,
    extension: &str,
) -> Result<ModuleStore<LocalModuleFilesystem>, AppError> {
    ModuleStore::load(LocalModuleFilesystem, dir, extension)
}

/// Write the bundled starter modules into `dir`.
pub fn init_modules(dir: &Path, force: bool) -> Result<InitOutcome, AppError> {
    app::commands::init::execute(&LocalModuleFilesystem, dir, force)
}

/// Assemble a prompt from `store` and send it with `user_text` through `client`.
pub fn send<F: ports::ModuleFilesystem>(
    store: &ModuleStore<F>,
    selection: &ModuleSelection,
    user_text: &str,
    client: &dyn GenerationClient,
) -> Result<GenerationResponse, AppError> {
    client.generate(GenerationRequest {
        system_text: store.assemble(selection),
        user_text: user_text.to_string(),
    })
}
