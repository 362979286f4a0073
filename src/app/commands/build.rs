use std::path::PathBuf;

use crate::app::AppContext;
use crate::domain::{AppError, ModuleSelection};
use crate::ports::ModuleFilesystem;

/// File name used under `[output] dir` when saving without an explicit path.
pub const DEFAULT_OUTPUT_FILE: &str = "complete_prompt.txt";

/// Where the assembled prompt should go.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum BuildTarget {
    /// Return the prompt to the caller.
    #[default]
    Stdout,
    /// Save under the configured output directory.
    DefaultFile,
    /// Save to this path.
    File(PathBuf),
}

#[derive(Debug, Clone, Default)]
pub struct BuildOptions {
    pub selection: ModuleSelection,
    pub target: BuildTarget,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildOutcome {
    Printed { prompt: String, skipped: Vec<String> },
    Saved { path: PathBuf, chars: usize },
}

pub fn execute<F>(ctx: &AppContext<F>, options: BuildOptions) -> Result<BuildOutcome, AppError>
where
    F: ModuleFilesystem + Clone,
{
    let store = ctx.open_store()?;

    let path = match options.target {
        BuildTarget::Stdout => {
            let assembled = store.assemble_report(&options.selection);
            return Ok(BuildOutcome::Printed {
                prompt: assembled.content,
                skipped: assembled.skipped,
            });
        }
        BuildTarget::DefaultFile => ctx.config().output.dir.join(DEFAULT_OUTPUT_FILE),
        BuildTarget::File(path) => path,
    };

    let chars = store.save(&path, &options.selection)?;
    Ok(BuildOutcome::Saved { path, chars })
}
