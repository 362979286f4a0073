use include_dir::{Dir, include_dir};

static STARTER_MODULES_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets/starter_modules");

/// A module file bundled into the binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StarterModule {
    pub file_name: &'static str,
    pub content: &'static str,
}

/// Bundled starter modules, sorted by file name.
pub fn starter_modules() -> Vec<StarterModule> {
    let mut modules: Vec<StarterModule> = STARTER_MODULES_DIR
        .files()
        .filter_map(|file| {
            let file_name = file.path().file_name()?.to_str()?;
            let content = file.contents_utf8()?;
            Some(StarterModule { file_name, content })
        })
        .collect();

    modules.sort_by(|a, b| a.file_name.cmp(b.file_name));
    modules
}
