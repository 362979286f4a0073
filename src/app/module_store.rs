//! Loaded module set and the operations over it.

use std::collections::BTreeMap;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use crate::domain::{AppError, AssembledPrompt, ModuleSelection, assemble_prompt};
use crate::ports::ModuleFilesystem;

/// Named text fragments loaded once from a directory.
///
/// The mapping is fixed at construction; every operation afterwards is either
/// a pure read or, for [`save`](Self::save), a single file write.
#[derive(Debug)]
pub struct ModuleStore<F: ModuleFilesystem> {
    fs: F,
    modules: BTreeMap<String, String>,
}

impl<F: ModuleFilesystem> ModuleStore<F> {
    /// Load every `*.{extension}` file directly inside `dir`.
    ///
    /// Files are read in file-name order, so when two files share a stem the
    /// last one wins. Any read failure aborts loading.
    pub fn load(fs: F, dir: impl Into<PathBuf>, extension: &str) -> Result<Self, AppError> {
        let dir = dir.into();
        if !fs.dir_exists(&dir) {
            return Err(AppError::DirectoryNotFound(dir));
        }

        let mut files: Vec<PathBuf> = fs
            .list_files(&dir)?
            .into_iter()
            .filter(|path| path.extension() == Some(OsStr::new(extension)))
            .collect();
        files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

        let mut modules = BTreeMap::new();
        for path in files {
            let Some(name) = path.file_stem().and_then(OsStr::to_str) else {
                tracing::warn!(path = %path.display(), "skipping module with non UTF-8 name");
                continue;
            };
            let content = fs.read_file(&path)?;
            tracing::debug!(module = name, chars = content.chars().count(), "loaded module");
            modules.insert(name.to_string(), content);
        }

        Ok(Self { fs, modules })
    }

    /// All module names in lexicographic order.
    pub fn list_modules(&self) -> Vec<&str> {
        self.modules.keys().map(String::as_str).collect()
    }

    /// Exact lookup of one module's content.
    pub fn get(&self, name: &str) -> Result<&str, AppError> {
        self.modules
            .get(name)
            .map(String::as_str)
            .ok_or_else(|| AppError::ModuleNotFound(name.to_string()))
    }

    /// Assemble and report which names were included or skipped.
    ///
    /// Each skipped name is logged as a warning.
    pub fn assemble_report(&self, selection: &ModuleSelection) -> AssembledPrompt {
        let assembled = assemble_prompt(&self.modules, selection);
        for name in &assembled.skipped {
            tracing::warn!(module = %name, "module not found, skipping");
        }
        assembled
    }

    /// Assemble the selected modules into one prompt.
    pub fn assemble(&self, selection: &ModuleSelection) -> String {
        self.assemble_report(selection).content
    }

    /// Assemble and write the prompt to `path`, creating parent directories.
    ///
    /// Existing files are overwritten. Returns the prompt length in characters.
    pub fn save(&self, path: &Path, selection: &ModuleSelection) -> Result<usize, AppError> {
        let assembled = self.assemble_report(selection);

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            self.fs.create_dir_all(parent)?;
        }
        self.fs.write_file(path, &assembled.content)?;

        let chars = assembled.char_count();
        tracing::info!(path = %path.display(), chars, "saved assembled prompt");
        Ok(chars)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::domain::PROMPT_TITLE;
    use crate::testing::MemoryModuleFilesystem;

    fn store_with(entries: &[(&str, &str)]) -> ModuleStore<MemoryModuleFilesystem> {
        let fs = MemoryModuleFilesystem::new();
        fs.add_dir("modules");
        for (file, content) in entries {
            fs.add_file(Path::new("modules").join(file), content);
        }
        ModuleStore::load(fs, "modules", "md").unwrap()
    }

    fn header() -> String {
        let banner = "=".repeat(80);
        format!("{banner}\n{PROMPT_TITLE}\n{banner}\n")
    }

    #[test]
    fn missing_directory_is_fatal() {
        let fs = MemoryModuleFilesystem::new();
        let err = ModuleStore::load(fs, "nowhere", "md").unwrap_err();
        assert!(matches!(err, AppError::DirectoryNotFound(dir) if dir == Path::new("nowhere")));
    }

    #[test]
    fn empty_directory_loads_no_modules() {
        let store = store_with(&[]);
        assert!(store.list_modules().is_empty());
        assert_eq!(store.assemble(&ModuleSelection::All), header());
    }

    #[test]
    fn lists_modules_sorted_and_ignores_other_extensions() {
        let store =
            store_with(&[("c.md", "C"), ("a.md", "A"), ("notes.txt", "N"), ("b.md", "B")]);
        assert_eq!(store.list_modules(), vec!["a", "b", "c"]);
    }

    #[test]
    fn get_returns_exact_content_including_trailing_whitespace() {
        let store = store_with(&[("a.md", "Alpha\n\n  ")]);
        assert_eq!(store.get("a").unwrap(), "Alpha\n\n  ");
    }

    #[test]
    fn get_missing_module_signals_not_found() {
        let store = store_with(&[("a.md", "A")]);
        let err = store.get("missing").unwrap_err();
        assert!(matches!(err, AppError::ModuleNotFound(name) if name == "missing"));
    }

    #[test]
    fn assemble_skips_unknown_names_without_failing() {
        let store = store_with(&[("a.md", "X"), ("b.md", "Y")]);

        let report = store.assemble_report(&ModuleSelection::only(["z", "b"]));

        assert_eq!(report.skipped, vec!["z"]);
        assert_eq!(report.included, vec!["b"]);
        assert_eq!(report.content, format!("{}\nY\n\n{}\n", header(), "-".repeat(80)));
    }

    #[test]
    fn save_writes_assembled_text_and_creates_parents() {
        let store = store_with(&[("a.md", "X"), ("b.md", "Y")]);
        let path = Path::new("output/nested/prompt.txt");

        let chars = store.save(path, &ModuleSelection::All).unwrap();

        let written = store.fs.file(path).unwrap();
        assert_eq!(written, store.assemble(&ModuleSelection::All));
        assert_eq!(chars, written.chars().count());
    }

    #[test]
    fn save_overwrites_previous_output() {
        let store = store_with(&[("a.md", "X"), ("b.md", "Y")]);
        let path = Path::new("out/prompt.txt");

        store.save(path, &ModuleSelection::All).unwrap();
        store.save(path, &ModuleSelection::only(["a"])).unwrap();

        assert_eq!(store.fs.file(path).unwrap(), store.assemble(&ModuleSelection::only(["a"])));
    }

    #[test]
    fn save_to_unwritable_location_fails_and_leaves_no_file() {
        let store = store_with(&[("a.md", "X")]);
        store.fs.set_read_only(true);
        let path = Path::new("locked/prompt.txt");

        let err = store.save(path, &ModuleSelection::All).unwrap_err();

        assert!(matches!(err, AppError::IoFailure { .. }));
        assert!(store.fs.file(path).is_none());
        assert_eq!(store.list_modules(), vec!["a"]);
    }

    #[test]
    fn module_name_strips_only_the_final_extension() {
        let fs = MemoryModuleFilesystem::new();
        fs.add_file("modules/a.md", "first");
        fs.add_file("modules/a.md.md", "double extension");
        let store = ModuleStore::load(fs, "modules", "md").unwrap();

        assert_eq!(store.get("a").unwrap(), "first");
        assert_eq!(store.get("a.md").unwrap(), "double extension");
        assert_eq!(store.list_modules(), vec!["a", "a.md"]);
    }

    proptest! {
        #[test]
        fn listing_is_sorted_regardless_of_insertion_order(
            names in proptest::collection::btree_set("[a-z0-9_]{1,12}", 0..16),
            seed in any::<u64>(),
        ) {
            let fs = MemoryModuleFilesystem::new();
            fs.add_dir("modules");

            let mut shuffled: Vec<&String> = names.iter().collect();
            let len = shuffled.len().max(1);
            shuffled.rotate_left((seed as usize) % len);
            for name in shuffled {
                fs.add_file(format!("modules/{name}.md"), name);
            }

            let store = ModuleStore::load(fs, "modules", "md").unwrap();
            let expected: Vec<&str> = names.iter().map(String::as_str).collect();
            prop_assert_eq!(store.list_modules(), expected);
        }
    }
}
