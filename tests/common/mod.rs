//! Shared testing utilities for modprompt CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated working directory with a modules folder.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment with an empty `prompt_modules/`.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(work_dir.join("prompt_modules"))
            .expect("Failed to create test modules directory");

        Self { root, work_dir }
    }

    /// Create an environment preloaded with the given modules.
    pub fn with_modules(modules: &[(&str, &str)]) -> Self {
        let ctx = Self::new();
        for (name, content) in modules {
            ctx.write_module(name, content);
        }
        ctx
    }

    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    pub fn modules_dir(&self) -> PathBuf {
        self.work_dir.join("prompt_modules")
    }

    /// Write `<name>.md` into the modules directory.
    pub fn write_module(&self, name: &str, content: &str) {
        fs::write(self.modules_dir().join(format!("{name}.md")), content)
            .expect("Failed to write module");
    }

    /// Build a command for invoking the compiled binary in the work directory.
    ///
    /// Inherited `RUST_LOG` and API keys are cleared so output is deterministic.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("modprompt").expect("Failed to locate modprompt binary");
        cmd.current_dir(&self.work_dir).env_remove("RUST_LOG").env_remove("ANTHROPIC_API_KEY");
        cmd
    }

    pub fn read(&self, relative: &str) -> String {
        fs::read_to_string(self.work_dir.join(relative)).expect("Failed to read file")
    }
}

/// Expected assembly of module contents, in order.
#[allow(dead_code)]
pub fn expected_prompt(contents: &[&str]) -> String {
    let rule = "=".repeat(80);
    let separator = format!("\n{}\n", "-".repeat(80));
    let title = "SYSTEM PROMPT - Assembled from Modular Components".to_string();
    let mut parts = vec![rule.clone(), title, rule, String::new()];
    for content in contents {
        parts.push(content.to_string());
        parts.push(separator.clone());
    }
    parts.join("\n")
}
