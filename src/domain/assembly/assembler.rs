use std::collections::BTreeMap;

use crate::domain::ModuleSelection;

use super::types::AssembledPrompt;

/// Width of the `=` banner and `-` separator lines.
pub const RULE_WIDTH: usize = 80;

/// Title line placed between the two header banners.
pub const PROMPT_TITLE: &str = "SYSTEM PROMPT - Assembled from Modular Components";

/// Assemble a prompt from the module mapping and a selection.
///
/// Parts are joined with a single newline: the header banner, title, banner
/// and an empty line, then each selected module's raw content followed by a
/// separator part of `"\n" + "-" * 80 + "\n"`. Names absent from `modules` are
/// recorded in `skipped` and contribute nothing to the text.
pub fn assemble_prompt(
    modules: &BTreeMap<String, String>,
    selection: &ModuleSelection,
) -> AssembledPrompt {
    let banner = "=".repeat(RULE_WIDTH);
    let separator = format!("\n{}\n", "-".repeat(RULE_WIDTH));

    let mut parts: Vec<&str> = vec![banner.as_str(), PROMPT_TITLE, banner.as_str(), ""];
    let mut included = Vec::new();
    let mut skipped = Vec::new();

    for name in selection.resolve(modules) {
        match modules.get(name) {
            Some(content) => {
                parts.push(content);
                parts.push(&separator);
                included.push(name.to_string());
            }
            None => skipped.push(name.to_string()),
        }
    }

    AssembledPrompt { content: parts.join("\n"), included, skipped }
}
