/// Result of prompt assembly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssembledPrompt {
    /// The fully assembled prompt text.
    pub content: String,

    /// Module names that were appended, in output order.
    pub included: Vec<String>,

    /// Selected names with no matching module (for diagnostic output).
    pub skipped: Vec<String>,
}

impl AssembledPrompt {
    /// Length in characters, not bytes.
    pub fn char_count(&self) -> usize {
        self.content.chars().count()
    }
}
