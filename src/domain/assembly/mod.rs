pub mod assembler;
pub mod types;

pub use assembler::{PROMPT_TITLE, RULE_WIDTH, assemble_prompt};
pub use types::AssembledPrompt;
