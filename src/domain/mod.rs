pub mod assembly;
pub mod configuration;
pub mod error;
pub mod selection;

pub use assembly::{AssembledPrompt, PROMPT_TITLE, RULE_WIDTH, assemble_prompt};
pub use configuration::{
    AppConfig, DEFAULT_CONFIG_FILE, GenerationApiConfig, ModulesConfig, OutputConfig, load_config,
    parse_config_content,
};
pub use error::AppError;
pub use selection::ModuleSelection;
