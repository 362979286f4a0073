pub mod app_config;
pub mod loader;

pub use app_config::{AppConfig, GenerationApiConfig, ModulesConfig, OutputConfig};
pub use loader::{DEFAULT_CONFIG_FILE, load_config, parse_config_content};
