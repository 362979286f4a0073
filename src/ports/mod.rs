mod generation_client;
mod module_filesystem;

pub use generation_client::{
    DryRunGenerationClient, GenerationClient, GenerationRequest, GenerationResponse,
};
pub use module_filesystem::ModuleFilesystem;
