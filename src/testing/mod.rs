mod fake_generation_client;
mod memory_filesystem;

pub use fake_generation_client::FakeGenerationClient;
pub use memory_filesystem::MemoryModuleFilesystem;
