//! Concrete implementations of the ports.

pub mod generation_client_http;
pub mod generation_client_retrying;
pub mod local_filesystem;
pub mod starter_modules;

pub use generation_client_http::{API_KEY_ENV, HttpGenerationClient};
pub use generation_client_retrying::{RetryPolicy, RetryingGenerationClient};
pub use local_filesystem::LocalModuleFilesystem;
pub use starter_modules::{StarterModule, starter_modules};
