pub mod cli;
pub mod commands;
mod context;
pub mod logging;
mod module_store;

pub use context::AppContext;
pub use module_store::ModuleStore;
