pub mod commands;
pub mod config;
pub mod error;
pub mod fs;
pub mod hooks;

pub use config::HookConfig;
pub use error::HookError;
