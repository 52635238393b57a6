pub mod commands;
pub mod config;
pub mod error;
pub mod fs;
pub mod hooks;
pub mod input;
pub mod picker;
pub mod settings;
pub mod skills;

pub use config::{AriaPaths, HookConfig};
pub use error::HookError;
pub use hooks::{HookContext, HookOutput};
