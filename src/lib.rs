pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::process::ProcessBuildTool;
pub use config::{FileConfig, ToolConfig};
pub use self::core::{runner::BuildRunner, selector::select_target, BuildTool, Target, ToolStatus};
pub use utils::error::{Result, SelectorError};
