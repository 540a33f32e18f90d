pub mod runner;
pub mod selector;

pub use crate::domain::model::{Target, ToolInvocation, ToolStatus};
pub use crate::domain::ports::{BuildTool, ToolSettings};
pub use crate::utils::error::Result;
