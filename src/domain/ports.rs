use crate::domain::model::{Target, ToolStatus, ToolInvocation};
use crate::utils::error::Result;
use async_trait::async_trait;

/// The external build tool. Implementations run the build for `target` to
/// completion and report how it ended; a failure to start is an `Err`.
#[async_trait]
pub trait BuildTool: Send + Sync {
    fn invocation(&self, target: &Target) -> ToolInvocation;

    async fn run(&self, target: &Target) -> Result<ToolStatus>;
}

pub trait ToolSettings: Send + Sync {
    fn program(&self) -> &str;
    fn prefix_args(&self) -> &[String];
}
