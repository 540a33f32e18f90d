use crate::domain::model::{Target, ToolInvocation, ToolStatus};
use crate::domain::ports::{BuildTool, ToolSettings};
use crate::utils::error::{Result, SelectorError};
use async_trait::async_trait;
use tokio::process::Command;

pub const DEFAULT_PROGRAM: &str = "scons";

/// Runs the build tool as a child process with inherited stdio.
#[derive(Debug, Clone)]
pub struct ProcessBuildTool {
    program: String,
    prefix_args: Vec<String>,
}

impl ProcessBuildTool {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            prefix_args: Vec::new(),
        }
    }

    pub fn with_args(mut self, args: Vec<String>) -> Self {
        self.prefix_args = args;
        self
    }

    pub fn from_settings<S: ToolSettings + ?Sized>(settings: &S) -> Self {
        Self::new(settings.program()).with_args(settings.prefix_args().to_vec())
    }
}

impl Default for ProcessBuildTool {
    fn default() -> Self {
        Self::new(DEFAULT_PROGRAM)
    }
}

#[async_trait]
impl BuildTool for ProcessBuildTool {
    fn invocation(&self, target: &Target) -> ToolInvocation {
        ToolInvocation::new(&self.program, &self.prefix_args, target)
    }

    async fn run(&self, target: &Target) -> Result<ToolStatus> {
        let invocation = self.invocation(target);

        let status = Command::new(&invocation.program)
            .args(&invocation.args)
            .status()
            .await
            .map_err(|source| SelectorError::Spawn {
                program: invocation.program.clone(),
                source,
            })?;

        Ok(status.into())
    }
}
