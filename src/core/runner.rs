use crate::core::selector::select_target;
use crate::domain::model::Target;
use crate::domain::ports::BuildTool;
use crate::utils::error::{Result, SelectorError};
use std::path::Path;

pub struct BuildRunner<T: BuildTool> {
    tool: T,
    dry_run: bool,
}

impl<T: BuildTool> BuildRunner<T> {
    pub fn new(tool: T) -> Self {
        Self {
            tool,
            dry_run: false,
        }
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn tool(&self) -> &T {
        &self.tool
    }

    /// Selects the target for `path`, announces it on stdout and builds it.
    pub async fn run(&self, path: &Path) -> Result<Target> {
        let target = select_target(path);
        tracing::debug!("Selected target {} from {:?}", target, path);
        println!("{}", target.announcement());

        self.build(&target).await?;
        Ok(target)
    }

    pub async fn build(&self, target: &Target) -> Result<()> {
        let invocation = self.tool.invocation(target);

        if self.dry_run {
            tracing::info!("Dry run, not starting build tool");
            println!("Would run: {}", invocation);
            return Ok(());
        }

        tracing::debug!("Running: {}", invocation);
        let status = self.tool.run(target).await?;

        if status.success() {
            tracing::debug!("Build tool finished successfully");
            Ok(())
        } else {
            tracing::debug!("Build tool exited with {:?}", status.code);
            Err(SelectorError::ToolFailed {
                program: invocation.program,
                code: status.code,
            })
        }
    }
}
