use crate::config::file_config::{FileConfig, ToolConfig};
use crate::utils::error::Result;
use crate::utils::validation::{validate_program, Validate};
use clap::Parser;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Parser)]
#[command(name = "selector")]
#[command(about = "Select a CV build target from a file name and run scons")]
pub struct CliConfig {
    /// File whose name picks the target; `*.yaml` builds that version only
    pub path: Option<OsString>,

    /// Anything after the path is accepted and ignored
    #[arg(trailing_var_arg = true, hide = true)]
    pub ignored: Vec<OsString>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Build tool to run instead of the configured one
    #[arg(long)]
    pub tool: Option<String>,

    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Show what would be run without starting the build tool
    #[arg(long)]
    pub dry_run: bool,
}

impl CliConfig {
    pub fn target_path(&self) -> &Path {
        Path::new(self.path.as_deref().unwrap_or_default())
    }

    /// Merges the config file (if any) with command line overrides.
    pub fn tool_config(&self) -> Result<ToolConfig> {
        let file = match &self.config {
            Some(path) => {
                tracing::debug!("Loading configuration from {}", path.display());
                FileConfig::from_file(path)?
            }
            None => FileConfig::default(),
        };
        file.validate()?;

        let mut tool = file.tool;
        if let Some(program) = &self.tool {
            tracing::debug!("Build tool overridden to: {}", program);
            tool.program = program.clone();
        }
        Ok(tool)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(program) = &self.tool {
            validate_program("--tool", program)?;
        }
        Ok(())
    }
}
