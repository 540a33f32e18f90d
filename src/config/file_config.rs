use crate::adapters::process::DEFAULT_PROGRAM;
use crate::core::ToolSettings;
use crate::utils::error::{Result, SelectorError};
use crate::utils::validation::{validate_args, validate_program, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    #[serde(default)]
    pub tool: ToolConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ToolConfig {
    #[serde(default = "default_program")]
    pub program: String,
    /// Inserted before the target argument.
    #[serde(default)]
    pub args: Vec<String>,
}

fn default_program() -> String {
    DEFAULT_PROGRAM.to_string()
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            program: default_program(),
            args: Vec::new(),
        }
    }
}

impl FileConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| SelectorError::ConfigError {
            message: format!("Failed to read config file '{}': {}", path.display(), e),
        })?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: FileConfig = toml::from_str(content)?;
        Ok(config)
    }
}

impl Validate for FileConfig {
    fn validate(&self) -> Result<()> {
        validate_program("tool.program", &self.tool.program)?;
        validate_args("tool.args", &self.tool.args)?;
        Ok(())
    }
}

impl ToolSettings for ToolConfig {
    fn program(&self) -> &str {
        &self.program
    }

    fn prefix_args(&self) -> &[String] {
        &self.args
    }
}
