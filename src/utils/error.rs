use thiserror::Error;

#[derive(Error, Debug)]
pub enum SelectorError {
    #[error("Build tool '{program}' exited with {}", describe_code(.code))]
    ToolFailed { program: String, code: Option<i32> },

    #[error("Failed to start build tool '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Invalid value for '{field}' ({value:?}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

fn describe_code(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("status {}", code),
        None => "no status (terminated by signal)".to_string(),
    }
}

impl SelectorError {
    /// Exit code for failures the binary recovers from. `None` means the
    /// error is surfaced as-is.
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            SelectorError::ToolFailed { .. } => Some(1),
            SelectorError::ConfigError { .. }
            | SelectorError::ConfigParse(_)
            | SelectorError::InvalidConfigValueError { .. } => Some(1),
            SelectorError::Spawn { .. } => None,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            SelectorError::ToolFailed { program, .. } => {
                format!("{} reported a failed build", program)
            }
            SelectorError::Spawn { program, .. } => {
                format!("Could not run '{}'", program)
            }
            SelectorError::ConfigError { message } => message.clone(),
            SelectorError::ConfigParse(e) => format!("Config file is not valid TOML: {}", e),
            SelectorError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid '{}': {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            SelectorError::ToolFailed { .. } => "Check the build tool output above",
            SelectorError::Spawn { .. } => {
                "Make sure the build tool is installed and on PATH, or pass --tool"
            }
            SelectorError::ConfigError { .. } | SelectorError::ConfigParse(_) => {
                "Make sure the file exists and is valid TOML format"
            }
            SelectorError::InvalidConfigValueError { .. } => "Fix the value and try again",
        }
    }
}

pub type Result<T> = std::result::Result<T, SelectorError>;
