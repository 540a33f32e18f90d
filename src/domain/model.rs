use std::fmt;

/// Build target handed to the external tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// A single version, named after the selected file's stem.
    Named(String),
    /// Every version; passed to the tool as an empty argument.
    All,
}

impl Target {
    pub fn as_arg(&self) -> &str {
        match self {
            Target::Named(name) => name,
            Target::All => "",
        }
    }

    pub fn announcement(&self) -> String {
        match self {
            Target::Named(name) => format!("Building target {}", name),
            Target::All => "Building all CV versions".to_string(),
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Named(name) => f.write_str(name),
            Target::All => f.write_str("<all>"),
        }
    }
}

/// Raw outcome reported by a build tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolStatus {
    /// `None` when the process was terminated by a signal.
    pub code: Option<i32>,
}

impl ToolStatus {
    pub fn from_code(code: i32) -> Self {
        Self { code: Some(code) }
    }

    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

impl From<std::process::ExitStatus> for ToolStatus {
    fn from(status: std::process::ExitStatus) -> Self {
        Self {
            code: status.code(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolInvocation {
    pub program: String,
    pub args: Vec<String>,
}

impl ToolInvocation {
    pub fn new(program: &str, prefix_args: &[String], target: &Target) -> Self {
        let mut args = prefix_args.to_vec();
        args.push(target.as_arg().to_string());
        Self {
            program: program.to_string(),
            args,
        }
    }
}

impl fmt::Display for ToolInvocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            if arg.is_empty() || arg.contains(char::is_whitespace) {
                write!(f, " {:?}", arg)?;
            } else {
                write!(f, " {}", arg)?;
            }
        }
        Ok(())
    }
}
