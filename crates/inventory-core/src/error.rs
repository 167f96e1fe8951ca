use std::fmt;
use std::io;

/// Failure of a single inventory sub-scan.
#[derive(Debug)]
pub enum ScanError {
    /// The executable could not be launched.
    ToolUnavailable { program: String, source: io::Error },
    /// The process ran but exited with an unexpected status.
    ToolFailed {
        program: String,
        exit_code: Option<i32>,
        stderr: String,
    },
    /// Output did not have the expected shape.
    Parse { tool: String, detail: String },
}

impl ScanError {
    pub fn parse(tool: impl Into<String>, detail: impl fmt::Display) -> Self {
        Self::Parse {
            tool: tool.into(),
            detail: detail.to_string(),
        }
    }

    /// Name of the tool the failure is attributed to.
    pub fn tool(&self) -> &str {
        match self {
            Self::ToolUnavailable { program, .. } | Self::ToolFailed { program, .. } => program,
            Self::Parse { tool, .. } => tool,
        }
    }
}

impl fmt::Display for ScanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ToolUnavailable { program, source } => {
                write!(f, "failed launching {}: {}", program, source)
            }
            Self::ToolFailed {
                program,
                exit_code,
                stderr,
            } => {
                match exit_code {
                    Some(code) => write!(f, "{} exited with status {}", program, code)?,
                    None => write!(f, "{} terminated by signal", program)?,
                }
                if !stderr.is_empty() {
                    write!(f, ": {}", stderr)?;
                }
                Ok(())
            }
            Self::Parse { tool, detail } => {
                write!(f, "failed parsing {} output: {}", tool, detail)
            }
        }
    }
}

impl std::error::Error for ScanError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ToolUnavailable { source, .. } => Some(source),
            _ => None,
        }
    }
}

pub type ScanResult<T> = std::result::Result<T, ScanError>;
