use thiserror::Error;

#[derive(Error, Debug)]
pub enum PacerError {
    #[error("Cannot read input file '{path}': {source}")]
    FileAccess {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Output error: {0}")]
    Output(#[source] std::io::Error),

    #[error("Invalid value for {field} ('{value}'): {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Output,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl PacerError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            PacerError::FileAccess { .. } => ErrorCategory::Input,
            PacerError::Output(_) => ErrorCategory::Output,
            PacerError::InvalidConfigValue { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // 下游提前關閉管道
            PacerError::Output(e) if e.kind() == std::io::ErrorKind::BrokenPipe => {
                ErrorSeverity::Medium
            }
            PacerError::Output(_) => ErrorSeverity::High,
            PacerError::FileAccess { .. } => ErrorSeverity::Critical,
            PacerError::InvalidConfigValue { .. } => ErrorSeverity::High,
        }
    }

    /// Process exit code. Configuration problems share clap's usage-error code.
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Input | ErrorCategory::Output => 1,
            ErrorCategory::Configuration => 2,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            PacerError::FileAccess { path, source } => match source.kind() {
                std::io::ErrorKind::NotFound => format!("Input file not found: {}", path),
                std::io::ErrorKind::PermissionDenied => {
                    format!("Permission denied reading input file: {}", path)
                }
                _ => format!("Unable to read input file {}: {}", path, source),
            },
            PacerError::Output(e) => format!("Failed to write to standard output: {}", e),
            PacerError::InvalidConfigValue { field, reason, .. } => {
                format!("Invalid {}: {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            PacerError::FileAccess { .. } => "Check that the file exists and is readable",
            PacerError::Output(_) => "Make sure the consumer keeps reading until the feed ends",
            PacerError::InvalidConfigValue { .. } => "Run with --help to see the expected arguments",
        }
    }
}

pub type Result<T> = std::result::Result<T, PacerError>;
