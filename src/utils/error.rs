use thiserror::Error;

#[derive(Error, Debug)]
pub enum BuildError {
    #[error("Source file not found: {path}")]
    SourceNotFound { path: String },

    #[error("Failed to read {path}: {source}")]
    ReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    WriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Source,
    Io,
    Configuration,
    Serialization,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    /// Process exit code for a run that failed with this severity.
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl BuildError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            BuildError::SourceNotFound { .. } => ErrorCategory::Source,
            BuildError::ReadError { .. } | BuildError::WriteError { .. } => ErrorCategory::Io,
            BuildError::SerializationError(_) => ErrorCategory::Serialization,
            BuildError::ConfigError { .. }
            | BuildError::ConfigValidationError { .. }
            | BuildError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Source | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Serialization => ErrorSeverity::Medium,
            ErrorCategory::Io => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            BuildError::SourceNotFound { path } => format!(
                "Run from the repository root or pass --source; expected the domain list at {}",
                path
            ),
            BuildError::ReadError { path, .. } => {
                format!("Check that {} is readable UTF-8 text", path)
            }
            BuildError::WriteError { path, .. } => format!(
                "Check permissions and free space for {} and its parent directory",
                path
            ),
            BuildError::SerializationError(_) => {
                "Re-run without --dry-run to skip the JSON summary".to_string()
            }
            BuildError::ConfigError { .. } | BuildError::ConfigValidationError { .. } => {
                "Check the TOML configuration file syntax and section names".to_string()
            }
            BuildError::InvalidConfigValueError { field, .. } => {
                format!("Fix the value of '{}' in the configuration", field)
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            BuildError::SourceNotFound { path } => format!("Source file not found: {}", path),
            BuildError::ReadError { path, .. } => format!("Could not read {}", path),
            BuildError::WriteError { path, .. } => format!("Could not write {}", path),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, BuildError>;
