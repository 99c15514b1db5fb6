use thiserror::Error;

#[derive(Error, Debug)]
pub enum EtlError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Malformed input: {message}")]
    MalformedInput { message: String },

    #[error("Record {record}: missing required field '{field}'")]
    MissingField { field: String, record: usize },

    #[error("Field '{field}': '{value}' is not a valid integer")]
    InvalidNumber { field: String, value: String },

    #[error("Duplicate identifier '{key}' in field '{field}'")]
    DuplicateIdentifier { field: String, key: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration field: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Data,
    Config,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl EtlError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            EtlError::IoError(_) => ErrorCategory::Io,
            EtlError::SerializationError(_)
            | EtlError::MalformedInput { .. }
            | EtlError::MissingField { .. }
            | EtlError::InvalidNumber { .. }
            | EtlError::DuplicateIdentifier { .. } => ErrorCategory::Data,
            EtlError::ConfigError { .. }
            | EtlError::InvalidConfigValueError { .. }
            | EtlError::MissingConfigError { .. } => ErrorCategory::Config,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Io => ErrorSeverity::Critical,
            ErrorCategory::Data => ErrorSeverity::High,
            ErrorCategory::Config => ErrorSeverity::Medium,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            EtlError::IoError(e) => format!("File operation failed: {}", e),
            EtlError::SerializationError(e) => format!("Input is not valid JSON: {}", e),
            EtlError::MalformedInput { message } => {
                format!("Input has an unexpected shape: {}", message)
            }
            EtlError::MissingField { field, record } => {
                format!("Record {} is missing the '{}' field", record, field)
            }
            EtlError::InvalidNumber { field, value } => {
                format!("'{}' cannot be parsed as an integer for '{}'", value, field)
            }
            EtlError::DuplicateIdentifier { field, key } => {
                format!("Identifier '{}' appears more than once in '{}'", key, field)
            }
            EtlError::ConfigError { message } => format!("Configuration problem: {}", message),
            EtlError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration field '{}' is invalid: {}", field, reason)
            }
            EtlError::MissingConfigError { field } => {
                format!("Configuration field '{}' is required", field)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self.category() {
            ErrorCategory::Io => {
                "Check that the input file exists and the output directory is writable".to_string()
            }
            ErrorCategory::Data => {
                "Fix the offending record in the input file and re-run".to_string()
            }
            ErrorCategory::Config => {
                "Review the configuration values and consult --help".to_string()
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, EtlError>;
