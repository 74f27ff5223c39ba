use crate::domain::model::FieldError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FolioError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Invalid value for '{field}': {reason} (got '{value}')")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required field: {field}")]
    MissingConfigError { field: String },

    #[error("Not a valid email address: {email}")]
    InvalidEmailError { email: String },

    #[error("Unknown transform step: {name}")]
    UnknownStepError { name: String },

    #[error("Contact form has {} invalid field(s)", .errors.len())]
    ValidationError { errors: Vec<FieldError> },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Configuration,
    Input,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    /// Process exit status the CLI reports for an error of this severity.
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorSeverity::High => 1,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl FolioError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            FolioError::IoError(_) => ErrorCategory::Io,
            FolioError::SerializationError(_)
            | FolioError::ValidationError { .. }
            | FolioError::InvalidEmailError { .. }
            | FolioError::UnknownStepError { .. } => ErrorCategory::Input,
            FolioError::TomlError(_)
            | FolioError::InvalidConfigValueError { .. }
            | FolioError::MissingConfigError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            FolioError::ValidationError { .. } => ErrorSeverity::Medium,
            FolioError::IoError(_) => ErrorSeverity::Critical,
            _ => ErrorSeverity::High,
        }
    }

    /// 給終端使用者看的訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            FolioError::IoError(e) => format!("Could not read or write a file: {}", e),
            FolioError::SerializationError(e) => format!("Input is not valid JSON: {}", e),
            FolioError::TomlError(e) => format!("Configuration file is not valid TOML: {}", e),
            FolioError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
            FolioError::MissingConfigError { field } => {
                format!("Setting '{}' is required but missing", field)
            }
            FolioError::InvalidEmailError { email } => {
                format!("'{}' is not a valid email address", email)
            }
            FolioError::UnknownStepError { name } => format!("'{}' is not a known step", name),
            FolioError::ValidationError { errors } => {
                let lines: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
                format!("Please fix the following fields:\n  {}", lines.join("\n  "))
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            FolioError::IoError(_) => "Check that the path exists and is readable",
            FolioError::SerializationError(_) => "Make sure the file is a JSON object",
            FolioError::TomlError(_) => "Compare the file against the documented sections",
            FolioError::InvalidConfigValueError { .. } | FolioError::MissingConfigError { .. } => {
                "Correct the value in the configuration file or pass a CLI override"
            }
            FolioError::InvalidEmailError { .. } => {
                "Use the form name@example.com (Punycode domains such as xn--... are accepted)"
            }
            FolioError::UnknownStepError { .. } => {
                "Use one of: truncate, capitalize, linkify, sanitize"
            }
            FolioError::ValidationError { .. } => "Correct the listed fields and submit again",
        }
    }
}

pub type Result<T> = std::result::Result<T, FolioError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_lists_fields() {
        let err = FolioError::ValidationError {
            errors: vec![
                FieldError::new("name", "is required"),
                FieldError::new("email", "must be a valid email address"),
            ],
        };
        assert_eq!(err.to_string(), "Contact form has 2 invalid field(s)");
        let message = err.user_friendly_message();
        assert!(message.contains("name: is required"));
        assert!(message.contains("email: must be a valid email address"));
        assert_eq!(err.severity(), ErrorSeverity::Medium);
        assert_eq!(err.category(), ErrorCategory::Input);
    }

    #[test]
    fn test_config_error_category() {
        let err = FolioError::MissingConfigError {
            field: "truncate.suffix".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert_eq!(err.severity(), ErrorSeverity::High);
    }

    #[test]
    fn test_exit_codes_by_severity() {
        let invalid_email = FolioError::InvalidEmailError {
            email: "foo".to_string(),
        };
        assert_eq!(invalid_email.severity().exit_code(), 1);

        let invalid_form = FolioError::ValidationError {
            errors: vec![FieldError::new("message", "is required")],
        };
        assert_eq!(invalid_form.severity().exit_code(), 2);

        let io = FolioError::IoError(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        assert_eq!(io.severity().exit_code(), 3);
    }
}
