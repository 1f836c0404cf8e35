use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Error, Serialize, Deserialize)]
pub enum ErrlensError {
    // Catalog construction errors
    #[error("pattern for '{title}' does not compile: {reason}")]
    InvalidPattern {
        title: String,
        pattern: String,
        reason: String,
    },
    #[error("duplicate catalog title '{title}'")]
    DuplicateTitle {
        title: String,
        category: String,
    },
    #[error("invalid catalog entry '{title}': {reason}")]
    InvalidEntry {
        title: String,
        reason: String,
    },

    // Configuration errors
    #[error("configuration error: {message}")]
    ConfigurationError {
        message: String,
        field: Option<String>,
        suggestion: Option<String>,
    },
    #[error("configuration file error at '{path}': {reason}")]
    ConfigurationFileError {
        path: String,
        reason: String,
    },

    // Input acquisition errors
    #[error("could not read input from {source_name}: {reason}")]
    InputError {
        source_name: String,
        reason: String,
    },

    #[error("failed to serialize {content_type}: {reason}")]
    SerializationError {
        content_type: String,
        reason: String,
    },

    #[error("system error during {operation}: {reason}")]
    SystemError {
        operation: String,
        reason: String,
    },
}

impl ErrlensError {
    pub fn invalid_pattern(title: &str, pattern: &str, reason: &str) -> Self {
        Self::InvalidPattern {
            title: title.to_string(),
            pattern: pattern.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn duplicate_title(title: &str, category: &str) -> Self {
        Self::DuplicateTitle {
            title: title.to_string(),
            category: category.to_string(),
        }
    }

    pub fn invalid_entry(title: &str, reason: &str) -> Self {
        Self::InvalidEntry {
            title: title.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn config_error(message: &str, field: Option<&str>, suggestion: Option<&str>) -> Self {
        Self::ConfigurationError {
            message: message.to_string(),
            field: field.map(ToString::to_string),
            suggestion: suggestion.map(ToString::to_string),
        }
    }

    pub fn config_file_error(path: &str, reason: &str) -> Self {
        Self::ConfigurationFileError {
            path: path.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn input_error(source_name: &str, reason: &str) -> Self {
        Self::InputError {
            source_name: source_name.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn system_error(operation: &str, reason: &str) -> Self {
        Self::SystemError {
            operation: operation.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Catalog problems are bugs in the knowledge base, not in the user's input.
    pub const fn is_catalog_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidPattern { .. } | Self::DuplicateTitle { .. } | Self::InvalidEntry { .. }
        )
    }

    pub const fn severity(&self) -> ErrorSeverity {
        match self {
            Self::SystemError { .. } => ErrorSeverity::Critical,
            Self::InvalidPattern { .. } | Self::DuplicateTitle { .. } | Self::InvalidEntry { .. } => ErrorSeverity::High,
            Self::ConfigurationFileError { .. } | Self::InputError { .. } => ErrorSeverity::Medium,
            Self::SerializationError { .. } => ErrorSeverity::Medium,
            Self::ConfigurationError { .. } => ErrorSeverity::Low,
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidPattern { title, pattern, reason } => {
                format!(
                    "Catalog entry '{}' has an invalid pattern: {}\nPattern: {}\n💡 Fix the regular expression in the catalog or your [[patterns]] config",
                    title, reason, pattern
                )
            }
            Self::DuplicateTitle { title, category } => {
                format!(
                    "Catalog title '{}' (category: {}) is defined more than once\n💡 Titles must be unique; rename the custom pattern",
                    title, category
                )
            }
            Self::InvalidEntry { title, reason } => {
                format!("Catalog entry '{}' is invalid: {}", title, reason)
            }
            Self::ConfigurationError { message, field, suggestion } => {
                let mut msg = format!("Configuration Error: {}", message);
                if let Some(field) = field {
                    msg.push_str(&format!(" (field: {})", field));
                }
                if let Some(suggestion) = suggestion {
                    msg.push_str(&format!("\n💡 Suggestion: {}", suggestion));
                }
                msg
            }
            Self::ConfigurationFileError { path, reason } => {
                format!("Configuration file error at '{}': {}\n💡 Check file permissions and TOML syntax", path, reason)
            }
            Self::InputError { source_name, reason } => {
                format!("Could not read input from {}: {}\n💡 Pipe the error text in or pass it as arguments", source_name, reason)
            }
            Self::SerializationError { content_type, reason } => {
                format!("Failed to produce {} output: {}", content_type, reason)
            }
            Self::SystemError { operation, reason } => {
                format!("System error during {}: {}", operation, reason)
            }
        }
    }

    pub fn technical_details(&self) -> String {
        format!("{:?}", self)
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    pub const fn emoji(self) -> &'static str {
        match self {
            Self::Low => "🟢",
            Self::Medium => "🟡",
            Self::High => "🟠",
            Self::Critical => "🔴",
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
            Self::Critical => "CRITICAL",
        }
    }
}

/// Result type alias for errlens operations
pub type ErrlensResult<T> = Result<T, ErrlensError>;

/// Error handler for consistent error processing
pub struct ErrorHandler;

impl ErrorHandler {
    /// Handle error with appropriate logging and user feedback
    pub fn handle_error(error: &ErrlensError) {
        let severity = error.severity();

        log::error!("[{}] {}", severity.name(), error.technical_details());

        eprintln!("{} {}", severity.emoji(), error.user_message());

        if error.is_catalog_error() {
            eprintln!("🚨 The pattern catalog could not be built - nothing was analyzed");
        }
    }
}

impl From<std::io::Error> for ErrlensError {
    fn from(error: std::io::Error) -> Self {
        Self::SystemError {
            operation: "I/O operation".to_string(),
            reason: error.to_string(),
        }
    }
}

impl From<serde_json::Error> for ErrlensError {
    fn from(error: serde_json::Error) -> Self {
        Self::SerializationError {
            content_type: "JSON".to_string(),
            reason: error.to_string(),
        }
    }
}

impl From<toml::de::Error> for ErrlensError {
    fn from(error: toml::de::Error) -> Self {
        Self::ConfigurationError {
            message: error.message().to_string(),
            field: None,
            suggestion: Some("Check the TOML syntax of your config file".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_errors_are_high_severity() {
        let error = ErrlensError::duplicate_title("Module Not Found", "Node.js");
        assert!(error.is_catalog_error());
        assert_eq!(error.severity(), ErrorSeverity::High);
        assert!(error.user_message().contains("Module Not Found"));
    }

    #[test]
    fn test_config_error_includes_suggestion() {
        let error = ErrlensError::config_error("bad severity", Some("patterns.severity"), Some("use error, warning or info"));
        let msg = error.user_message();
        assert!(msg.contains("patterns.severity"));
        assert!(msg.contains("💡 Suggestion: use error, warning or info"));
        assert!(!error.is_catalog_error());
    }

    #[test]
    fn test_toml_error_conversion() {
        let parse: Result<toml::Value, _> = toml::from_str("[output\ncolor = true");
        let error: ErrlensError = parse.unwrap_err().into();
        assert!(matches!(error, ErrlensError::ConfigurationError { .. }));
    }
}
