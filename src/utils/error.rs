use thiserror::Error;

#[derive(Error, Debug)]
pub enum SpinnerError {
    #[error("Cannot spin an empty collection")]
    EmptyInput,

    #[error("Invalid weight {weight} for item '{id}'")]
    InvalidWeight { id: String, weight: i64 },

    #[error("Winner index {winner_index} out of range for {item_count} segments")]
    InvalidGeometry {
        winner_index: usize,
        item_count: usize,
    },

    #[error("Restaurant not found: {id}")]
    RestaurantNotFound { id: String },

    #[error("Duplicate restaurant id: {id}")]
    DuplicateId { id: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Validation error: {message}")]
    ValidationError { message: String },
}

pub type Result<T> = std::result::Result<T, SpinnerError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    Storage,
    Validation,
    Internal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl SpinnerError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            SpinnerError::EmptyInput
            | SpinnerError::RestaurantNotFound { .. }
            | SpinnerError::DuplicateId { .. } => ErrorCategory::Input,
            SpinnerError::InvalidWeight { .. } | SpinnerError::ValidationError { .. } => {
                ErrorCategory::Validation
            }
            SpinnerError::ConfigError { .. }
            | SpinnerError::InvalidConfigValueError { .. }
            | SpinnerError::ConfigValidationError { .. } => ErrorCategory::Configuration,
            SpinnerError::IoError(_) | SpinnerError::SerializationError(_) => {
                ErrorCategory::Storage
            }
            SpinnerError::InvalidGeometry { .. } => ErrorCategory::Internal,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // 空轉盤只是沒有東西可轉，不算失敗
            SpinnerError::EmptyInput => ErrorSeverity::Low,
            SpinnerError::RestaurantNotFound { .. }
            | SpinnerError::DuplicateId { .. }
            | SpinnerError::IoError(_)
            | SpinnerError::SerializationError(_) => ErrorSeverity::Medium,
            SpinnerError::InvalidWeight { .. }
            | SpinnerError::ValidationError { .. }
            | SpinnerError::ConfigError { .. }
            | SpinnerError::InvalidConfigValueError { .. }
            | SpinnerError::ConfigValidationError { .. } => ErrorSeverity::High,
            SpinnerError::InvalidGeometry { .. } => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            SpinnerError::EmptyInput => {
                "Add some restaurants or adjust your filters".to_string()
            }
            SpinnerError::InvalidWeight { .. } => {
                "Ratings must be whole stars between 1 and 5".to_string()
            }
            SpinnerError::RestaurantNotFound { .. } => {
                "Run `lunch-spinner list` to see the available ids".to_string()
            }
            SpinnerError::DuplicateId { .. } => {
                "Use a different id or edit the existing restaurant".to_string()
            }
            SpinnerError::IoError(_) => {
                "Check that the data directory exists and is writable".to_string()
            }
            SpinnerError::SerializationError(_) => {
                "The saved restaurant file may be corrupt; run `lunch-spinner reset`".to_string()
            }
            SpinnerError::ConfigError { .. }
            | SpinnerError::InvalidConfigValueError { .. }
            | SpinnerError::ConfigValidationError { .. } => {
                "Check the configuration file and command line flags".to_string()
            }
            SpinnerError::ValidationError { .. } => {
                "Fix the highlighted value and try again".to_string()
            }
            SpinnerError::InvalidGeometry { .. } => {
                "This is a bug, please report it with the command you ran".to_string()
            }
        }
    }

    /// Process exit code for the CLI. Low severity still counts as success.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            SpinnerError::EmptyInput => "No restaurants available".to_string(),
            SpinnerError::InvalidWeight { id, weight } => {
                format!("Restaurant '{}' has an invalid rating of {}", id, weight)
            }
            SpinnerError::RestaurantNotFound { id } => {
                format!("No restaurant with id '{}'", id)
            }
            SpinnerError::IoError(e) => format!("Could not access the restaurant file: {}", e),
            SpinnerError::SerializationError(_) => {
                "Could not read the saved restaurants".to_string()
            }
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_is_low_severity() {
        let err = SpinnerError::EmptyInput;
        assert_eq!(err.category(), ErrorCategory::Input);
        assert_eq!(err.severity(), ErrorSeverity::Low);
        assert_eq!(err.user_friendly_message(), "No restaurants available");
        assert_eq!(err.exit_code(), 0);
    }

    #[test]
    fn test_io_error_converts_into_storage_category() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: SpinnerError = io.into();
        assert_eq!(err.category(), ErrorCategory::Storage);
        assert_eq!(err.severity(), ErrorSeverity::Medium);
    }

    #[test]
    fn test_config_errors_are_high_severity() {
        let err = SpinnerError::InvalidConfigValueError {
            field: "wheel.min_revolutions".to_string(),
            value: "0".to_string(),
            reason: "Value must be at least 1".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert_eq!(err.exit_code(), 1);
        assert!(err.to_string().contains("wheel.min_revolutions"));
    }
}
