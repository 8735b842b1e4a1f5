use thiserror::Error;

#[derive(Error, Debug)]
pub enum EtlError {
    #[error("HTTP request to {url} failed: {source}")]
    FetchError {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to parse response from {url}: {message}")]
    ParseError { url: String, message: String },

    #[error("Price text {text:?} does not reduce to an integer")]
    ConversionError { text: String },

    #[error("Description {text:?} is too short to contain a year")]
    ExtractionError { text: String },

    #[error("Failed to create worksheet '{sheet}': {source}")]
    SheetCreationError {
        sheet: String,
        #[source]
        source: rust_xlsxwriter::XlsxError,
    },

    #[error("Failed to export spreadsheet to {path}: {message}")]
    ExportError { path: String, message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Parsing,
    Data,
    Export,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    /// Affects a single card; the page keeps going.
    Low,
    Medium,
    High,
    Critical,
}

impl EtlError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            EtlError::FetchError { .. } => ErrorCategory::Network,
            EtlError::ParseError { .. } => ErrorCategory::Parsing,
            EtlError::ConversionError { .. } | EtlError::ExtractionError { .. } => {
                ErrorCategory::Data
            }
            EtlError::SheetCreationError { .. } | EtlError::ExportError { .. } => {
                ErrorCategory::Export
            }
            EtlError::IoError(_) => ErrorCategory::System,
            EtlError::ConfigError { .. }
            | EtlError::InvalidConfigValueError { .. }
            | EtlError::MissingConfigError { .. }
            | EtlError::ConfigValidationError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            EtlError::ConversionError { .. } | EtlError::ExtractionError { .. } => {
                ErrorSeverity::Low
            }
            EtlError::FetchError { .. } | EtlError::ParseError { .. } => ErrorSeverity::Medium,
            EtlError::SheetCreationError { .. }
            | EtlError::ExportError { .. }
            | EtlError::ConfigError { .. }
            | EtlError::InvalidConfigValueError { .. }
            | EtlError::MissingConfigError { .. }
            | EtlError::ConfigValidationError { .. } => ErrorSeverity::High,
            EtlError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    /// 只有單一卡片層級的錯誤可以在本地恢復
    pub fn is_recoverable(&self) -> bool {
        self.severity() == ErrorSeverity::Low
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            EtlError::FetchError { url, .. } => {
                format!("Error making HTTP request to {}", url)
            }
            EtlError::ParseError { url, .. } => format!("Error parsing HTML from {}", url),
            EtlError::ConversionError { text } => {
                format!("Error converting price to integer: {:?}", text)
            }
            EtlError::ExtractionError { text } => {
                format!("Error extracting year from description: {:?}", text)
            }
            EtlError::SheetCreationError { sheet, .. } => {
                format!("Error creating Excel sheet '{}'", sheet)
            }
            EtlError::ExportError { path, .. } => format!("Error saving Excel file {}", path),
            EtlError::IoError(e) => format!("System I/O error: {}", e),
            EtlError::ConfigError { message } => format!("Invalid configuration: {}", message),
            EtlError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid configuration for '{}': {}", field, reason)
            }
            EtlError::MissingConfigError { field } => {
                format!("Missing configuration value '{}'", field)
            }
            EtlError::ConfigValidationError { field, message } => {
                format!("Configuration problem in '{}': {}", field, message)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Network => {
                "Check network connectivity and the base URL, or raise --request-timeout"
            }
            ErrorCategory::Parsing => "The listing site may have returned an unreadable body; try again later",
            ErrorCategory::Data => "The card was skipped; check the selectors if many cards are skipped",
            ErrorCategory::Export => "Check that the output path is writable and the disk is not full",
            ErrorCategory::Configuration => "Fix the configuration value and run again",
            ErrorCategory::System => "Check file permissions and available disk space",
        }
    }
}

pub type Result<T> = std::result::Result<T, EtlError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_level_errors_are_recoverable() {
        let conversion = EtlError::ConversionError {
            text: "n/a".to_string(),
        };
        let extraction = EtlError::ExtractionError {
            text: "20".to_string(),
        };

        assert!(conversion.is_recoverable());
        assert!(extraction.is_recoverable());
        assert_eq!(conversion.category(), ErrorCategory::Data);
    }

    #[test]
    fn test_export_errors_are_fatal() {
        let err = EtlError::ExportError {
            path: "prices_sorted.xlsx".to_string(),
            message: "permission denied".to_string(),
        };

        assert!(!err.is_recoverable());
        assert_eq!(err.category(), ErrorCategory::Export);
        assert!(err.user_friendly_message().contains("prices_sorted.xlsx"));
    }
}
