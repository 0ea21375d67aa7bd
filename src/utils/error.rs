use thiserror::Error;

#[derive(Error, Debug)]
pub enum PantryError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Catalog endpoint {url} returned status {status}")]
    UpstreamStatusError { url: String, status: u16 },

    #[error("CSV output error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Catalog error: {message}")]
    CatalogError { message: String },

    #[error("Validation error: {message}")]
    ValidationError { message: String },

    #[error("Recipe not found: {key}")]
    RecipeNotFound { key: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Configuration,
    Data,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    /// CLI 結束碼
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorSeverity::Low => 0,      // 警告，但成功
            ErrorSeverity::Medium => 2,   // 可重試
            ErrorSeverity::High => 1,     // 處理錯誤
            ErrorSeverity::Critical => 3, // 系統錯誤
        }
    }
}

impl PantryError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            PantryError::ApiError(_) | PantryError::UpstreamStatusError { .. } => {
                ErrorCategory::Network
            }
            PantryError::ConfigError { .. }
            | PantryError::ConfigValidationError { .. }
            | PantryError::InvalidConfigValueError { .. }
            | PantryError::MissingConfigError { .. } => ErrorCategory::Configuration,
            PantryError::CsvError(_)
            | PantryError::SerializationError(_)
            | PantryError::CatalogError { .. }
            | PantryError::ValidationError { .. }
            | PantryError::RecipeNotFound { .. } => ErrorCategory::Data,
            PantryError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            PantryError::ApiError(_) | PantryError::UpstreamStatusError { .. } => {
                ErrorSeverity::Medium
            }
            PantryError::IoError(_) => ErrorSeverity::Critical,
            _ => ErrorSeverity::High,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Network => {
                "Check the catalog endpoint and your network connection, then retry"
            }
            ErrorCategory::Configuration => {
                "Review the config file and command line flags for typos or missing values"
            }
            ErrorCategory::Data => {
                "Check that the catalog or pantry file is well formed and recipe ids are unique"
            }
            ErrorCategory::System => "Check file permissions and available disk space",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            PantryError::ApiError(_) | PantryError::UpstreamStatusError { .. } => {
                format!("Could not reach the recipe catalog ({})", self)
            }
            PantryError::MissingConfigError { field } => {
                format!("Missing setting '{}'", field)
            }
            PantryError::CatalogError { message } => {
                format!("The recipe catalog is invalid: {}", message)
            }
            PantryError::RecipeNotFound { key } => format!("No recipe with {}", key),
            _ => self.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, PantryError>;
