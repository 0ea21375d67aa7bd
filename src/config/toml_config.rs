use crate::core::engine::DEFAULT_CACHE_CAPACITY;
use crate::core::matcher::MatchMode;
use crate::utils::error::{PantryError, Result};
use crate::utils::validation::{
    validate_file_extension, validate_path, validate_range, validate_required_field, validate_url,
    Validate,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

pub const DEFAULT_PANTRY_PATH: &str = "./pantry.json";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub matching: MatchingConfig,
    #[serde(default)]
    pub pantry: PantryConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceType {
    #[default]
    Builtin,
    File,
    Http,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SourceConfig {
    #[serde(default)]
    pub r#type: SourceType,
    pub path: Option<String>,
    pub endpoint: Option<String>,
    pub timeout_seconds: Option<u64>,
    pub headers: Option<HashMap<String, String>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MatchingConfig {
    #[serde(default)]
    pub mode: MatchMode,
    #[serde(default)]
    pub cache: bool,
    /// 快取最多保留幾組食材清單的結果
    pub cache_capacity: Option<usize>,
}

impl MatchingConfig {
    pub fn cache_capacity(&self) -> usize {
        self.cache_capacity.unwrap_or(DEFAULT_CACHE_CAPACITY)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PantryConfig {
    pub path: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    #[serde(default)]
    pub format: LogFormat,
}

impl AppConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(PantryError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| PantryError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${CATALOG_TOKEN})，未設定的保留原字樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| PantryError::ConfigError {
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn pantry_path(&self) -> &str {
        self.pantry.path.as_deref().unwrap_or(DEFAULT_PANTRY_PATH)
    }

    pub fn headers(&self) -> HashMap<String, String> {
        self.source.headers.clone().unwrap_or_default()
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        match self.source.r#type {
            SourceType::Builtin => {}
            SourceType::File => {
                let path = validate_required_field("source.path", &self.source.path)?;
                validate_path("source.path", path)?;
                validate_file_extension("source.path", path, &["toml", "json"])?;
            }
            SourceType::Http => {
                let endpoint = validate_required_field("source.endpoint", &self.source.endpoint)?;
                validate_url("source.endpoint", endpoint)?;
            }
        }

        if let Some(timeout) = self.source.timeout_seconds {
            validate_range("source.timeout_seconds", timeout, 1, 300)?;
        }

        if let Some(capacity) = self.matching.cache_capacity {
            validate_range("matching.cache_capacity", capacity, 1, 100_000)?;
        }

        validate_path("pantry.path", self.pantry_path())?;

        if let Some(level) = &self.logging.level {
            let valid_levels = ["trace", "debug", "info", "warn", "error"];
            if !valid_levels.contains(&level.to_lowercase().as_str()) {
                return Err(PantryError::InvalidConfigValueError {
                    field: "logging.level".to_string(),
                    value: level.clone(),
                    reason: format!("Valid levels: {}", valid_levels.join(", ")),
                });
            }
        }

        Ok(())
    }
}
