//! Application configuration

use serde::Deserialize;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Log level
    pub log_level: String,
    /// Default currency code for seeded amounts
    pub currency: String,
    /// Display name attributed to writes from this process
    pub operator_name: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            currency: "XOF".to_string(),
            operator_name: "system".to_string(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::Environment::with_prefix("MUTUELLE"))
            .build()?
            .try_deserialize()
    }

    /// Loads from environment, falling back to defaults field by field
    pub fn load() -> Self {
        Self::from_env().unwrap_or_else(|_| Self {
            log_level: std::env::var("MUTUELLE_LOG_LEVEL")
                .or_else(|_| std::env::var("RUST_LOG"))
                .unwrap_or_else(|_| "info".to_string()),
            currency: std::env::var("MUTUELLE_CURRENCY").unwrap_or_else(|_| "XOF".to_string()),
            operator_name: std::env::var("MUTUELLE_OPERATOR_NAME")
                .unwrap_or_else(|_| "system".to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.log_level, "info");
        assert_eq!(config.currency, "XOF");
    }
}
