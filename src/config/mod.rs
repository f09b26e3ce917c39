//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `AI_TEACHER` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use ai_teacher::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Coach online: {}", config.ai.has_credential());
//! ```

mod ai;
mod error;
mod logging;

pub use ai::AiConfig;
pub use error::{ConfigError, ValidationError};
pub use logging::{LogFormat, LoggingConfig};

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a working
/// offline configuration. Load using [`AppConfig::load()`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Coach completion provider (Gemini)
    #[serde(default)]
    pub ai: AiConfig,

    /// Log filter and output format
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `AI_TEACHER` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `AI_TEACHER__AI__GEMINI_API_KEY=...` -> `ai.gemini_api_key = ...`
    /// - `AI_TEACHER__LOGGING__FORMAT=json` -> `logging.format = json`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("AI_TEACHER")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Load and validate in one step
    pub fn load_validated() -> Result<Self, ConfigError> {
        let config = Self::load()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` for a bad URL scheme, an out-of-range
    /// timeout or an unparseable log filter.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.ai.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: [&str; 7] = [
        "AI_TEACHER__AI__GEMINI_API_KEY",
        "AI_TEACHER__AI__MODEL",
        "AI_TEACHER__AI__BASE_URL",
        "AI_TEACHER__AI__TIMEOUT_SECS",
        "AI_TEACHER__AI__MAX_OUTPUT_TOKENS",
        "AI_TEACHER__LOGGING__LEVEL",
        "AI_TEACHER__LOGGING__FORMAT",
    ];

    /// Helper to clear environment variables after testing
    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_empty_environment_uses_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert!(!config.ai.has_credential());
        assert_eq!(config.ai.model, "gemini-2.5-flash");
        assert_eq!(config.logging.format, LogFormat::Pretty);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("AI_TEACHER__AI__GEMINI_API_KEY", "AIza-test");
        env::set_var("AI_TEACHER__AI__MODEL", "gemini-2.0-flash");
        env::set_var("AI_TEACHER__AI__TIMEOUT_SECS", "45");
        env::set_var("AI_TEACHER__LOGGING__FORMAT", "json");
        env::set_var("AI_TEACHER__LOGGING__LEVEL", "debug");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(config.ai.has_credential());
        assert_eq!(
            config.ai.gemini_api_key.as_ref().map(|k| k.expose_secret().as_str()),
            Some("AIza-test")
        );
        assert_eq!(config.ai.model, "gemini-2.0-flash");
        assert_eq!(config.ai.timeout_secs, 45);
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_load_validated_rejects_bad_timeout() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("AI_TEACHER__AI__TIMEOUT_SECS", "0");
        let result = AppConfig::load_validated();
        clear_env();

        assert!(matches!(
            result,
            Err(ConfigError::ValidationFailed(ValidationError::InvalidTimeout))
        ));
    }

    #[test]
    fn test_unparseable_value_is_load_error() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("AI_TEACHER__AI__TIMEOUT_SECS", "soon");
        let result = AppConfig::load();
        clear_env();

        assert!(matches!(result, Err(ConfigError::LoadError(_))));
    }

    #[test]
    fn test_validate_checks_logging() {
        let config = AppConfig {
            logging: LoggingConfig {
                level: "ai_teacher=loud".to_string(),
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidLogFilter(_))
        ));
    }
}
