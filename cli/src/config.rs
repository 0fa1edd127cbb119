//! CLI configuration.

use ratepath_fx::ConverterConfig;

/// Settings for the `ratepath` binary.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Converter configuration.
    pub converter: ConverterConfig,
    /// Log level, used when `RUST_LOG` is unset.
    pub log_level: String,
    /// Emit logs as JSON.
    pub json_logs: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            converter: ConverterConfig::default(),
            log_level: "info".to_string(),
            json_logs: false,
        }
    }
}

impl CliConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let mut config = Self {
            converter: ConverterConfig::from_env(),
            ..Self::default()
        };

        if let Ok(level) = std::env::var("LOG_LEVEL") {
            config.log_level = level;
        }

        config.json_logs = std::env::var_os("RATEPATH_LOG_JSON").is_some();

        config
    }

    /// Validate configuration.
    pub fn validate(&self) -> Result<(), String> {
        self.converter.validate()?;

        if self.log_level.is_empty() {
            return Err("Log level cannot be empty".to_string());
        }

        Ok(())
    }
}
