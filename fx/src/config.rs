//! Converter configuration.

use ratepath_common::{DEFAULT_ROUNDING_PLACES, MAX_ROUNDING_PLACES};

/// Configuration for the rate graph converter.
#[derive(Debug, Clone)]
pub struct ConverterConfig {
    /// Decimal places the running amount is rounded to after every hop.
    pub rounding_places: u32,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            rounding_places: DEFAULT_ROUNDING_PLACES,
        }
    }
}

impl ConverterConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(places) = std::env::var("RATEPATH_ROUNDING_PLACES") {
            if let Ok(places) = places.parse() {
                config.rounding_places = places;
            }
        }

        config
    }

    /// Validate configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.rounding_places > MAX_ROUNDING_PLACES {
            return Err(format!(
                "Rounding places cannot exceed {}",
                MAX_ROUNDING_PLACES
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ConverterConfig::default();
        assert_eq!(config.rounding_places, 4);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_config() {
        let config = ConverterConfig {
            rounding_places: 16,
        };
        assert!(config.validate().is_err());

        let config = ConverterConfig {
            rounding_places: MAX_ROUNDING_PLACES,
        };
        assert!(config.validate().is_ok());
    }
}
