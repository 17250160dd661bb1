//! Runtime configuration
//!
//! Read once from the environment at startup.

use thiserror::Error;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::EnvFilter;

use crate::conversion::{ConversionError, ConversionService, UnitPair};

/// Tracing filter directive
pub const LOG_ENV: &str = "UNITS_CONVERTER_LOG";
/// Unit pair selected when a session starts
pub const DEFAULT_PAIR_ENV: &str = "UNITS_CONVERTER_DEFAULT_PAIR";

/// Filter used when `UNITS_CONVERTER_LOG` is not set
pub const DEFAULT_LOG_DIRECTIVE: &str = "units_converter=info";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("UNITS_CONVERTER_DEFAULT_PAIR: {0}")]
    DefaultPair(#[from] ConversionError),

    #[error("UNITS_CONVERTER_LOG: {0}")]
    LogDirective(#[from] ParseError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub log_directive: String,
    pub default_pair: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_directive: DEFAULT_LOG_DIRECTIVE.to_string(),
            default_pair: None,
        }
    }
}

impl Config {
    /// Load configuration from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            log_directive: non_empty(LOG_ENV).unwrap_or_else(|| DEFAULT_LOG_DIRECTIVE.to_string()),
            default_pair: non_empty(DEFAULT_PAIR_ENV),
        }
    }

    /// Tracing filter: `RUST_LOG` plus the configured directive
    ///
    /// A directive that does not parse is an error rather than being dropped.
    pub fn env_filter(&self) -> Result<EnvFilter, ConfigError> {
        Ok(EnvFilter::from_default_env().add_directive(self.log_directive.parse()?))
    }

    /// Resolve the configured starting pair, falling back to the registry default
    pub fn initial_pair(
        &self,
        service: &ConversionService,
    ) -> Result<&'static UnitPair, ConfigError> {
        match &self.default_pair {
            Some(id) => Ok(service.resolve_unit_pair(id)?),
            None => Ok(service.default_pair()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup(&[]));
        assert_eq!(config, Config::default());
        assert_eq!(config.log_directive, "units_converter=info");
    }

    #[test]
    fn test_reads_variables() {
        let config = Config::from_lookup(lookup(&[
            (LOG_ENV, "units_converter=debug"),
            (DEFAULT_PAIR_ENV, "lb to kg"),
        ]));
        assert_eq!(config.log_directive, "units_converter=debug");
        assert_eq!(config.default_pair.as_deref(), Some("lb to kg"));
    }

    #[test]
    fn test_blank_values_ignored() {
        let config = Config::from_lookup(lookup(&[(LOG_ENV, "  "), (DEFAULT_PAIR_ENV, "")]));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_env_filter() {
        assert!(Config::default().env_filter().is_ok());

        let config = Config {
            log_directive: "units_converter=loudest".to_string(),
            ..Config::default()
        };
        assert!(matches!(
            config.env_filter(),
            Err(ConfigError::LogDirective(_))
        ));
    }

    #[test]
    fn test_initial_pair() {
        let service = ConversionService::new().unwrap();

        let config = Config::default();
        assert_eq!(config.initial_pair(&service).unwrap().id, "in to cm");

        let config = Config {
            default_pair: Some("ft to in".to_string()),
            ..Config::default()
        };
        assert_eq!(config.initial_pair(&service).unwrap().id, "ft to in");

        let config = Config {
            default_pair: Some("mi to km".to_string()),
            ..Config::default()
        };
        assert!(matches!(
            config.initial_pair(&service),
            Err(ConfigError::DefaultPair(ConversionError::UnknownUnitPair(_)))
        ));
    }
}
