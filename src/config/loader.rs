//! Configuration loading from disk and environment.

use std::path::Path;

use crate::config::schema::GatewayConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", format_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn format_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load and validate configuration.
///
/// Reads the TOML file when a path is given, falls back to defaults
/// otherwise, then overlays the DEV environment flag and validates.
pub fn load_config(path: Option<&Path>) -> Result<GatewayConfig, ConfigError> {
    let mut config = match path {
        Some(p) => {
            let content = std::fs::read_to_string(p)?;
            toml::from_str(&content)?
        }
        None => GatewayConfig::default(),
    };

    config.dev = parse_dev_flag(std::env::var("DEV").ok().as_deref());

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Interpret the DEV environment value. Absent means development: the
/// production deployment is the one that has to opt out explicitly.
fn parse_dev_flag(raw: Option<&str>) -> bool {
    match raw {
        Some(value) => value.eq_ignore_ascii_case("true"),
        None => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dev_flag_defaults_to_true() {
        assert!(parse_dev_flag(None));
    }

    #[test]
    fn dev_flag_only_accepts_true() {
        assert!(parse_dev_flag(Some("true")));
        assert!(parse_dev_flag(Some("TRUE")));
        assert!(!parse_dev_flag(Some("false")));
        assert!(!parse_dev_flag(Some("1")));
        assert!(!parse_dev_flag(Some("")));
    }

    #[test]
    fn parses_partial_file() {
        let config: GatewayConfig =
            toml::from_str("[listener]\nbind_address = \"127.0.0.1:9000\"\n").unwrap();
        assert_eq!(config.listener.bind_address, "127.0.0.1:9000");
        assert_eq!(config.templates.dir, "templates");
    }
}
