//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the gateway.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the gateway.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct GatewayConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Static asset directories.
    pub assets: AssetConfig,

    /// Template directory.
    pub templates: TemplateConfig,

    /// CDN origin for non-development asset URLs.
    pub cdn: CdnConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,

    /// Development mode. Sourced from the DEV environment variable at load
    /// time; the file cannot set it.
    #[serde(skip)]
    pub dev: bool,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            listener: ListenerConfig::default(),
            timeouts: TimeoutConfig::default(),
            assets: AssetConfig::default(),
            templates: TemplateConfig::default(),
            cdn: CdnConfig::default(),
            observability: ObservabilityConfig::default(),
            dev: true,
        }
    }
}

impl GatewayConfig {
    /// Base URL prepended to static asset references in rendered pages.
    ///
    /// Empty in development (assets come from this process), the CDN origin
    /// otherwise. Fixed for the process lifetime.
    pub fn static_url(&self) -> &str {
        if self.dev {
            ""
        } else {
            &self.cdn.static_origin
        }
    }
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
        }
    }
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Request timeout (total time for request/response) in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

/// Static asset directories, one per mounted namespace.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AssetConfig {
    /// Primary site assets, served under /static.
    pub site_dir: String,

    /// Game-subsystem assets, served under /gameon/static.
    pub game_dir: String,

    /// Transient assets, served under /transient. Read-only from the
    /// gateway's perspective; populated out-of-process.
    pub transient_dir: String,
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            site_dir: "static".to_string(),
            game_dir: "gameon/static".to_string(),
            transient_dir: "transient".to_string(),
        }
    }
}

/// Template directory configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TemplateConfig {
    /// Directory holding the page templates.
    pub dir: String,
}

impl Default for TemplateConfig {
    fn default() -> Self {
        Self {
            dir: "templates".to_string(),
        }
    }
}

/// CDN configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct CdnConfig {
    /// Absolute origin that serves the static namespaces outside
    /// development.
    pub static_origin: String,
}

impl Default for CdnConfig {
    fn default() -> Self {
        Self {
            static_origin: "https://bigmultiplayerchessstatic.bigmultiplayerchess.com".to_string(),
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_url_empty_in_dev() {
        let config = GatewayConfig::default();
        assert!(config.dev);
        assert_eq!(config.static_url(), "");
    }

    #[test]
    fn static_url_is_cdn_origin_outside_dev() {
        let mut config = GatewayConfig::default();
        config.dev = false;
        assert_eq!(config.static_url(), config.cdn.static_origin);
    }
}
