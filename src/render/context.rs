//! Rendering context construction.

use std::sync::Arc;

use axum::http::request::Parts;
use serde::Serialize;

use crate::config::GatewayConfig;
use crate::render::flags::FeatureFlags;
use crate::routing::RouteOverrides;

/// Request-derived fields feeding context construction.
///
/// Extracted once from the inbound request so the builder itself stays a
/// pure function over plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestedPage {
    /// Request scheme ("http" or "https").
    pub scheme: String,

    /// Authority as sent by the client, port included.
    pub authority: String,

    /// URL path.
    pub path: String,

    /// Raw query string, if any.
    pub query: Option<String>,
}

impl RequestedPage {
    /// Extract the page fields from request parts.
    ///
    /// The scheme honors `x-forwarded-proto` (the edge terminates TLS);
    /// the authority comes from the Host header.
    pub fn from_parts(parts: &Parts) -> Self {
        let scheme = parts
            .headers
            .get("x-forwarded-proto")
            .and_then(|v| v.to_str().ok())
            .unwrap_or("http")
            .to_string();

        let authority = parts
            .headers
            .get("host")
            .and_then(|v| v.to_str().ok())
            .or_else(|| parts.uri.authority().map(|a| a.as_str()))
            .unwrap_or("localhost")
            .to_string();

        Self {
            scheme,
            authority,
            path: parts.uri.path().to_string(),
            query: parts.uri.query().map(str::to_string),
        }
    }
}

/// The immutable data bundle handed to a template at render time.
///
/// Built once per request, dropped with the response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageContext {
    /// Full request URL.
    pub url: String,

    /// Hostname without the port.
    pub host: String,

    /// Scheme plus authority, e.g. "https://example.com:8443".
    pub host_url: String,

    /// Request path.
    pub path: String,

    /// Base URL for static asset references; empty in development.
    pub static_url: String,

    /// Development mode flag.
    pub dev: bool,

    /// Ads-suppression flag. True suppresses ads.
    pub noads: bool,

    /// The process-wide feature-flag registry.
    pub flags: FeatureFlags,
}

/// Builds a [`PageContext`] from a request and the process configuration.
#[derive(Debug, Clone)]
pub struct ContextBuilder {
    config: Arc<GatewayConfig>,
    flags: FeatureFlags,
}

impl ContextBuilder {
    pub fn new(config: Arc<GatewayConfig>, flags: FeatureFlags) -> Self {
        Self { config, flags }
    }

    /// Derive the context for one request.
    ///
    /// Pure: same page fields, same configuration, and same overrides
    /// always produce an identical context. `noads` resolves as route pin,
    /// else query value, else suppressed.
    pub fn build(
        &self,
        page: &RequestedPage,
        overrides: RouteOverrides,
        query_noads: Option<bool>,
    ) -> PageContext {
        let host_url = format!("{}://{}", page.scheme, page.authority);
        let url = match &page.query {
            Some(query) => format!("{}{}?{}", host_url, page.path, query),
            None => format!("{}{}", host_url, page.path),
        };
        let host = page
            .authority
            .rsplit_once(':')
            .map(|(name, _port)| name)
            .unwrap_or(&page.authority)
            .to_string();

        PageContext {
            url,
            host,
            host_url,
            path: page.path.clone(),
            static_url: self.config.static_url().to_string(),
            dev: self.config.dev,
            noads: overrides.noads.or(query_noads).unwrap_or(true),
            flags: self.flags,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> RequestedPage {
        RequestedPage {
            scheme: "https".into(),
            authority: "chess.example.com:8443".into(),
            path: "/versus/room/7".into(),
            query: Some("noads=false".into()),
        }
    }

    fn builder(dev: bool) -> ContextBuilder {
        let mut config = GatewayConfig::default();
        config.dev = dev;
        ContextBuilder::new(Arc::new(config), FeatureFlags::default())
    }

    #[test]
    fn derives_url_fields() {
        let ctx = builder(true).build(&page(), RouteOverrides::default(), None);
        assert_eq!(ctx.url, "https://chess.example.com:8443/versus/room/7?noads=false");
        assert_eq!(ctx.host, "chess.example.com");
        assert_eq!(ctx.host_url, "https://chess.example.com:8443");
        assert_eq!(ctx.path, "/versus/room/7");
        assert_eq!(ctx.static_url, "");
        assert!(ctx.dev);
    }

    #[test]
    fn deterministic_for_identical_inputs() {
        let builder = builder(false);
        let a = builder.build(&page(), RouteOverrides::default(), Some(false));
        let b = builder.build(&page(), RouteOverrides::default(), Some(false));
        assert_eq!(a, b);
    }

    #[test]
    fn noads_defaults_to_suppressed() {
        let ctx = builder(true).build(&page(), RouteOverrides::default(), None);
        assert!(ctx.noads);
    }

    #[test]
    fn query_overrides_default() {
        let ctx = builder(true).build(&page(), RouteOverrides::default(), Some(false));
        assert!(!ctx.noads);
    }

    #[test]
    fn route_pin_overrides_query() {
        let overrides = RouteOverrides { noads: Some(true) };
        let ctx = builder(true).build(&page(), overrides, Some(false));
        assert!(ctx.noads);
    }

    #[test]
    fn flags_are_carried_into_the_context() {
        let mut flags = FeatureFlags::default();
        flags.timed = false;
        let builder = ContextBuilder::new(Arc::new(GatewayConfig::default()), flags);
        let ctx = builder.build(&page(), RouteOverrides::default(), None);
        assert!(!ctx.flags.timed);
        assert!(ctx.flags.campaign);
    }

    #[test]
    fn static_url_follows_configuration() {
        let ctx = builder(false).build(&page(), RouteOverrides::default(), None);
        assert!(ctx.static_url.starts_with("https://"));
        assert!(!ctx.dev);
    }
}
