//! Route lookup and the site route registry.
//!
//! # Responsibilities
//! - Store compiled routes
//! - Look up the matching route for a request path
//! - Return matched route or explicit no-match
//!
//! # Design Decisions
//! - Immutable after construction (thread-safe without locks)
//! - O(n) ordered scan; first registered match wins
//! - Explicit no-match rather than silent default

use crate::routing::matcher::PathPattern;

/// What the dispatcher does with a matched route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteKind {
    /// Render the named template as HTML.
    Page { template: &'static str },

    /// Permanent redirect to a fixed location.
    Redirect { location: &'static str },

    /// Render the named template with an XML content type.
    Xml { template: &'static str },
}

/// Per-route context overrides.
///
/// A pinned value wins over the request query; the query wins over the
/// context defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RouteOverrides {
    /// Pin the ads-suppression flag regardless of the query string.
    pub noads: Option<bool>,
}

/// One registered route.
#[derive(Debug, Clone)]
pub struct RouteEntry {
    /// Identifier for logging and metrics.
    pub name: &'static str,

    /// Path pattern this entry matches.
    pub pattern: PathPattern,

    /// Handler kind executed on match.
    pub kind: RouteKind,

    /// Context overrides applied when building the rendering context.
    pub overrides: RouteOverrides,
}

/// Ordered, immutable set of routes.
#[derive(Debug, Default)]
pub struct RouteTable {
    entries: Vec<RouteEntry>,
}

impl RouteTable {
    pub fn builder() -> RouteTableBuilder {
        RouteTableBuilder {
            entries: Vec::new(),
        }
    }

    /// Find the first registered entry matching the path.
    pub fn match_path(&self, path: &str) -> Option<&RouteEntry> {
        self.entries.iter().find(|e| e.pattern.matches(path))
    }

    /// All registered entries, in registration order.
    pub fn entries(&self) -> &[RouteEntry] {
        &self.entries
    }
}

/// Builder collecting routes in registration order.
pub struct RouteTableBuilder {
    entries: Vec<RouteEntry>,
}

impl RouteTableBuilder {
    /// Register an exact-path page route.
    pub fn page(self, path: &'static str, template: &'static str) -> Self {
        self.page_with(path, template, RouteOverrides::default())
    }

    /// Register an exact-path page route with context overrides.
    pub fn page_with(
        mut self,
        path: &'static str,
        template: &'static str,
        overrides: RouteOverrides,
    ) -> Self {
        self.entries.push(RouteEntry {
            name: path,
            pattern: PathPattern::Exact(path),
            kind: RouteKind::Page { template },
            overrides,
        });
        self
    }

    /// Register a wildcard twin for a page route: the prefix itself and any
    /// deeper sub-path render the same template. Registered after the exact
    /// entry so the literal wins the tie.
    pub fn page_prefix(mut self, prefix: &'static str, template: &'static str) -> Self {
        self.entries.push(RouteEntry {
            name: prefix,
            pattern: PathPattern::Prefix(prefix),
            kind: RouteKind::Page { template },
            overrides: RouteOverrides::default(),
        });
        self
    }

    /// Register a permanent redirect.
    pub fn redirect(mut self, path: &'static str, location: &'static str) -> Self {
        self.entries.push(RouteEntry {
            name: path,
            pattern: PathPattern::Exact(path),
            kind: RouteKind::Redirect { location },
            overrides: RouteOverrides::default(),
        });
        self
    }

    /// Register an XML-rendered route.
    pub fn xml(mut self, path: &'static str, template: &'static str) -> Self {
        self.entries.push(RouteEntry {
            name: path,
            pattern: PathPattern::Exact(path),
            kind: RouteKind::Xml { template },
            overrides: RouteOverrides::default(),
        });
        self
    }

    pub fn build(self) -> RouteTable {
        RouteTable {
            entries: self.entries,
        }
    }
}

/// The public site routes.
///
/// Several paths intentionally share a template: the index shell hosts the
/// single-board modes, the versus shell hosts its own client-side
/// sub-routing (hence the wildcard twin).
pub fn site_routes() -> RouteTable {
    RouteTable::builder()
        .page("/", "index.html")
        .page("/tests", "tests.html")
        .page("/facebook", "index.html")
        .page("/contact", "contact.html")
        .page("/about", "about.html")
        .redirect("/privacy-policy", "/privacy")
        .page("/privacy", "privacy.html")
        .page("/terms", "terms.html")
        .page("/versus", "versus.html")
        .page_prefix("/versus", "versus.html")
        .page("/timed", "index.html")
        .page("/multiplayer", "versus.html")
        .page("/games-multiplayer", "index.html")
        .page_with(
            "/games",
            "index.html",
            RouteOverrides { noads: Some(true) },
        )
        .page("/play", "campaign.html")
        .xml("/sitemap", "sitemap.xml")
        .build()
}
