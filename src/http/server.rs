//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum router with page dispatch, static mounts, and the
//!   externally-owned subsystem mounts
//! - Wire up middleware (tracing, timeout, request ID)
//! - Dispatch page requests through the route table
//! - Record per-page metrics

use std::path::Path;
use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::body::Body;
use axum::extract::State;
use axum::http::request::Parts;
use axum::http::{header, HeaderValue, Request, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::services::ServeDir;
use tower_http::set_header::{SetResponseHeader, SetResponseHeaderLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::GatewayConfig;
use crate::http::request::{propagate_request_id_layer, set_request_id_layer};
use crate::http::response::Xml;
use crate::observability::metrics;
use crate::render::{ContextBuilder, FeatureFlags, RequestedPage, SharedBindings, TemplateEngine};
use crate::routing::{site_routes, RouteEntry, RouteKind, RouteTable};
use crate::upstream::{Subsystems, GAME_API_PREFIX, LIVE_CHANNEL_PREFIX};

/// URL prefix for the primary site assets.
pub const STATIC_PREFIX: &str = "/static";

/// URL prefix for the game-subsystem assets.
pub const GAME_STATIC_PREFIX: &str = "/gameon/static";

/// URL prefix for the transient assets.
pub const TRANSIENT_PREFIX: &str = "/transient";

/// Application state injected into the dispatch handler.
#[derive(Clone)]
pub struct AppState {
    pub routes: Arc<RouteTable>,
    pub context: ContextBuilder,
    pub templates: Arc<TemplateEngine>,
}

/// HTTP server for the gateway.
pub struct HttpServer {
    router: Router,
    config: Arc<GatewayConfig>,
}

impl HttpServer {
    /// Assemble the server from configuration and the injected subsystems.
    pub fn new(config: Arc<GatewayConfig>, subsystems: Subsystems) -> Self {
        let bindings = SharedBindings::new();
        let templates = Arc::new(TemplateEngine::new(
            Path::new(&config.templates.dir),
            &bindings,
        ));

        let state = AppState {
            routes: Arc::new(site_routes()),
            context: ContextBuilder::new(config.clone(), FeatureFlags::from_env()),
            templates,
        };

        let router = Self::build_router(&config, state, subsystems);
        Self { router, config }
    }

    /// Build the Axum router with all mounts and middleware layers.
    fn build_router(config: &GatewayConfig, state: AppState, subsystems: Subsystems) -> Router {
        // Page routes go through the dispatch table; the request timeout
        // applies here but not to the mounted subsystems (the live channel
        // holds connections open).
        let pages = Router::new()
            .route("/", get(dispatch))
            .route("/{*path}", get(dispatch))
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.timeouts.request_secs,
            )))
            .with_state(state);

        pages
            .nest_service(STATIC_PREFIX, asset_service(&config.assets.site_dir))
            .nest_service(GAME_STATIC_PREFIX, asset_service(&config.assets.game_dir))
            .nest_service(TRANSIENT_PREFIX, asset_service(&config.assets.transient_dir))
            .nest(GAME_API_PREFIX, subsystems.game_api)
            .nest(LIVE_CHANNEL_PREFIX, subsystems.live_channel)
            .layer(propagate_request_id_layer())
            .layer(TraceLayer::new_for_http())
            .layer(set_request_id_layer())
    }

    /// Run the server on the given listener until shutdown is signaled.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, dev = self.config.dev, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }
}

/// Read-only static file service with long-lived cache headers.
///
/// `ServeDir` resolves strictly within its root; traversal components are
/// rejected before touching the filesystem. Missing files are a plain 404
/// with no fallback.
fn asset_service(dir: &str) -> SetResponseHeader<ServeDir, HeaderValue> {
    ServiceBuilder::new()
        .layer(SetResponseHeaderLayer::if_not_present(
            header::CACHE_CONTROL,
            HeaderValue::from_static("public, max-age=31536000, immutable"),
        ))
        .service(ServeDir::new(dir))
}

/// Page dispatch handler: route table match, then render or redirect.
async fn dispatch(State(state): State<AppState>, request: Request<Body>) -> Response {
    let start = Instant::now();
    let (parts, _body) = request.into_parts();
    let path = parts.uri.path().to_string();

    let Some(route) = state.routes.match_path(&path) else {
        tracing::debug!(path = %path, "no route matched");
        metrics::record_page_request(parts.method.as_str(), 404, "none", start);
        return (StatusCode::NOT_FOUND, "page not found").into_response();
    };

    let response = match &route.kind {
        RouteKind::Redirect { location } => (
            StatusCode::MOVED_PERMANENTLY,
            [(header::LOCATION, *location)],
        )
            .into_response(),
        RouteKind::Page { template } => render_page(&state, &parts, route, template, false),
        RouteKind::Xml { template } => render_page(&state, &parts, route, template, true),
    };

    metrics::record_page_request(
        parts.method.as_str(),
        response.status().as_u16(),
        route.name,
        start,
    );
    response
}

/// Build the context and render the route's template.
fn render_page(
    state: &AppState,
    parts: &Parts,
    route: &RouteEntry,
    template: &str,
    xml: bool,
) -> Response {
    let page = RequestedPage::from_parts(parts);
    let query_noads = parse_noads(parts.uri.query());
    let context = state.context.build(&page, route.overrides, query_noads);

    match state.templates.render(template, &context) {
        Ok(body) if xml => Xml(body).into_response(),
        Ok(body) => Html(body).into_response(),
        Err(e) => {
            tracing::error!(
                route = route.name,
                template = template,
                error = %e,
                "template render failed"
            );
            e.into_response()
        }
    }
}

/// Extract the `noads` query flag, if present and well-formed.
fn parse_noads(query: Option<&str>) -> Option<bool> {
    let query = query?;
    for pair in query.split('&') {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        if key == "noads" {
            return parse_bool(value);
        }
    }
    None
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
