//! Response construction.

use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};

use crate::render::RenderError;

/// An XML response body (sitemap-style routes).
#[derive(Debug, Clone)]
pub struct Xml(pub String);

impl IntoResponse for Xml {
    fn into_response(self) -> Response {
        (
            [(
                header::CONTENT_TYPE,
                HeaderValue::from_static("text/xml; charset=utf-8"),
            )],
            self.0,
        )
            .into_response()
    }
}

impl IntoResponse for RenderError {
    fn into_response(self) -> Response {
        // Render failures are server errors; the cause is logged at the
        // dispatch site, the client gets no template detail.
        (StatusCode::INTERNAL_SERVER_ERROR, "page render failed").into_response()
    }
}
