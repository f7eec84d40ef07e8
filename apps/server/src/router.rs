use axum::Router;
use tower_http::trace::TraceLayer;

/// The complete application: statistics form, system routes and request tracing.
pub fn init() -> Router {
    primer::server::router().layer(TraceLayer::new_for_http())
}
