use super::health;
use axum::Router;
use axum::routing::get;
use std::sync::LazyLock;

/// Routes every service exposes regardless of its feature set (`GET /health`).
pub fn system_router<S>() -> Router<S>
where
    S: Send + Sync + Clone + 'static,
{
    LazyLock::force(&health::START_TIME);
    Router::new().route("/health", get(health::health_handler))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode, header};
    use tower::ServiceExt;

    #[tokio::test]
    async fn health_reports_up_without_caching() {
        let app: Router = system_router();

        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CACHE_CONTROL).unwrap(),
            "no-store, no-cache, must-revalidate"
        );

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["status"], "up");
        assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
        assert!(json["uptime"].is_u64());
    }
}
