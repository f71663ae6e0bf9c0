//! Preview server
//!
//! HTTP layer built with Axum. Every request loads the feed again; nothing
//! is cached between requests.
//!
//! # Endpoints
//!
//! ## Page
//! - `GET /` - Rendered page (502 with the error page when the feed fails)
//!
//! ## Data
//! - `GET /api/v1/feed` - Raw feed document
//! - `GET /api/v1/normas?etiqueta=<token>` - Filtered entries
//! - `GET /api/v1/filtros` - Grouped filter buttons
//! - `GET /api/v1/dashboard` - Dashboard view-model
//!
//! ## Health
//! - `GET /health/live` - Liveness probe
//! - `GET /health` - Status
//!
//! # Example
//!
//! ```rust,ignore
//! use boletin::api::{serve, AppState};
//! use boletin::config::Config;
//! use boletin::source::HttpFeedSource;
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load_default();
//!     let source = HttpFeedSource::new(&config.feed.url, Duration::from_secs(15))?;
//!     serve(AppState::new(Arc::new(source), &config)).await?;
//!     Ok(())
//! }
//! ```

pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::AppState;

use axum::{
    http::{HeaderValue, Method},
    routing::get,
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Build the router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/feed", get(routes::feed::get_feed))
        .route("/normas", get(routes::feed::list_normas))
        .route("/filtros", get(routes::feed::list_filtros))
        .route("/dashboard", get(routes::feed::get_dashboard));

    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/", get(routes::health::full_health));

    let cors = cors_layer(&state.config.cors_origins);
    let shared_state = Arc::new(state);

    Router::new()
        .route("/", get(routes::page::index))
        .nest("/api/v1", api_routes)
        .nest("/health", health_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(shared_state)
}

/// Any origin when none are configured, otherwise only the listed ones
fn cors_layer(origins: &[String]) -> CorsLayer {
    if origins.is_empty() {
        return CorsLayer::permissive();
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin {:?}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(allowed)
        .allow_methods([Method::GET])
}

/// Start the preview server
pub async fn serve(state: AppState) -> Result<(), ApiError> {
    let addr = state.config.addr();
    let router = build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Boletín preview listening on http://{}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("Boletín preview shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::feed::{Feed, FeedError, FeedResult, LOAD_ERROR_MESSAGE};
    use crate::source::{FeedSource, StaticFeedSource};
    use async_trait::async_trait;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
        response::Response,
    };
    use tower::util::ServiceExt;

    const FEED: &str = r#"{
        "fecha": "2025-09-05",
        "estadisticas": {
            "totalNormas": 2,
            "desgloseTipos": { "DECRETO": 10, "RESOLUCION": 5 },
            "desgloseEtiquetas": { "Salud": 1, "Empleo": 1 }
        },
        "normas": [
            { "titulo": "Decreto 1/2025", "etiquetas": ["Salud"] },
            { "titulo": "Resolución 2/2025", "etiquetas": ["Empleo"] }
        ]
    }"#;

    struct UnavailableSource;

    #[async_trait]
    impl FeedSource for UnavailableSource {
        fn describe(&self) -> String {
            "unavailable".to_string()
        }

        async fn fetch(&self) -> FeedResult<Feed> {
            Err(FeedError::Status(404))
        }
    }

    fn create_test_app() -> Router {
        let feed = Feed::from_json(FEED).unwrap();
        let state = AppState::new(Arc::new(StaticFeedSource::new(feed)), &Config::default());
        build_router(state)
    }

    fn create_failing_app() -> Router {
        build_router(AppState::new(Arc::new(UnavailableSource), &Config::default()))
    }

    async fn get(app: Router, uri: &str) -> Response {
        app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn body_text(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    async fn body_json(response: Response) -> serde_json::Value {
        serde_json::from_str(&body_text(response).await).unwrap()
    }

    #[tokio::test]
    async fn test_health_live() {
        let response = get(create_test_app(), "/health/live").await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_full() {
        let response = get(create_test_app(), "/health").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["feed_source"], "static feed");
    }

    #[tokio::test]
    async fn test_index_renders_page() {
        let response = get(create_test_app(), "/").await;
        assert_eq!(response.status(), StatusCode::OK);

        let html = body_text(response).await;
        assert_eq!(html.matches(r#"class="norma-card"#).count(), 2);
        assert!(html.contains("5 sept 2025"));
    }

    #[tokio::test]
    async fn test_index_failure_is_bad_gateway_without_cards() {
        let response = get(create_failing_app(), "/").await;
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

        let html = body_text(response).await;
        assert!(html.contains(LOAD_ERROR_MESSAGE));
        assert!(!html.contains(r#"class="norma-card"#));
    }

    #[tokio::test]
    async fn test_normas_filtered_by_tag() {
        let response = get(create_test_app(), "/api/v1/normas?etiqueta=salud").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["filtro"], "salud");
        assert_eq!(body["total"], 2);
        assert_eq!(body["visible"], 1);
        assert_eq!(body["normas"][0]["titulo"], "Decreto 1/2025");
        assert_eq!(body["normas"][0]["etiquetas"][0], "salud");
    }

    #[tokio::test]
    async fn test_normas_without_filter_lists_all() {
        let body = body_json(get(create_test_app(), "/api/v1/normas").await).await;
        assert_eq!(body["filtro"], "all");
        assert_eq!(body["visible"], 2);
    }

    #[tokio::test]
    async fn test_filtros_grouped() {
        let response = get(create_test_app(), "/api/v1/filtros").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        let groups = body.as_array().unwrap();
        assert!(!groups.is_empty());
        assert!(groups
            .iter()
            .flat_map(|g| g["buttons"].as_array().unwrap())
            .any(|b| b["token"] == "salud"));
    }

    #[tokio::test]
    async fn test_dashboard_bars() {
        let body = body_json(get(create_test_app(), "/api/v1/dashboard").await).await;
        let bars = body["tipo_bars"].as_array().unwrap();
        assert_eq!(bars[0]["count"], 10);
        assert_eq!(bars[1]["ratio_percent"], 50.0);
    }

    #[tokio::test]
    async fn test_feed_failure_is_json_error() {
        let response = get(create_failing_app(), "/api/v1/feed").await;
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

        let body = body_json(response).await;
        assert_eq!(body["error"]["message"], LOAD_ERROR_MESSAGE);
    }
}
