pub mod extract;
pub mod handlers;
pub mod models;
pub mod openapi;

use crate::core::services::PostboardService;
use crate::infrastructure::storage::Storage;
use axum::{Router, http::header, routing::get};
use http::Method;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Full application: API routes, health check, OpenAPI docs and the
/// tower-http middleware stack.
pub fn build_app<S: Storage + 'static>(service: Arc<PostboardService<S>>, request_timeout: Duration) -> Router {
    Router::new()
        .route("/", get(|| async { "OK" }))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi::ApiDoc::openapi()))
        .merge(handlers::api_routes(service))
        .layer(CompressionLayer::new()) // Gzip compression
        .layer(TimeoutLayer::new(request_timeout))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
                .allow_headers([header::CONTENT_TYPE]),
        )
        .layer(TraceLayer::new_for_http()) // Request tracing
}
