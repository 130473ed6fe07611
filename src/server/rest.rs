//! REST exposure: turns a resource registry into an Axum router
//!
//! Every response carries `Access-Control-Allow-Origin: *` so the read-only
//! API can be consumed directly from browsers.

use anyhow::Result;
use axum::{Json, Router, routing::get};
use serde_json::{Value, json};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::registry::ResourceRegistry;

/// REST API exposure implementation
pub struct RestExposure;

impl RestExposure {
    /// Build the REST router from a registry
    ///
    /// Returns a fully configured router with:
    /// - Health check routes
    /// - List and detail routes for every registered resource
    /// - Custom routes
    /// - Permissive CORS and request tracing layers
    pub fn build_router(registry: &ResourceRegistry, custom_routes: Vec<Router>) -> Result<Router> {
        let health_routes = Self::health_routes();
        let resource_routes = registry.build_routes();

        let mut app = health_routes.merge(resource_routes);

        for custom_router in custom_routes {
            app = app.merge(custom_router);
        }

        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);

        Ok(app.layer(cors).layer(TraceLayer::new_for_http()))
    }

    /// Build health check routes
    fn health_routes() -> Router {
        Router::new()
            .route("/health", get(Self::health_check))
            .route("/healthz", get(Self::health_check))
    }

    /// Health check endpoint handler
    async fn health_check() -> Json<Value> {
        Json(json!({
            "status": "ok",
            "service": "vitrine"
        }))
    }
}
