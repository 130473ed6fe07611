//! ServerBuilder for fluent API to build HTTP servers

use anyhow::Result;
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;

use super::registry::{RegisteredResource, ResourceRegistry};
use super::rest::RestExposure;
use crate::config::ExposureConfig;
use crate::core::resource::Resource;
use crate::core::service::ResourceService;
use crate::endpoints::ResourceState;

/// Builder for creating HTTP servers with auto-registered read routes
///
/// # Example
///
/// ```ignore
/// let app = ServerBuilder::new()
///     .with_config(ExposureConfig::from_yaml_file("exposure.yaml")?)
///     .register::<Person>(people_service)
///     .build()?;
/// ```
pub struct ServerBuilder {
    registry: ResourceRegistry,
    config: ExposureConfig,
    custom_routes: Vec<Router>,
}

impl ServerBuilder {
    /// Create a new ServerBuilder
    pub fn new() -> Self {
        Self {
            registry: ResourceRegistry::new(),
            config: ExposureConfig::default(),
            custom_routes: Vec::new(),
        }
    }

    /// Set the exposure configuration
    ///
    /// Per-resource `per_page` and `default_fields` overrides are applied to
    /// resources registered after this call.
    pub fn with_config(mut self, config: ExposureConfig) -> Self {
        self.config = config;
        self
    }

    /// Add custom routes to the server
    ///
    /// Use this for routes that don't fit the list/detail pattern.
    pub fn with_custom_routes(mut self, routes: Router) -> Self {
        self.custom_routes.push(routes);
        self
    }

    /// Register a resource with its backing service
    ///
    /// Generates `GET /{plural}` and `GET /{plural}/{id}` routes. Trait-level
    /// defaults apply unless the exposure config overrides them.
    pub fn register<T: Resource>(
        mut self,
        service: impl ResourceService<T> + 'static,
    ) -> Self {
        let mut state = ResourceState::<T>::new(Arc::new(service));

        if let Some(exposure) = self.config.resource(T::resource_name_singular()) {
            if let Some(per_page) = exposure.per_page {
                state = state.with_per_page(per_page);
            }
            if let Some(fields) = &exposure.default_fields {
                state = state.with_default_fields(fields.clone());
            }
        }

        self.registry
            .register(Box::new(RegisteredResource::new(state)));
        self
    }

    /// Build the final REST router
    ///
    /// This generates health routes, list/detail routes for every registered
    /// resource, and the CORS and tracing layers.
    pub fn build(self) -> Result<Router> {
        RestExposure::build_router(&self.registry, self.custom_routes)
    }

    /// Serve the application with graceful shutdown
    ///
    /// Binds to the provided address and handles SIGTERM and SIGINT
    /// (Ctrl+C) for graceful shutdown.
    ///
    /// # Example
    ///
    /// ```ignore
    /// ServerBuilder::new()
    ///     .register::<Person>(service)
    ///     .serve("127.0.0.1:3000").await?;
    /// ```
    pub async fn serve(self, addr: &str) -> Result<()> {
        let app = self.build()?;
        let listener = TcpListener::bind(addr).await?;

        tracing::info!("Server listening on {}", addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");
        Ok(())
    }
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Wait for SIGINT or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal, initiating graceful shutdown...");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM signal, initiating graceful shutdown...");
        }
    }
}
