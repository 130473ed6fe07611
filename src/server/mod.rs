//! Server module for building HTTP servers with auto-registered routes
//!
//! This module provides a `ServerBuilder` that automatically registers:
//! - List and detail routes for every exposed resource
//! - Health check routes
//! - A permissive CORS layer for browser consumption

pub mod builder;
pub mod registry;
pub mod rest;

pub use builder::ServerBuilder;
pub use registry::{RegisteredResource, ResourceDescriptor, ResourceRegistry};
pub use rest::RestExposure;

/// Initialize tracing with an env-filter subscriber
///
/// Convenience for binaries; respects `RUST_LOG`.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
}
