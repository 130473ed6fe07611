//! # Vitrine
//!
//! A generic read-only REST exposure layer for Rust services.
//!
//! ## Features
//!
//! - **Generic List/Detail Endpoints**: one pair of handlers serves any resource type
//! - **Pagination**: 1-based pages with a consistent `{meta, results}` envelope
//! - **Sorting**: comma-separated multi-key sort, `-field` for descending
//! - **Equality Filters**: any residual query parameter filters the result set
//! - **Sparse Fieldsets**: `fields=name,address.city` with dotted nesting and
//!   cycle-safe recursive selection
//! - **Cache-Buster Friendly**: the `_` parameter browsers append is ignored
//! - **Browser-Ready**: `Access-Control-Allow-Origin: *` on every response
//! - **Configuration-Based**: per-resource page size and default fields via YAML
//!
//! Persistence, query execution, authentication and transport are out of
//! scope: storage lives behind [`core::ResourceService`], HTTP behind axum.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use vitrine::prelude::*;
//!
//! #[derive(Clone, Serialize)]
//! struct Person {
//!     id: Uuid,
//!     name: String,
//!     status: String,
//! }
//!
//! impl Resource for Person {
//!     fn resource_name() -> &'static str { "people" }
//!     fn resource_name_singular() -> &'static str { "person" }
//!     fn id(&self) -> Uuid { self.id }
//!     fn serialize_config() -> Arc<SerializeConfig> {
//!         Arc::new(SerializeConfig::new().leaf("id").leaf("name").leaf("status"))
//!     }
//!     fn default_fields() -> &'static [&'static str] { &["id", "name"] }
//! }
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let service = InMemoryService::new();
//!     ServerBuilder::new()
//!         .register::<Person>(service)
//!         .serve("127.0.0.1:3000")
//!         .await
//! }
//! ```
//!
//! `GET /people?page=2&sort_by=name&fields=name,address.city&status=active&_=123`

pub mod config;
pub mod core;
pub mod endpoints;
pub mod server;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core Traits ===
    pub use crate::core::{
        error::{ConfigError, ErrorResponse, QueryError, ResourceError, VitrineError},
        fields::{FieldConfig, SerializeConfig},
        query::{ListParams, ListResponse, PageMeta},
        resource::Resource,
        service::ResourceService,
    };

    // === Handlers ===
    pub use crate::endpoints::{ResourceState, get_resource, list_resources};

    // === Storage ===
    pub use crate::storage::InMemoryService;

    // === Config ===
    pub use crate::config::{ExposureConfig, ResourceExposure};

    // === Server ===
    pub use crate::server::{ResourceDescriptor, ResourceRegistry, ServerBuilder};

    // === External dependencies ===
    pub use anyhow::Result;
    pub use async_trait::async_trait;
    pub use chrono::{DateTime, Utc};
    pub use serde::{Deserialize, Serialize};
    pub use serde_json::Value;
    pub use std::sync::Arc;
    pub use uuid::Uuid;

    // === Axum ===
    pub use axum::{
        Router,
        extract::{Path, Query, State},
        routing::get,
    };
}
