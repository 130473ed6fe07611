//! Generic HTTP handlers for list and detail endpoints
//!
//! The handlers are completely resource-agnostic: any type implementing
//! [`Resource`] gets a list endpoint with pagination, sorting, equality
//! filtering and sparse fieldsets, and a detail endpoint honoring the same
//! field selection.

use axum::Json;
use axum::extract::{Path, Query, State};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

use crate::core::error::{ResourceError, VitrineError};
use crate::core::fields::SerializeConfig;
use crate::core::query::{self, ListParams, ListResponse};
use crate::core::resource::Resource;
use crate::core::service::ResourceService;

/// Per-resource state shared by the generic handlers
pub struct ResourceState<T: Resource> {
    pub service: Arc<dyn ResourceService<T>>,
    pub per_page: usize,
    pub default_fields: Vec<String>,
}

impl<T: Resource> Clone for ResourceState<T> {
    fn clone(&self) -> Self {
        Self {
            service: self.service.clone(),
            per_page: self.per_page,
            default_fields: self.default_fields.clone(),
        }
    }
}

impl<T: Resource> ResourceState<T> {
    /// Build state with the resource's trait-level defaults
    pub fn new(service: Arc<dyn ResourceService<T>>) -> Self {
        Self {
            service,
            per_page: T::per_page(),
            default_fields: T::default_fields()
                .iter()
                .map(|f| f.to_string())
                .collect(),
        }
    }

    /// Override the page size
    pub fn with_per_page(mut self, per_page: usize) -> Self {
        self.per_page = per_page.max(1);
        self
    }

    /// Override the default sparse fieldset
    pub fn with_default_fields(mut self, fields: Vec<String>) -> Self {
        self.default_fields = fields;
        self
    }

    /// Build the serialize config for a request
    ///
    /// Requested paths win over the resource defaults; unknown paths are
    /// dropped by selection, so the worst case is an empty config.
    fn selected_config(&self, requested: Option<&[String]>) -> SerializeConfig {
        let full = T::serialize_config();
        match requested {
            Some(fields) => full.select(fields),
            None => full.select(&self.default_fields),
        }
    }
}

/// List endpoint
///
/// `GET /{plural}?page=2&sort_by=name,-created_at&fields=name,address.city&status=active`
///
/// Strips the cache buster, applies equality filters, ordering and
/// pagination, then serializes the page honoring field selection. Requesting
/// a page past the last yields a 404.
pub async fn list_resources<T: Resource>(
    State(state): State<ResourceState<T>>,
    Query(raw): Query<HashMap<String, String>>,
) -> Result<Json<ListResponse>, VitrineError> {
    let params = ListParams::from_query(raw)?;

    let records = state.service.list().await?;
    let mut rows = Vec::with_capacity(records.len());
    for record in &records {
        rows.push(record.to_value()?);
    }

    let mut rows = query::apply_filters(rows, &params.filters);
    query::apply_sort(&mut rows, &params.sort_by);

    let mut response = query::paginate(rows, params.page, state.per_page)?;

    let config = state.selected_config(params.fields.as_deref());
    response.results = response
        .results
        .iter()
        .map(|row| config.apply(row))
        .collect();

    tracing::debug!(
        resource = T::resource_name(),
        page = response.meta.page,
        count = response.meta.count,
        total = response.meta.total_count,
        "list request served"
    );

    Ok(Json(response))
}

/// Detail endpoint
///
/// `GET /{plural}/{id}?fields=name,address.city`
///
/// Returns the bare serialized record (no envelope), honoring field
/// selection. Missing records yield a 404.
pub async fn get_resource<T: Resource>(
    State(state): State<ResourceState<T>>,
    Path(id): Path<Uuid>,
    Query(mut raw): Query<HashMap<String, String>>,
) -> Result<Json<Value>, VitrineError> {
    raw.remove(query::CACHE_BUSTER);
    let fields: Option<Vec<String>> = raw.remove("fields").map(|s| query::split_list(&s));

    let record = state.service.get(&id).await?.ok_or_else(|| {
        VitrineError::Resource(ResourceError::NotFound {
            resource_type: T::resource_name_singular().to_string(),
            id,
        })
    })?;

    let config = state.selected_config(fields.as_deref());
    let body = config.apply(&record.to_value()?);

    tracing::debug!(resource = T::resource_name_singular(), %id, "detail request served");

    Ok(Json(body))
}
