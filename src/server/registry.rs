//! Resource registry for collecting descriptors and generating routes

use axum::Router;
use axum::routing::get;
use std::collections::HashMap;

use crate::core::resource::Resource;
use crate::endpoints::{ResourceState, get_resource, list_resources};

/// Trait that describes how to build routes for a resource
///
/// Each registered resource provides its own list and detail routes.
pub trait ResourceDescriptor: Send + Sync {
    /// The plural resource name (e.g., "people")
    fn resource_name(&self) -> &str;

    /// Build the read routes for this resource
    ///
    /// Returns a Router with:
    /// - GET /{plural}
    /// - GET /{plural}/{id}
    fn build_routes(&self) -> Router;
}

/// Descriptor wiring the generic handlers to one resource type
pub struct RegisteredResource<T: Resource> {
    state: ResourceState<T>,
}

impl<T: Resource> RegisteredResource<T> {
    pub fn new(state: ResourceState<T>) -> Self {
        Self { state }
    }
}

impl<T: Resource> ResourceDescriptor for RegisteredResource<T> {
    fn resource_name(&self) -> &str {
        T::resource_name()
    }

    fn build_routes(&self) -> Router {
        let list_path = format!("/{}", T::resource_name());
        let detail_path = format!("/{}/{{id}}", T::resource_name());

        Router::new()
            .route(&list_path, get(list_resources::<T>))
            .route(&detail_path, get(get_resource::<T>))
            .with_state(self.state.clone())
    }
}

/// Registry for all exposed resources
///
/// Collects descriptors and merges their routes into a single router.
#[derive(Default)]
pub struct ResourceRegistry {
    descriptors: HashMap<String, Box<dyn ResourceDescriptor>>,
}

impl ResourceRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            descriptors: HashMap::new(),
        }
    }

    /// Register a resource descriptor
    ///
    /// The plural resource name is the key; registering the same name twice
    /// replaces the earlier descriptor.
    pub fn register(&mut self, descriptor: Box<dyn ResourceDescriptor>) {
        let name = descriptor.resource_name().to_string();
        self.descriptors.insert(name, descriptor);
    }

    /// Build a router with all registered resource routes
    pub fn build_routes(&self) -> Router {
        let mut router = Router::new();

        for descriptor in self.descriptors.values() {
            router = router.merge(descriptor.build_routes());
        }

        router
    }

    /// Get all registered resource names
    pub fn resource_names(&self) -> Vec<&str> {
        self.descriptors.keys().map(|s| s.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MockDescriptor {
        name: String,
    }

    impl MockDescriptor {
        fn new(name: &str) -> Self {
            Self {
                name: name.to_string(),
            }
        }
    }

    impl ResourceDescriptor for MockDescriptor {
        fn resource_name(&self) -> &str {
            &self.name
        }

        fn build_routes(&self) -> Router {
            Router::new()
        }
    }

    #[test]
    fn test_new_registry_is_empty() {
        let registry = ResourceRegistry::new();
        assert!(registry.resource_names().is_empty());
    }

    #[test]
    fn test_register_resources() {
        let mut registry = ResourceRegistry::new();
        registry.register(Box::new(MockDescriptor::new("people")));
        registry.register(Box::new(MockDescriptor::new("addresses")));

        let names = registry.resource_names();
        assert_eq!(names.len(), 2);
        assert!(names.contains(&"people"));
    }

    #[test]
    fn test_register_duplicate_replaces() {
        let mut registry = ResourceRegistry::new();
        registry.register(Box::new(MockDescriptor::new("people")));
        registry.register(Box::new(MockDescriptor::new("people")));
        assert_eq!(registry.resource_names().len(), 1);
    }

    #[test]
    fn test_build_routes_does_not_panic() {
        let mut registry = ResourceRegistry::new();
        registry.register(Box::new(MockDescriptor::new("people")));
        let _router = registry.build_routes();
    }
}
