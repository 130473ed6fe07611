//! Service trait for fetching resources
//!
//! Persistence and query execution live behind this seam. The exposure layer
//! only needs two read operations; filtering, sorting and pagination are
//! applied on top of what the service returns.

use crate::core::resource::Resource;
use anyhow::Result;
use async_trait::async_trait;
use uuid::Uuid;

/// Read access to a resource's records
///
/// Implementations are free to back this with any store. The layer is
/// agnostic to the underlying storage mechanism.
#[async_trait]
pub trait ResourceService<T: Resource>: Send + Sync {
    /// List all records
    async fn list(&self) -> Result<Vec<T>>;

    /// Get a record by primary key
    async fn get(&self, id: &Uuid) -> Result<Option<T>>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fields::SerializeConfig;
    use serde::Serialize;
    use std::sync::Arc;

    #[derive(Clone, Serialize)]
    struct Stub {
        id: Uuid,
    }

    impl Resource for Stub {
        fn resource_name() -> &'static str {
            "stubs"
        }

        fn resource_name_singular() -> &'static str {
            "stub"
        }

        fn id(&self) -> Uuid {
            self.id
        }

        fn serialize_config() -> Arc<SerializeConfig> {
            Arc::new(SerializeConfig::new().leaf("id"))
        }
    }

    struct EmptyService;

    #[async_trait]
    impl ResourceService<Stub> for EmptyService {
        async fn list(&self) -> Result<Vec<Stub>> {
            Ok(Vec::new())
        }

        async fn get(&self, _id: &Uuid) -> Result<Option<Stub>> {
            Ok(None)
        }
    }

    // The trait can be used behind a dyn pointer in generic contexts
    #[tokio::test]
    async fn test_trait_object_usage() {
        let service: Arc<dyn ResourceService<Stub>> = Arc::new(EmptyService);
        assert!(service.list().await.unwrap().is_empty());
        assert!(service.get(&Uuid::new_v4()).await.unwrap().is_none());
    }
}
