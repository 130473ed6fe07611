//! In-memory implementation of ResourceService for testing and development

use crate::core::resource::Resource;
use crate::core::service::ResourceService;
use anyhow::{Result, anyhow};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use uuid::Uuid;

/// In-memory resource service
///
/// Useful for testing and development. Uses RwLock for thread-safe access.
pub struct InMemoryService<T: Resource> {
    records: Arc<RwLock<HashMap<Uuid, T>>>,
}

impl<T: Resource> InMemoryService<T> {
    /// Create an empty service
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Insert or replace a record
    pub fn insert(&self, record: T) -> Result<()> {
        let mut records = self
            .records
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;
        records.insert(record.id(), record);
        Ok(())
    }

    /// Remove a record by id
    pub fn remove(&self, id: &Uuid) -> Result<()> {
        let mut records = self
            .records
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;
        records.remove(id);
        Ok(())
    }
}

impl<T: Resource> Default for InMemoryService<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Resource> Clone for InMemoryService<T> {
    fn clone(&self) -> Self {
        Self {
            records: self.records.clone(),
        }
    }
}

#[async_trait]
impl<T: Resource> ResourceService<T> for InMemoryService<T> {
    async fn list(&self) -> Result<Vec<T>> {
        let records = self
            .records
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(records.values().cloned().collect())
    }

    async fn get(&self, id: &Uuid) -> Result<Option<T>> {
        let records = self
            .records
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(records.get(id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fields::SerializeConfig;
    use serde::Serialize;

    #[derive(Clone, Serialize)]
    struct Note {
        id: Uuid,
        body: String,
    }

    impl Resource for Note {
        fn resource_name() -> &'static str {
            "notes"
        }

        fn resource_name_singular() -> &'static str {
            "note"
        }

        fn id(&self) -> Uuid {
            self.id
        }

        fn serialize_config() -> Arc<SerializeConfig> {
            Arc::new(SerializeConfig::new().leaf("id").leaf("body"))
        }
    }

    fn note(body: &str) -> Note {
        Note {
            id: Uuid::new_v4(),
            body: body.to_string(),
        }
    }

    #[tokio::test]
    async fn test_insert_and_get() {
        let service = InMemoryService::new();
        let record = note("hello");
        service.insert(record.clone()).unwrap();

        let fetched = service.get(&record.id).await.unwrap();
        assert_eq!(fetched.unwrap().body, "hello");
    }

    #[tokio::test]
    async fn test_get_missing_returns_none() {
        let service: InMemoryService<Note> = InMemoryService::new();
        assert!(service.get(&Uuid::new_v4()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_returns_everything() {
        let service = InMemoryService::new();
        service.insert(note("a")).unwrap();
        service.insert(note("b")).unwrap();

        let all = service.list().await.unwrap();
        assert_eq!(all.len(), 2);
    }

    #[tokio::test]
    async fn test_insert_replaces_same_id() {
        let service = InMemoryService::new();
        let mut record = note("first");
        service.insert(record.clone()).unwrap();

        record.body = "second".to_string();
        service.insert(record.clone()).unwrap();

        let all = service.list().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].body, "second");
    }

    #[tokio::test]
    async fn test_remove() {
        let service = InMemoryService::new();
        let record = note("gone");
        service.insert(record.clone()).unwrap();
        service.remove(&record.id).unwrap();

        assert!(service.get(&record.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_clones_share_records() {
        let service = InMemoryService::new();
        let other = service.clone();
        service.insert(note("shared")).unwrap();

        assert_eq!(other.list().await.unwrap().len(), 1);
    }
}
