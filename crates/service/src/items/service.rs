use std::sync::Arc;

use tracing::info;

use crate::errors::ServiceError;
use crate::items::domain::Item;
use crate::items::repository::ItemRepository;

/// Application service translating resource operations into backend calls.
///
/// Holds no state across requests; the backend owns the canonical records.
#[derive(Clone)]
pub struct ItemService {
    repo: Arc<dyn ItemRepository>,
}

impl ItemService {
    pub fn new(repo: Arc<dyn ItemRepository>) -> Self {
        Self { repo }
    }

    pub async fn list(&self) -> Result<Vec<Item>, ServiceError> {
        self.repo.list().await
    }

    pub async fn get(&self, id: i32) -> Result<Item, ServiceError> {
        self.repo
            .get(id)
            .await?
            .ok_or_else(|| ServiceError::item_not_found(id))
    }

    pub async fn create(&self, name: &str, description: &str) -> Result<Item, ServiceError> {
        let created = self.repo.insert(name, description).await?;
        info!(id = created.id, "created item");
        Ok(created)
    }

    /// Full replacement of both fields; the id never changes. Existence is
    /// checked before the write, so a missing id mutates nothing.
    pub async fn update(&self, id: i32, name: &str, description: &str) -> Result<Item, ServiceError> {
        if !self.repo.replace(id, name, description).await? {
            return Err(ServiceError::item_not_found(id));
        }
        info!(id, "updated item");
        Ok(Item { id, name: name.to_string(), description: description.to_string() })
    }

    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        if !self.repo.remove(id).await? {
            return Err(ServiceError::item_not_found(id));
        }
        info!(id, "deleted item");
        Ok(())
    }
}
