use async_trait::async_trait;

use crate::errors::ServiceError;
use crate::items::domain::Item;

/// Capability set shared by both storage backends.
///
/// `replace` and `remove` report whether the row existed. Existence is
/// established by a read before any write, so a missing id never causes a
/// partial mutation.
#[async_trait]
pub trait ItemRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Item>, ServiceError>;
    async fn get(&self, id: i32) -> Result<Option<Item>, ServiceError>;
    async fn insert(&self, name: &str, description: &str) -> Result<Item, ServiceError>;
    async fn replace(&self, id: i32, name: &str, description: &str) -> Result<bool, ServiceError>;
    async fn remove(&self, id: i32) -> Result<bool, ServiceError>;
}
