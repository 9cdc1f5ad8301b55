use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryOrder, Set};

use models::item::{self, Entity as Items};

use crate::errors::ServiceError;
use crate::items::domain::Item;
use crate::items::repository::ItemRepository;

/// SeaORM-backed repository over the `items` table.
///
/// Each call borrows a pooled connection for a single parameterized statement
/// (or a check-then-act pair for replace/remove); the pool bounds acquisition
/// time and returns the connection on every exit path.
pub struct SeaOrmItemRepository {
    db: DatabaseConnection,
}

impl SeaOrmItemRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait::async_trait]
impl ItemRepository for SeaOrmItemRepository {
    async fn list(&self) -> Result<Vec<Item>, ServiceError> {
        // Deterministic order: id ascending.
        let rows = Items::find()
            .order_by_asc(item::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?;
        Ok(rows.into_iter().map(Item::from).collect())
    }

    async fn get(&self, id: i32) -> Result<Option<Item>, ServiceError> {
        let row = Items::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?;
        Ok(row.map(Item::from))
    }

    async fn insert(&self, name: &str, description: &str) -> Result<Item, ServiceError> {
        // INSERT .. RETURNING hands back the generated id in the same round trip.
        let am = item::ActiveModel {
            name: Set(name.to_string()),
            description: Set(description.to_string()),
            ..Default::default()
        };
        let created = am
            .insert(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?;
        Ok(Item::from(created))
    }

    async fn replace(&self, id: i32, name: &str, description: &str) -> Result<bool, ServiceError> {
        let Some(existing) = Items::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?
        else {
            return Ok(false);
        };
        let mut am: item::ActiveModel = existing.into();
        am.name = Set(name.to_string());
        am.description = Set(description.to_string());
        am.update(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?;
        Ok(true)
    }

    async fn remove(&self, id: i32) -> Result<bool, ServiceError> {
        let Some(existing) = Items::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?
        else {
            return Ok(false);
        };
        existing
            .delete(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?;
        Ok(true)
    }
}
