use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("not found: {0}")]
    NotFound(String),
    #[error("database error: {0}")]
    Db(String),
}

impl ServiceError {
    pub fn item_not_found(id: i32) -> Self {
        Self::NotFound(format!("Item with id {id} not found"))
    }
}
