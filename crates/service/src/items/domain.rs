use serde::{Deserialize, Serialize};

/// Wire-level representation of a stored item, independent of which backend
/// holds the row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: i32,
    pub name: String,
    pub description: String,
}

impl From<models::item::Model> for Item {
    fn from(m: models::item::Model) -> Self {
        Self { id: m.id, name: m.name, description: m.description }
    }
}
