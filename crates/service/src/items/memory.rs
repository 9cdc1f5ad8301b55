use std::sync::Arc;

use tokio::sync::RwLock;

use crate::errors::ServiceError;
use crate::items::domain::Item;
use crate::items::repository::ItemRepository;

struct MemoryInner {
    items: Vec<Item>,
    next_id: i32,
}

/// In-process backend: insertion-ordered vec plus a monotonic id counter.
///
/// Ids start at 1 and are never reused within a process lifetime, even after
/// deletion. Lookups are linear scans by id; the dataset is assumed small.
/// The write lock is held only for the duration of a single mutation.
#[derive(Clone)]
pub struct MemoryItemRepository {
    inner: Arc<RwLock<MemoryInner>>,
}

impl MemoryItemRepository {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(MemoryInner { items: Vec::new(), next_id: 1 })),
        }
    }
}

impl Default for MemoryItemRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl ItemRepository for MemoryItemRepository {
    async fn list(&self) -> Result<Vec<Item>, ServiceError> {
        let inner = self.inner.read().await;
        Ok(inner.items.clone())
    }

    async fn get(&self, id: i32) -> Result<Option<Item>, ServiceError> {
        let inner = self.inner.read().await;
        Ok(inner.items.iter().find(|it| it.id == id).cloned())
    }

    async fn insert(&self, name: &str, description: &str) -> Result<Item, ServiceError> {
        let mut inner = self.inner.write().await;
        let item = Item {
            id: inner.next_id,
            name: name.to_string(),
            description: description.to_string(),
        };
        inner.next_id += 1;
        inner.items.push(item.clone());
        Ok(item)
    }

    async fn replace(&self, id: i32, name: &str, description: &str) -> Result<bool, ServiceError> {
        let mut inner = self.inner.write().await;
        match inner.items.iter_mut().find(|it| it.id == id) {
            Some(slot) => {
                slot.name = name.to_string();
                slot.description = description.to_string();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn remove(&self, id: i32) -> Result<bool, ServiceError> {
        let mut inner = self.inner.write().await;
        match inner.items.iter().position(|it| it.id == id) {
            Some(idx) => {
                inner.items.remove(idx);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn insert_assigns_strictly_increasing_ids() -> Result<(), anyhow::Error> {
        let repo = MemoryItemRepository::new();
        let a = repo.insert("a", "first").await?;
        let b = repo.insert("b", "second").await?;
        let c = repo.insert("c", "third").await?;
        assert_eq!((a.id, b.id, c.id), (1, 2, 3));
        Ok(())
    }

    #[tokio::test]
    async fn ids_are_not_reused_after_remove() -> Result<(), anyhow::Error> {
        let repo = MemoryItemRepository::new();
        let a = repo.insert("a", "d").await?;
        assert!(repo.remove(a.id).await?);
        let b = repo.insert("b", "d").await?;
        assert!(b.id > a.id);
        assert!(repo.get(a.id).await?.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn list_preserves_insertion_order() -> Result<(), anyhow::Error> {
        let repo = MemoryItemRepository::new();
        repo.insert("a", "1").await?;
        repo.insert("b", "2").await?;
        repo.insert("c", "3").await?;
        repo.remove(2).await?;
        let names: Vec<String> = repo.list().await?.into_iter().map(|it| it.name).collect();
        assert_eq!(names, vec!["a", "c"]);
        Ok(())
    }

    #[tokio::test]
    async fn replace_overwrites_both_fields_and_keeps_id() -> Result<(), anyhow::Error> {
        let repo = MemoryItemRepository::new();
        let a = repo.insert("a", "old").await?;
        assert!(repo.replace(a.id, "b", "new").await?);
        let got = repo.get(a.id).await?.unwrap();
        assert_eq!(got, Item { id: a.id, name: "b".into(), description: "new".into() });
        Ok(())
    }

    #[tokio::test]
    async fn replace_and_remove_report_missing_ids() -> Result<(), anyhow::Error> {
        let repo = MemoryItemRepository::new();
        repo.insert("a", "d").await?;
        assert!(!repo.replace(42, "x", "y").await?);
        assert!(!repo.remove(42).await?);
        // Storage unchanged by the failed calls.
        let all = repo.list().await?;
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].name, "a");
        Ok(())
    }

    #[tokio::test]
    async fn empty_strings_are_accepted() -> Result<(), anyhow::Error> {
        let repo = MemoryItemRepository::new();
        let a = repo.insert("", "").await?;
        let got = repo.get(a.id).await?.unwrap();
        assert_eq!(got.name, "");
        assert_eq!(got.description, "");
        Ok(())
    }
}
