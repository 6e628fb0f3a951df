use super::ItemStore;
use crate::core::{Collection, StoreError};
use async_trait::async_trait;
use tokio::sync::RwLock;

/// In-process store. Useful for tests and for embedding the router
/// without touching the filesystem.
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: RwLock<Collection>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_items(items: Collection) -> Self {
        Self {
            items: RwLock::new(items),
        }
    }
}

#[async_trait]
impl ItemStore for MemoryStore {
    async fn load(&self) -> Collection {
        self.items.read().await.clone()
    }

    async fn save(&self, items: &Collection) -> Result<(), StoreError> {
        *self.items.write().await = items.clone();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Item;

    #[tokio::test]
    async fn load_returns_an_independent_copy() {
        let store = MemoryStore::with_items(vec![Item::new("1", "Widget")]);

        let mut copy = store.load().await;
        copy.push(Item::new("2", "Gadget"));

        assert_eq!(store.load().await.len(), 1);
        store.save(&copy).await.unwrap();
        assert_eq!(store.load().await, copy);
    }
}
