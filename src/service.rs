//! Load, compute, save.
//!
//! Every call starts from a fresh `load()` of the store; nothing is cached
//! between calls. Mutating calls hold `write_lock` across the whole
//! load-append-save sequence so concurrent creates cannot overwrite each
//! other's appends.

use crate::core::{Collection, Item, NewItem, Result, ServiceError};
use crate::repository;
use crate::storage::ItemStore;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::info;

pub struct ItemService {
    store: Arc<dyn ItemStore>,
    write_lock: Mutex<()>,
}

impl ItemService {
    pub fn new(store: Arc<dyn ItemStore>) -> Self {
        Self {
            store,
            write_lock: Mutex::new(()),
        }
    }

    pub async fn list(&self) -> Collection {
        self.store.load().await
    }

    pub async fn get(&self, id: &str) -> Result<Item> {
        let items = self.store.load().await;
        repository::find_by_id(&items, id)
            .cloned()
            .ok_or_else(|| ServiceError::NotFound(id.to_string()))
    }

    pub async fn create(&self, new_item: NewItem) -> Result<Item> {
        let _guard = self.write_lock.lock().await;

        let mut items = self.store.load().await;
        let created = repository::append_new(&mut items, new_item);
        self.store.save(&items).await?;

        info!(id = ?created.id_text(), total = items.len(), "item created");
        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::StoreError;
    use crate::storage::MemoryStore;
    use async_trait::async_trait;

    struct ReadOnlyStore;

    #[async_trait]
    impl ItemStore for ReadOnlyStore {
        async fn load(&self) -> Collection {
            vec![Item::new("fixed", "Fixture")]
        }

        async fn save(&self, _items: &Collection) -> std::result::Result<(), StoreError> {
            Err(StoreError::io(
                "read-only",
                std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only store"),
            ))
        }
    }

    #[tokio::test]
    async fn create_then_get_and_list() {
        let service = ItemService::new(Arc::new(MemoryStore::new()));

        let created = service.create(NewItem::named("Widget")).await.unwrap();
        let id = created.id_text().unwrap();
        assert_eq!(service.get(&id).await.unwrap(), created);
        assert_eq!(service.list().await, vec![created]);
    }

    #[tokio::test]
    async fn get_unknown_id_is_not_found() {
        let service = ItemService::new(Arc::new(MemoryStore::new()));
        let err = service.get("does-not-exist").await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(id) if id == "does-not-exist"));
    }

    #[tokio::test]
    async fn save_failure_surfaces_as_storage_error() {
        let service = ItemService::new(Arc::new(ReadOnlyStore));

        let err = service.create(NewItem::named("Widget")).await.unwrap_err();
        assert!(matches!(err, ServiceError::Storage(_)));
        assert_eq!(service.list().await.len(), 1);
    }

    #[tokio::test]
    async fn concurrent_creates_are_not_lost() {
        let service = Arc::new(ItemService::new(Arc::new(MemoryStore::new())));

        let mut tasks = tokio::task::JoinSet::new();
        for n in 0..32 {
            let service = Arc::clone(&service);
            tasks.spawn(async move {
                service
                    .create(NewItem::named(format!("item-{n}")))
                    .await
                    .unwrap()
            });
        }
        while let Some(joined) = tasks.join_next().await {
            joined.unwrap();
        }

        assert_eq!(service.list().await.len(), 32);
    }
}
