// ============================================================================
// Items API Library
// ============================================================================

pub mod config;
pub mod core;
pub mod repository;
pub mod service;
pub mod storage;
pub mod telemetry;
pub mod web;

pub use config::AppConfig;
pub use crate::core::{Collection, Item, NewItem, ServiceError, StoreError};
pub use service::ItemService;
pub use storage::{ItemStore, JsonFileStore, MemoryStore};
pub use web::{AppState, build_router};

use axum::Router;
use std::sync::Arc;
use tracing::info;

/// Wires a JSON file store at `config.data_file()` into a ready router.
pub fn bootstrap(config: &AppConfig) -> Router {
    info!(
        bind = %config.bind_addr(),
        data_file = %config.data_file().display(),
        "bootstrapping items api"
    );

    let store = JsonFileStore::new(config.data_file().clone());
    router_with_store(Arc::new(store))
}

/// Router over any store implementation.
pub fn router_with_store(store: Arc<dyn ItemStore>) -> Router {
    let service = Arc::new(ItemService::new(store));
    build_router(AppState::new(service))
}
