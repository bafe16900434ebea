//! Application state

use crud_core::{seed_items, seed_users, EntityStore, Item, User};
use crud_utils::AppConfig;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Shared application state
///
/// Built once at startup and handed to the router; every store is guarded by
/// its own lock so a lookup-then-mutate sequence runs under one write guard.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<RwLock<EntityStore<User>>>,
    pub items: Arc<RwLock<EntityStore<Item>>>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    /// State populated with the startup seed data
    pub fn new(config: AppConfig) -> Self {
        Self::with_stores(
            config,
            EntityStore::with_seed(seed_users()),
            EntityStore::with_seed(seed_items()),
        )
    }

    pub fn with_stores(
        config: AppConfig,
        users: EntityStore<User>,
        items: EntityStore<Item>,
    ) -> Self {
        Self {
            users: Arc::new(RwLock::new(users)),
            items: Arc::new(RwLock::new(items)),
            config: Arc::new(config),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}
