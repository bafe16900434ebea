//! Per-kind wiring for the generic CRUD handlers

use crud_core::{Entity, EntityStore, Item, ItemDraft, ItemFields, User, UserDraft, UserFields};
use schemars::JsonSchema;
use serde::{de::DeserializeOwned, Serialize};
use tokio::sync::RwLock;

use crate::state::AppState;

/// An entity kind exposed over HTTP
pub trait Resource: Entity + Serialize + JsonSchema + Send + Sync + 'static {
    /// Request body accepted by create and update
    type Draft: DeserializeOwned + JsonSchema + Send + 'static;

    /// Path segment under the API prefix, e.g. `users`
    const COLLECTION: &'static str;

    fn store(state: &AppState) -> &RwLock<EntityStore<Self>>;

    /// Presence checks for a create or update body
    fn validate(draft: Self::Draft, state: &AppState) -> crud_core::Result<Self::Fields>;
}

impl Resource for User {
    type Draft = UserDraft;
    const COLLECTION: &'static str = "users";

    fn store(state: &AppState) -> &RwLock<EntityStore<Self>> {
        &state.users
    }

    fn validate(draft: UserDraft, _state: &AppState) -> crud_core::Result<UserFields> {
        draft.validate()
    }
}

impl Resource for Item {
    type Draft = ItemDraft;
    const COLLECTION: &'static str = "items";

    fn store(state: &AppState) -> &RwLock<EntityStore<Self>> {
        &state.items
    }

    fn validate(draft: ItemDraft, state: &AppState) -> crud_core::Result<ItemFields> {
        draft.validate(state.config.item_description)
    }
}
