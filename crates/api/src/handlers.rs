//! API Handlers
//!
//! One generic handler per verb; [`Resource`] supplies the per-kind parts.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use crud_core::CoreError;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::openapi;
use crate::resource::Resource;
use crate::state::AppState;

// ============ Response Types ============

/// Body of every non-entity response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Message {
    pub message: String,
}

impl Message {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Path ids are base-10 integers; anything else cannot match an entity
fn parse_id<R: Resource>(raw: &str) -> Result<u64, ApiError> {
    raw.parse::<u64>().map_err(|_| {
        log::debug!("Non-numeric {} id {:?}", R::KIND, raw);
        CoreError::NotFound(R::KIND).into()
    })
}

// ============ Handlers ============

/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "timestamp": crud_utils::current_timestamp_secs()
    }))
}

/// Serve the generated API description
pub async fn openapi_json(State(state): State<AppState>) -> impl IntoResponse {
    Json(openapi::document(&state.config))
}

/// List all entities in insertion order
pub async fn list<R: Resource>(State(state): State<AppState>) -> Json<Vec<R>> {
    let store = R::store(&state).read().await;
    Json(store.list().to_vec())
}

/// Get entity by ID
pub async fn get<R: Resource>(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<R>, ApiError> {
    let id = parse_id::<R>(&id)?;
    let store = R::store(&state).read().await;
    let entity = store.get(id)?.clone();
    Ok(Json(entity))
}

/// Create a new entity
pub async fn create<R: Resource>(
    State(state): State<AppState>,
    Json(draft): Json<R::Draft>,
) -> Result<(StatusCode, Json<R>), ApiError> {
    let mut store = R::store(&state).write().await;
    let fields = R::validate(draft, &state).map_err(|e| {
        log::warn!("Rejected {} create: {}", R::KIND, e);
        e
    })?;

    let entity = store.create(fields);
    log::info!("Created {} {}", R::KIND, entity.id());
    Ok((StatusCode::CREATED, Json(entity)))
}

/// Replace all mutable fields of an existing entity
pub async fn update<R: Resource>(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(draft): Json<R::Draft>,
) -> Result<Json<R>, ApiError> {
    let id = parse_id::<R>(&id)?;
    let mut store = R::store(&state).write().await;

    // Existence is checked before the body
    if !store.contains(id) {
        return Err(CoreError::NotFound(R::KIND).into());
    }
    let fields = R::validate(draft, &state).map_err(|e| {
        log::warn!("Rejected {} {} update: {}", R::KIND, id, e);
        e
    })?;

    let entity = store.update(id, fields)?;
    log::info!("Updated {} {}", R::KIND, id);
    Ok(Json(entity))
}

/// Delete entity by ID
pub async fn delete<R: Resource>(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Message>, ApiError> {
    let id = parse_id::<R>(&id)?;
    R::store(&state).write().await.delete(id)?;
    log::info!("Deleted {} {}", R::KIND, id);
    Ok(Json(Message::new(format!("{} deleted", R::KIND))))
}
