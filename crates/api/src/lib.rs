//! HTTP surface for the user and item collections

pub mod error;
pub mod handlers;
pub mod openapi;
pub mod resource;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use routes::create_router;
pub use state::AppState;
