//! Core library - Business logic chính của ứng dụng
//!
//! Crate này chứa các models, the generic in-memory entity store and the
//! seed data the service starts with.

pub mod error;
pub mod models;
pub mod seed;
pub mod store;

pub use error::{CoreError, Result};
pub use models::*;
pub use seed::{seed_items, seed_users};
pub use store::{Entity, EntityStore};
