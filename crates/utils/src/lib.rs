//! Utils library - Các hàm tiện ích dùng chung
//!
//! Configuration loading, field presence checks and small helpers
//! shared by the core and api crates.

pub mod config;
pub mod helpers;
pub mod validation;

pub use config::*;
pub use helpers::*;
pub use validation::*;
