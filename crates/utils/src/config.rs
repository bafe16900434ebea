//! Configuration utilities

use serde::{Deserialize, Serialize};
use std::env;

const DEFAULT_PORT: u16 = 8080;

/// Which item variant the service runs with
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DescriptionPolicy {
    /// `discription` must be present and non-empty
    Required,
    /// `discription` may be omitted
    #[default]
    Optional,
}

impl DescriptionPolicy {
    pub fn is_required(self) -> bool {
        self == DescriptionPolicy::Required
    }
}

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub app_name: String,
    pub host: String,
    pub port: u16,
    pub log_level: String,
    pub item_description: DescriptionPolicy,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            app_name: "crud-api".to_string(),
            host: "127.0.0.1".to_string(),
            port: DEFAULT_PORT,
            log_level: "info".to_string(),
            item_description: DescriptionPolicy::Optional,
        }
    }
}

impl AppConfig {
    /// Load config từ environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup, falling back to defaults
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            app_name: lookup("APP_NAME").unwrap_or(defaults.app_name),
            host: lookup("HOST").unwrap_or(defaults.host),
            port: lookup("PORT")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.port),
            log_level: lookup("LOG_LEVEL").unwrap_or(defaults.log_level),
            item_description: match lookup("ITEM_DESCRIPTION_REQUIRED")
                .and_then(|v| v.trim().parse::<bool>().ok())
            {
                Some(true) => DescriptionPolicy::Required,
                Some(false) => DescriptionPolicy::Optional,
                None => defaults.item_description,
            },
        }
    }

    /// Lấy địa chỉ bind đầy đủ
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
