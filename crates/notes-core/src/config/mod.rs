//! Runtime configuration for the notes API client.
//!
//! Values come from the process environment (optionally seeded from a `.env`
//! file by the binary). Lookup is injectable so parsing can be tested without
//! mutating the real environment.

use std::collections::HashMap;
use std::env;

use crate::error::ConfigError;
use crate::util::{non_blank, normalize_base_url};

/// Environment variable holding the API base URL.
pub const API_BASE_URL_VAR: &str = "NOTES_API_BASE_URL";

/// Base URL used when nothing is configured.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000";

/// Client configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Normalized API root; the client appends `/notes`
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }
}

impl ApiConfig {
    /// Builds a config for an explicit base URL.
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        let base_url = normalize_base_url(base_url)
            .map_err(|error| ConfigError::Invalid(format!("{API_BASE_URL_VAR}: {error}")))?;
        Ok(Self { base_url })
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        let values: HashMap<String, String> = env::vars().collect();
        Self::from_lookup(|name| values.get(name).cloned())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        match non_blank(lookup(API_BASE_URL_VAR)) {
            Some(base_url) => Self::new(&base_url),
            None => Ok(Self::default()),
        }
    }

    /// Returns a copy with the base URL replaced when `override_url` is set.
    pub fn with_override(self, override_url: Option<&str>) -> Result<Self, ConfigError> {
        match override_url {
            Some(url) => Self::new(url),
            None => Ok(self),
        }
    }
}
