//! Server configuration read from the environment.

use std::path::PathBuf;

use thiserror::Error;

use crate::model::DEFAULT_VERSION;

pub const DEFAULT_LOCALE_VAR: &str = "PORTAL_DEFAULT_LOCALE";
pub const DEFAULT_VERSION_VAR: &str = "PORTAL_DEFAULT_VERSION";
pub const CONTENT_INDEX_VAR: &str = "PORTAL_CONTENT_INDEX";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must not be empty")]
    Empty { var: &'static str },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortalConfig {
    pub default_locale: String,
    pub default_version: String,
    /// Optional JSON content index overriding the embedded one.
    pub content_index: Option<PathBuf>,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            default_locale: "en-US".to_string(),
            default_version: DEFAULT_VERSION.to_string(),
            content_index: None,
        }
    }
}

impl PortalConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(locale) = lookup(DEFAULT_LOCALE_VAR) {
            config.default_locale = non_empty(DEFAULT_LOCALE_VAR, locale)?;
        }
        if let Some(version) = lookup(DEFAULT_VERSION_VAR) {
            config.default_version = non_empty(DEFAULT_VERSION_VAR, version)?;
        }
        config.content_index = lookup(CONTENT_INDEX_VAR)
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);
        Ok(config)
    }
}

fn non_empty(var: &'static str, value: String) -> Result<String, ConfigError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::Empty { var });
    }
    Ok(trimmed.to_string())
}
