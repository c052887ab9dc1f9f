//! Content index: navigation and featured links per locale.

use std::collections::BTreeMap;
use std::path::Path;

use thiserror::Error;

use crate::context::RequestContext;

/// Index shipped with the binary; `PORTAL_CONTENT_INDEX` overrides it.
const EMBEDDED_INDEX: &str = include_str!("../content/index.json");

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("no content for locale `{requested}` and no fallback `{fallback}`")]
    MissingLocale { requested: String, fallback: String },
    #[error("malformed content index: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("failed reading content index {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Supplies the request-scoped navigation data for a resolved locale.
pub trait ContentProvider: Send + Sync {
    fn request_context(&self, locale: &str) -> Result<RequestContext, ContentError>;

    fn locales(&self) -> Vec<String>;
}

/// JSON document mapping locale tags to [`RequestContext`] values.
#[derive(Debug, Clone)]
pub struct JsonContentIndex {
    fallback_locale: String,
    entries: BTreeMap<String, RequestContext>,
}

impl JsonContentIndex {
    pub fn from_json(json: &str, fallback_locale: &str) -> Result<Self, ContentError> {
        let entries: BTreeMap<String, RequestContext> = serde_json::from_str(json)?;
        tracing::debug!(locales = entries.len(), "parsed content index");
        Ok(Self {
            fallback_locale: fallback_locale.to_string(),
            entries,
        })
    }

    pub fn embedded(fallback_locale: &str) -> Result<Self, ContentError> {
        Self::from_json(EMBEDDED_INDEX, fallback_locale)
    }

    pub fn load(path: &Path, fallback_locale: &str) -> Result<Self, ContentError> {
        let json = std::fs::read_to_string(path).map_err(|source| ContentError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&json, fallback_locale)
    }
}

impl ContentProvider for JsonContentIndex {
    fn request_context(&self, locale: &str) -> Result<RequestContext, ContentError> {
        if let Some(ctx) = self.entries.get(locale) {
            return Ok(ctx.clone());
        }
        tracing::warn!(
            locale,
            fallback = %self.fallback_locale,
            "no content for locale, using fallback"
        );
        self.entries
            .get(&self.fallback_locale)
            .cloned()
            .ok_or_else(|| ContentError::MissingLocale {
                requested: locale.to_string(),
                fallback: self.fallback_locale.clone(),
            })
    }

    fn locales(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }
}
