//! Typed request context and the per-request context resolver.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::model::{MainContext, ProductGroup};

/// What the hosting framework knows about an inbound page view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestMeta {
    /// Locale requested by the client (URL segment or switcher), possibly unsupported.
    pub locale: String,
    pub version: Option<String>,
    pub path: String,
}

impl RequestMeta {
    pub fn homepage(locale: &str) -> Self {
        Self {
            locale: locale.to_string(),
            version: None,
            path: "/".to_string(),
        }
    }
}

/// A content entry as stored in the index. Only `title`, `href` and `intro`
/// are ever shown; everything else is carried along untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RichLink {
    pub title: String,
    pub href: String,
    #[serde(default)]
    pub intro: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeaturedLinks {
    pub getting_started: Vec<RichLink>,
    pub popular: Vec<RichLink>,
}

/// Navigation and featured-link data for one locale.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestContext {
    pub product_groups: Vec<ProductGroup>,
    pub featured_links: FeaturedLinks,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContextError {
    #[error("no supported languages configured")]
    NoLanguages,
}

/// Produces the per-request [`MainContext`].
#[async_trait]
pub trait ContextResolver: Send + Sync {
    async fn resolve(&self, request: &RequestMeta) -> Result<MainContext, ContextError>;
}

/// Resolves the request locale against a fixed list of supported languages.
#[derive(Debug, Clone)]
pub struct LocaleContextResolver {
    languages: Vec<String>,
    default_language: String,
    default_version: String,
}

impl LocaleContextResolver {
    pub fn new(languages: Vec<String>, default_language: &str, default_version: &str) -> Self {
        Self {
            languages,
            default_language: default_language.to_string(),
            default_version: default_version.to_string(),
        }
    }

    /// Exact tag match first, then a primary-language match (`es` → `es-ES`).
    pub fn negotiate(&self, requested: &str) -> Option<&str> {
        let requested = requested.trim();
        if requested.is_empty() {
            return None;
        }
        if let Some(exact) = self
            .languages
            .iter()
            .find(|l| l.eq_ignore_ascii_case(requested))
        {
            return Some(exact);
        }
        let primary = requested.split(['-', '_']).next().unwrap_or(requested);
        self.languages
            .iter()
            .find(|l| {
                l.split('-')
                    .next()
                    .is_some_and(|p| p.eq_ignore_ascii_case(primary))
            })
            .map(String::as_str)
    }
}

#[async_trait]
impl ContextResolver for LocaleContextResolver {
    async fn resolve(&self, request: &RequestMeta) -> Result<MainContext, ContextError> {
        if self.languages.is_empty() {
            return Err(ContextError::NoLanguages);
        }
        let language = self
            .negotiate(&request.locale)
            .unwrap_or(&self.default_language)
            .to_string();
        let version = request
            .version
            .clone()
            .unwrap_or_else(|| self.default_version.clone());

        let path = request.path.trim_start_matches('/');
        let current_path = if path.is_empty() {
            format!("/{language}")
        } else {
            format!("/{language}/{path}")
        };

        Ok(MainContext {
            current_language: language,
            current_version: version,
            current_path,
            available_languages: self.languages.clone(),
        })
    }
}
