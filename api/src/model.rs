//! Request-scoped data shared between the server and the rendered homepage.

use serde::{Deserialize, Serialize};

/// Version identifier for the default (unversioned) docs tree.
pub const DEFAULT_VERSION: &str = "free-pro-team@latest";

/// A teaser for a getting-started or popular article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeaturedLink {
    pub href: String,
    pub title: String,
    pub intro: String,
}

/// Name of an Octicon as used by the content index, e.g. `PencilIcon`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Octicon(pub String);

impl Octicon {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A named navigation category on the homepage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductGroup {
    pub name: String,
    pub octicon: Octicon,
    #[serde(default)]
    pub children: Vec<ProductItem>,
}

/// A navigable entry inside a [`ProductGroup`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductItem {
    pub id: String,
    pub name: String,
    pub href: String,
    #[serde(default)]
    pub versions: Vec<String>,
    #[serde(default)]
    pub external: bool,
}

impl ProductItem {
    /// Cross-origin entry with no version applicability.
    pub fn external(id: &str, name: &str, href: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            href: href.to_string(),
            versions: Vec::new(),
            external: true,
        }
    }
}

/// Per-request localization/session state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MainContext {
    pub current_language: String,
    pub current_version: String,
    pub current_path: String,
    #[serde(default)]
    pub available_languages: Vec<String>,
}

impl MainContext {
    pub fn for_language(language: &str) -> Self {
        Self {
            current_language: language.to_string(),
            current_version: DEFAULT_VERSION.to_string(),
            current_path: format!("/{language}"),
            available_languages: vec![language.to_string()],
        }
    }
}

/// Everything the homepage needs to render, built once per request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HomePageProps {
    pub main_context: MainContext,
    pub getting_started_links: Vec<FeaturedLink>,
    pub popular_links: Vec<FeaturedLink>,
    pub product_groups: Vec<ProductGroup>,
}
