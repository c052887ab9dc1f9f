//! Process-wide services consumed by the server function.
//!
//! The hosting binary calls [`register`] once at startup (under its `server`
//! feature); later calls are ignored.

use std::sync::Arc;

use once_cell::sync::OnceCell;

use crate::config::PortalConfig;
use crate::content::{ContentError, ContentProvider, JsonContentIndex};
use crate::context::{ContextResolver, LocaleContextResolver};

#[derive(Clone)]
pub struct PortalServices {
    pub content: Arc<dyn ContentProvider>,
    pub resolver: Arc<dyn ContextResolver>,
}

impl PortalServices {
    /// Content index from the config (embedded when no path is set) and a
    /// resolver over the locales that index provides.
    pub fn from_config(config: &PortalConfig) -> Result<Self, ContentError> {
        let index = match &config.content_index {
            Some(path) => JsonContentIndex::load(path, &config.default_locale)?,
            None => JsonContentIndex::embedded(&config.default_locale)?,
        };
        let resolver = LocaleContextResolver::new(
            index.locales(),
            &config.default_locale,
            &config.default_version,
        );
        Ok(Self {
            content: Arc::new(index),
            resolver: Arc::new(resolver),
        })
    }
}

static SERVICES: OnceCell<PortalServices> = OnceCell::new();

pub fn register(services: PortalServices) {
    if SERVICES.set(services).is_err() {
        tracing::warn!("portal services already registered; ignoring");
    }
}

pub fn services() -> Option<&'static PortalServices> {
    SERVICES.get()
}
