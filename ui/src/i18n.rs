//! Internationalization (i18n) support for `portal-ui`.
//!
//! This module wires together:
//! - `i18n-embed` (language selection + asset loading)
//! - `fluent` (message formatting)
//! - `rust-embed` (compile-time embedding of `.ftl` files)
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n/
//!   en-US/portal_ui.ftl   (fallback/reference)
//!   es-ES/portal_ui.ftl
//!   fr-FR/portal_ui.ftl
//! ```
//!
//! Every label goes through a [`Translator`] bound to one locale, keyed by
//! `namespace:key` (`toc:popular` is the Fluent message `toc-popular`).
//! Components obtain theirs from [`use_translator`]: an injected
//! [`SharedTranslator`] wins, otherwise the cached Fluent bundle for the page
//! language. Nothing reads a process-wide language, so concurrent server
//! renders in different locales stay apart.
//!
//! NOTE: The underscored filename `portal_ui.ftl` is canonical across all locales.
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use dioxus::prelude::*;
use i18n_embed::fluent::FluentLanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use unic_langid::LanguageIdentifier;

/// Fluent "domain" (the fallback FTL filename without extension).
///
/// Fallback file path must be: `i18n/en-US/{DOMAIN}.ftl`
const DOMAIN: &str = "portal_ui";

pub const FALLBACK_LANGUAGE: &str = "en-US";

/// Embed all locale folders under `i18n/`.
#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

fn fallback_language() -> LanguageIdentifier {
    FALLBACK_LANGUAGE
        .parse()
        .expect("valid fallback language identifier")
}

/// List available (embedded) language identifiers.
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}

/// The user's language (browser on web, OS elsewhere) if it has translations.
pub fn preferred_language() -> String {
    negotiate(&requested_languages(), &available_languages())
}

/// First `requested` tag matching `available` exactly, else by primary
/// subtag (`es-MX` → `es-ES`), else [`FALLBACK_LANGUAGE`].
pub fn negotiate(requested: &[LanguageIdentifier], available: &[String]) -> String {
    for lang in requested {
        let tag = lang.to_string();
        if let Some(exact) = available.iter().find(|a| a.eq_ignore_ascii_case(&tag)) {
            return exact.clone();
        }
        let primary = lang.language.as_str();
        if let Some(close) = available.iter().find(|a| {
            a.split('-')
                .next()
                .is_some_and(|p| p.eq_ignore_ascii_case(primary))
        }) {
            return close.clone();
        }
    }
    FALLBACK_LANGUAGE.to_string()
}

#[cfg(target_arch = "wasm32")]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}

/// Keyed label lookup for one locale.
///
/// Keys are `namespace:key` pairs; missing keys are the implementation's
/// problem (Fluent renders a placeholder), callers never guard.
pub trait Translator: Send + Sync {
    fn locale(&self) -> &str;

    fn translate(&self, key: &str) -> String;
}

/// `toc:getting_started` → `toc-getting-started`.
pub fn message_id(key: &str) -> String {
    key.replace([':', '_'], "-")
}

/// [`Translator`] backed by its own Fluent loader.
pub struct FluentTranslator {
    locale: String,
    loader: FluentLanguageLoader,
}

impl FluentTranslator {
    /// Unknown or unparsable tags fall back to [`FALLBACK_LANGUAGE`].
    pub fn for_locale(tag: &str) -> Self {
        let loader = FluentLanguageLoader::new(DOMAIN, fallback_language());
        let requested = tag
            .parse::<LanguageIdentifier>()
            .unwrap_or_else(|_| fallback_language());
        if let Err(err) = i18n_embed::select(&loader, &Localizations, &[requested]) {
            tracing::warn!("[i18n] failed loading `{tag}` ({err}); using fallback");
        }
        Self {
            locale: tag.to_string(),
            loader,
        }
    }

    /// Cached per locale; building a loader parses every bundle.
    pub fn shared(tag: &str) -> Arc<FluentTranslator> {
        static CACHE: Lazy<Mutex<HashMap<String, Arc<FluentTranslator>>>> =
            Lazy::new(|| Mutex::new(HashMap::new()));

        let mut cache = CACHE.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        cache
            .entry(tag.to_string())
            .or_insert_with(|| Arc::new(FluentTranslator::for_locale(tag)))
            .clone()
    }
}

impl Translator for FluentTranslator {
    fn locale(&self) -> &str {
        &self.locale
    }

    fn translate(&self, key: &str) -> String {
        self.loader.get(&message_id(key))
    }
}

/// In-memory [`Translator`]; missing keys come back verbatim.
#[derive(Debug, Clone, Default)]
pub struct MapTranslator {
    locale: String,
    entries: HashMap<String, String>,
}

impl MapTranslator {
    pub fn new(locale: &str) -> Self {
        Self {
            locale: locale.to_string(),
            entries: HashMap::new(),
        }
    }

    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.entries.insert(key.to_string(), value.to_string());
        self
    }
}

impl Translator for MapTranslator {
    fn locale(&self) -> &str {
        &self.locale
    }

    fn translate(&self, key: &str) -> String {
        self.entries
            .get(key)
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }
}

/// A [`Translator`] as a component prop or context value.
#[derive(Clone)]
pub struct SharedTranslator(pub Arc<dyn Translator>);

impl SharedTranslator {
    pub fn new(translator: impl Translator + 'static) -> Self {
        Self(Arc::new(translator))
    }

    pub fn for_locale(tag: &str) -> Self {
        Self(FluentTranslator::shared(tag))
    }

    pub fn t(&self, key: &str) -> String {
        self.0.translate(key)
    }

    pub fn locale(&self) -> &str {
        self.0.locale()
    }
}

impl std::fmt::Debug for SharedTranslator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("SharedTranslator")
            .field(&self.0.locale())
            .finish()
    }
}

impl PartialEq for SharedTranslator {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

/// Translator for a component tree rendering `locale`. A `SharedTranslator`
/// provided as context (embedders, tests) takes precedence.
pub fn use_translator(locale: &str) -> SharedTranslator {
    try_use_context::<SharedTranslator>().unwrap_or_else(|| SharedTranslator::for_locale(locale))
}
