//! Server-side data for the docs portal homepage: model, request context,
//! content index and the server functions the views call.

use dioxus::prelude::*;

pub mod assembly;
pub mod config;
pub mod content;
pub mod context;
pub mod model;
pub mod services;

pub use model::{FeaturedLink, HomePageProps, MainContext, Octicon, ProductGroup, ProductItem};

use assembly::AssemblyError;

/// Resolves context and content for the homepage in `locale`.
#[server(HomePagePropsRequest)]
pub async fn home_page_props(locale: String) -> Result<HomePageProps, ServerFnError> {
    let result = load_home_page_props(&locale).await;
    if let Err(err) = &result {
        tracing::warn!(%locale, "home page props failed: {err}");
    }
    result.map_err(|err| ServerFnError::ServerError(err.to_string()))
}

/// Languages the content index can serve, for the locale switcher.
#[server(SupportedLanguagesRequest)]
pub async fn supported_languages() -> Result<Vec<String>, ServerFnError> {
    portal_languages().map_err(|err| ServerFnError::ServerError(err.to_string()))
}

pub async fn load_home_page_props(locale: &str) -> Result<HomePageProps, AssemblyError> {
    let services = services::services().ok_or(AssemblyError::ServicesUnavailable)?;
    assembly::assemble_home_props(
        &*services.resolver,
        &*services.content,
        &context::RequestMeta::homepage(locale),
    )
    .await
}

pub fn portal_languages() -> Result<Vec<String>, AssemblyError> {
    let services = services::services().ok_or(AssemblyError::ServicesUnavailable)?;
    Ok(services.content.locales())
}
