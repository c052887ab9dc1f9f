use dioxus::prelude::*;

use ui::components::{register_nav, NavBuilder, SiteHeader};
use ui::views::{Home, LocalizedHome};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebShell)]
    #[route("/")]
    Home {},
    #[route("/:locale")]
    LocalizedHome { locale: String },
}

// Shared theme from the ui crate, inlined so the shell has no extra asset.
const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

fn nav_home(label: &str) -> Element {
    rsx!(Link {
        class: "site-header__link",
        to: Route::Home {},
        "{label}"
    })
}

fn main() {
    dioxus::logger::initialize_default();

    #[cfg(feature = "server")]
    register_services();

    dioxus::launch(App);
}

#[cfg(feature = "server")]
fn register_services() {
    use api::config::PortalConfig;
    use api::services::{self, PortalServices};

    let config = PortalConfig::from_env().unwrap_or_else(|err| {
        tracing::warn!("invalid portal config ({err}); using defaults");
        PortalConfig::default()
    });

    match PortalServices::from_config(&config) {
        Ok(portal) => {
            tracing::info!(
                default_locale = %config.default_locale,
                locales = ?portal.content.locales(),
                "registered portal services"
            );
            services::register(portal);
        }
        Err(err) => tracing::error!("content index unavailable: {err}"),
    }
}

#[component]
fn App() -> Element {
    // Global language code; the header switcher updates it, Home re-fetches on change.
    let lang_code = use_signal(ui::i18n::preferred_language);
    use_context_provider(|| lang_code);

    register_nav(NavBuilder { home: nav_home });

    rsx! {
        document::Style { "{MAIN_CSS_INLINE}" }

        Router::<Route> {}
    }
}

/// Layout around every page: the shared header, then the routed page.
#[component]
fn WebShell() -> Element {
    let mut lang_code = use_context::<Signal<String>>();
    let route = use_route::<Route>();
    let navigator = use_navigator();

    // A locale in the URL wins over the remembered choice.
    let page_locale = match &route {
        Route::LocalizedHome { locale } => locale.clone(),
        _ => lang_code(),
    };
    let on_localized_page = matches!(route, Route::LocalizedHome { .. });

    let on_language_change = move |lang: String| {
        lang_code.set(lang.clone());
        if on_localized_page {
            navigator.push(Route::LocalizedHome { locale: lang });
        }
    };

    rsx! {
        SiteHeader { locale: page_locale, on_language_change }
        main { id: "main-content",
            Outlet::<Route> {}
        }
    }
}
