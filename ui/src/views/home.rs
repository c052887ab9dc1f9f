use dioxus::prelude::*;

use crate::i18n::{use_translator, FALLBACK_LANGUAGE};
use crate::landing::HomeLanding;

/// Homepage in the language carried by the global language signal.
#[component]
pub fn Home() -> Element {
    // Subscribe to global language code (if provided) so we re-fetch on change.
    let lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let locale = lang_code
        .as_ref()
        .map(|s| s())
        .unwrap_or_else(|| FALLBACK_LANGUAGE.to_string());

    rsx! {
        HomeContent { locale }
    }
}

/// Homepage for a locale taken from the URL (`/:locale`).
#[component]
pub fn LocalizedHome(locale: String) -> Element {
    rsx! {
        HomeContent { locale }
    }
}

#[component]
fn HomeContent(locale: String) -> Element {
    let translator = use_translator(&locale);
    let shown = locale.clone();

    // Awaited during server rendering; re-runs whenever the locale prop changes.
    let props = use_server_future(use_reactive!(|(locale,)| async move {
        api::home_page_props(locale).await
    }))?;

    let body = match &*props.read_unchecked() {
        Some(Ok(data)) => rsx! {
            HomeLanding { data: data.clone() }
        },
        Some(Err(err)) => {
            tracing::warn!(locale = %shown, "home page data failed: {err}");
            rsx! {
                div { class: "page-home__error", role: "alert",
                    p { {translator.t("home:error")} }
                    code { "{err}" }
                }
            }
        }
        None => rsx! {
            p { class: "page-home__loading", {translator.t("home:loading")} }
        },
    };

    rsx! {
        section { class: "page page-home", {body} }
    }
}
