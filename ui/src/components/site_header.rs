use crate::i18n::{self, use_translator};
use dioxus::prelude::*;
use once_cell::sync::OnceCell;

const HEADER_CSS: Asset = asset!("/assets/styling/header.css");

/// Platforms register a `NavBuilder` so the header can link home without
/// knowing their `Route` enum. Without one the header renders raw `children`.
///
/// ```ignore
/// use ui::components::site_header::{NavBuilder, register_nav};
/// register_nav(NavBuilder {
///     home: |label| rsx!( Link { class: "site-header__link", to: Route::Home {}, "{label}" } ),
/// });
/// ```
pub struct NavBuilder {
    // Must return a link whose only child is the localized label.
    pub home: fn(label: &str) -> Element,
}

static NAV_BUILDER: OnceCell<NavBuilder> = OnceCell::new();

pub fn register_nav(builder: NavBuilder) {
    let _ = NAV_BUILDER.set(builder);
}

/// Locales offered by the switcher: the ones the content index serves, or the
/// embedded translations when the server list is unavailable.
pub fn switcher_languages(served: &[String], embedded: &[String]) -> Vec<String> {
    if served.is_empty() {
        embedded.to_vec()
    } else {
        served.to_vec()
    }
}

/// Header for a page rendered in `locale`. Picking another language calls
/// `on_language_change` with its tag; the platform decides what to navigate.
#[component]
pub fn SiteHeader(
    locale: String,
    on_language_change: EventHandler<String>,
    children: Element,
) -> Element {
    let translator = use_translator(&locale);
    let embedded = use_hook(i18n::available_languages);
    let served = use_server_future(api::supported_languages)?;

    let langs = {
        let served = served.read();
        match &*served {
            Some(Ok(list)) => switcher_languages(list, &embedded),
            _ => switcher_languages(&[], &embedded),
        }
    };
    let show_switcher = langs.len() > 1;

    tracing::debug!(lang = %locale, languages = langs.len(), "site header render");

    let internal_nav: Option<Element> = NAV_BUILDER.get().map(|b| {
        let home = (b.home)(&translator.t("nav:home"));
        rsx! {
            nav { class: "site-header__links", {home} }
        }
    });

    let site_name = translator.t("site:name");
    let tagline = translator.t("site:tagline");

    rsx! {
        document::Link { rel: "stylesheet", href: HEADER_CSS }

        header { id: "site-header", class: "site-header",
            div { class: "site-header__inner",
                div { class: "site-header__brand",
                    span { class: "site-header__brand-mark octicon octicon-book", aria_hidden: "true" }
                    span { class: "site-header__brand-name", "{site_name}" }
                    span { class: "site-header__tagline", "{tagline}" }
                }

                if let Some(nav) = internal_nav {
                    {nav}
                } else {
                    nav { class: "site-header__links", {children} }
                }

                if show_switcher {
                    div { class: "site-header__locale",
                        label {
                            class: "visually-hidden",
                            r#for: "locale-select",
                            {translator.t("nav:language_label")}
                        }
                        select {
                            id: "locale-select",
                            value: "{locale}",
                            oninput: move |evt: FormEvent| on_language_change.call(evt.value()),
                            for code in langs {
                                option {
                                    key: "{code}",
                                    value: "{code}",
                                    selected: code == locale,
                                    "{code}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
