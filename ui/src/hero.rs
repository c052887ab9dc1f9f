use dioxus::prelude::*;

use crate::i18n::SharedTranslator;

#[component]
pub fn HomePageHero(translator: SharedTranslator) -> Element {
    rsx! {
        div { id: "hero", class: "home-hero",
            div { class: "home-hero__inner container-xl",
                h1 { class: "home-hero__title", {translator.t("hero:title")} }
                p { class: "home-hero__intro", {translator.t("hero:intro")} }
                p { class: "home-hero__hint", {translator.t("hero:search_hint")} }
            }
        }
    }
}
