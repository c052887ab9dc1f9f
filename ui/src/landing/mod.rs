//! Homepage composition: hero, product selections and the two article lists.

mod article_list;
pub use article_list::ArticleList;

mod product_selections;
pub use product_selections::ProductSelections;

mod layout;
pub use layout::{ArticleColumn, HomeLayout, GETTING_STARTED_KEY, POPULAR_KEY};

use api::HomePageProps;
use dioxus::prelude::*;

use crate::i18n::use_translator;
use crate::HomePageHero;

const LANDING_CSS: Asset = asset!("/assets/styling/landing.css");

/// Renders resolved homepage data. Every label on the page comes from one
/// translator for `data.main_context.current_language`.
#[component]
pub fn HomeLanding(data: HomePageProps) -> Element {
    let translator = use_translator(&data.main_context.current_language);
    let layout = HomeLayout::compose(&data, &*translator.0);

    tracing::debug!(
        lang = %layout.context.current_language,
        groups = layout.product_groups.len(),
        "home page render"
    );

    let [getting_started, popular] = layout.columns;

    rsx! {
        document::Link { rel: "stylesheet", href: LANDING_CSS }

        div { class: "home",
            HomePageHero { translator: translator.clone() }
            ProductSelections {
                product_groups: layout.product_groups,
                context: layout.context,
                translator,
            }
            div { class: "home__lists container-xl",
                div { class: "home__column home__column--left",
                    ArticleList {
                        title: getting_started.title,
                        articles: getting_started.articles,
                    }
                }
                div { class: "home__column home__column--right",
                    ArticleList { title: popular.title, articles: popular.articles }
                }
            }
        }
    }
}
