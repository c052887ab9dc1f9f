use api::{MainContext, ProductGroup, ProductItem};
use dioxus::prelude::*;

use crate::core::{format, links};
use crate::i18n::SharedTranslator;

#[component]
pub fn ProductSelections(
    product_groups: Vec<ProductGroup>,
    context: MainContext,
    translator: SharedTranslator,
) -> Element {
    let external_label = translator.t("product_selections:external_link");

    rsx! {
        section { class: "product-selections",
            h2 { class: "product-selections__title", {translator.t("product_selections:title")} }
            div { class: "product-selections__grid",
                for group in product_groups.into_iter() {
                    {render_group(group, &context, &external_label)}
                }
            }
        }
    }
}

fn render_group(group: ProductGroup, context: &MainContext, external_label: &str) -> Element {
    let icon_class = format!("octicon {}", format::octicon_class(group.octicon.as_str()));
    let items: Vec<Element> = group
        .children
        .iter()
        .map(|item| render_item(item, context, external_label))
        .collect();

    rsx! {
        div { class: "product-card", key: "{group.name}",
            div { class: "product-card__header",
                span { class: "{icon_class}", aria_hidden: "true" }
                h3 { class: "product-card__name", "{group.name}" }
            }
            ul { class: "product-card__items",
                {items.into_iter()}
            }
        }
    }
}

fn render_item(item: &ProductItem, context: &MainContext, external_label: &str) -> Element {
    let href = links::item_href(item, context);
    let name = item.name.clone();

    if item.external {
        let host = format::display_host(&href).unwrap_or_default().to_string();
        rsx! {
            li { class: "product-card__item product-card__item--external", key: "{item.id}",
                a {
                    class: "product-card__link",
                    href: "{href}",
                    target: "_blank",
                    rel: "noopener noreferrer",
                    title: "{host}",
                    "{name}"
                    span { class: "visually-hidden", " {external_label}" }
                    span { class: "octicon octicon-link-external", aria_hidden: "true" }
                }
            }
        }
    } else {
        rsx! {
            li { class: "product-card__item", key: "{item.id}",
                a { class: "product-card__link", href: "{href}", "{name}" }
            }
        }
    }
}
