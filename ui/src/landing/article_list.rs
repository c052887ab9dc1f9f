use api::FeaturedLink;
use dioxus::prelude::*;

/// Titled list of featured articles. An empty list renders a bare heading.
#[component]
pub fn ArticleList(title: String, articles: Vec<FeaturedLink>) -> Element {
    rsx! {
        section { class: "article-list",
            h2 { class: "article-list__title", "{title}" }
            ul { class: "article-list__items",
                for article in articles.into_iter() {
                    li { class: "article-list__item", key: "{article.href}",
                        a { class: "article-list__link", href: "{article.href}",
                            span { class: "article-list__link-title", "{article.title}" }
                            if !article.intro.is_empty() {
                                p { class: "article-list__intro", "{article.intro}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
