//! Arranges [`HomePageProps`] into the homepage layout, independent of rendering.

use api::{FeaturedLink, HomePageProps, MainContext, ProductGroup};

use crate::core::more_docs::with_fallback_group;
use crate::i18n::Translator;

pub const GETTING_STARTED_KEY: &str = "toc:getting_started";
pub const POPULAR_KEY: &str = "toc:popular";

#[derive(Debug, Clone, PartialEq)]
pub struct ArticleColumn {
    pub title: String,
    pub articles: Vec<FeaturedLink>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HomeLayout {
    pub context: MainContext,
    pub product_groups: Vec<ProductGroup>,
    /// Left to right: getting started, then popular.
    pub columns: [ArticleColumn; 2],
}

impl HomeLayout {
    pub fn compose(props: &HomePageProps, translator: &dyn Translator) -> Self {
        Self {
            context: props.main_context.clone(),
            product_groups: with_fallback_group(&props.product_groups),
            columns: [
                ArticleColumn {
                    title: translator.translate(GETTING_STARTED_KEY),
                    articles: props.getting_started_links.clone(),
                },
                ArticleColumn {
                    title: translator.translate(POPULAR_KEY),
                    articles: props.popular_links.clone(),
                },
            ],
        }
    }
}
