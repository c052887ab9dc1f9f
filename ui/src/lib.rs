//! Shared UI crate for the docs portal. Views, components and localization
//! live here; platform crates only add routing and launch.

pub mod core;
pub mod i18n;
pub mod landing;
pub mod views;

pub mod components {
    // Localized site header (components/site_header.rs)
    pub mod site_header;
    pub use site_header::register_nav;
    pub use site_header::NavBuilder;
    pub use site_header::SiteHeader;

    pub use crate::landing::{ArticleList, ProductSelections};
}

mod hero;
pub use hero::HomePageHero;
