#![cfg(test)]
/*!
Theme lint for the web shell.

The shell inlines `ui/assets/theme/main.css`; components link the styling
sheets under `ui/assets/styling/`. A renamed class silently unstyles the page,
so the selectors the homepage markup relies on are pinned here. Update the
lists together with the component markup.
*/

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

const LANDING_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/styling/landing.css"
));

const HEADER_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/styling/header.css"
));

const THEME_SELECTORS: &[&str] = &[
    ":root",
    "--color-bg",
    "body {",
    ".page {",
    ".container-xl",
    ".visually-hidden",
    ".octicon {",
    ".page-home__error",
    "@media (max-width: 720px)",
];

const LANDING_SELECTORS: &[&str] = &[
    ".home-hero",
    ".home-hero__title",
    ".product-selections__grid",
    ".product-card",
    ".product-card__items",
    ".home__lists",
    ".home__column",
    ".article-list__title",
    ".article-list__items",
    ".article-list__intro",
];

const HEADER_SELECTORS: &[&str] = &[
    ".site-header",
    ".site-header__brand",
    ".site-header__links",
    ".site-header__locale",
];

fn missing<'a>(css: &str, selectors: &[&'a str]) -> Vec<&'a str> {
    selectors
        .iter()
        .copied()
        .filter(|sel| !css.contains(sel))
        .collect()
}

#[test]
fn theme_contains_required_selectors() {
    let gone = missing(THEME_CSS, THEME_SELECTORS);
    assert!(gone.is_empty(), "Missing theme selectors:\n{}", gone.join("\n"));
}

#[test]
fn landing_contains_required_selectors() {
    let gone = missing(LANDING_CSS, LANDING_SELECTORS);
    assert!(gone.is_empty(), "Missing landing selectors:\n{}", gone.join("\n"));
}

#[test]
fn header_contains_required_selectors() {
    let gone = missing(HEADER_CSS, HEADER_SELECTORS);
    assert!(gone.is_empty(), "Missing header selectors:\n{}", gone.join("\n"));
}

#[test]
fn inlined_theme_not_trivially_empty() {
    let non_ws_len = THEME_CSS.chars().filter(|c| !c.is_whitespace()).count();
    assert!(
        non_ws_len > 1_000,
        "Inlined theme appears unexpectedly small ({non_ws_len} non-whitespace chars)"
    );
}
