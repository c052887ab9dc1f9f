//! Href resolution for product selection entries.

use api::model::DEFAULT_VERSION;
use api::{MainContext, ProductItem};

/// Version segment for `item`: the current version if the item has it,
/// otherwise the item's first version. `None` for the default version.
pub fn item_version<'a>(item: &'a ProductItem, current_version: &'a str) -> Option<&'a str> {
    let chosen = if item.versions.iter().any(|v| v == current_version) {
        Some(current_version)
    } else {
        item.versions.first().map(String::as_str)
    };
    chosen.filter(|v| *v != DEFAULT_VERSION)
}

/// External hrefs are used verbatim; internal ones get the language and,
/// where needed, the version prefix.
pub fn item_href(item: &ProductItem, context: &MainContext) -> String {
    if item.external {
        return item.href.clone();
    }
    match item_version(item, &context.current_version) {
        Some(version) => format!("/{}/{}{}", context.current_language, version, item.href),
        None => format!("/{}{}", context.current_language, item.href),
    }
}
