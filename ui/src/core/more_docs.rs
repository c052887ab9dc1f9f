//! The "More docs" category of external documentation sites.
//!
//! The homepage has no sidebar, so these links are merged into the product
//! selections when the content index does not already provide the group.

use api::{Octicon, ProductGroup, ProductItem};

pub const MORE_DOCS_GROUP: &str = "More docs";

pub fn more_docs_group() -> ProductGroup {
    ProductGroup {
        name: MORE_DOCS_GROUP.to_string(),
        octicon: Octicon::new("PencilIcon"),
        children: vec![
            ProductItem::external("electron", "Electron", "https://www.electronjs.org/docs/latest"),
            ProductItem::external("codeql", "CodeQL", "https://codeql.github.com/docs/"),
            ProductItem::external("npm", "npm", "https://docs.npmjs.com/"),
        ],
    }
}

/// Returns `groups` with [`more_docs_group`] appended unless a group named
/// exactly `More docs` is already present. `groups` itself is never touched.
pub fn with_fallback_group(groups: &[ProductGroup]) -> Vec<ProductGroup> {
    let mut merged = groups.to_vec();
    if !groups.iter().any(|group| group.name == MORE_DOCS_GROUP) {
        merged.push(more_docs_group());
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(name: &str) -> ProductGroup {
        ProductGroup {
            name: name.to_string(),
            octicon: Octicon::new("RocketIcon"),
            children: Vec::new(),
        }
    }

    #[test]
    fn appends_fallback_when_absent() {
        let groups = vec![group("Get started"), group("Security")];
        let merged = with_fallback_group(&groups);

        assert_eq!(merged.len(), groups.len() + 1);
        assert_eq!(&merged[..2], &groups[..]);
        let added: Vec<_> = merged.iter().filter(|g| g.name == MORE_DOCS_GROUP).collect();
        assert_eq!(added.len(), 1);

        let ids: Vec<_> = added[0].children.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["electron", "codeql", "npm"]);
        assert!(added[0]
            .children
            .iter()
            .all(|c| c.external && c.versions.is_empty()));
        assert_eq!(added[0].octicon.as_str(), "PencilIcon");
    }

    #[test]
    fn existing_group_is_not_duplicated() {
        let mut custom = group(MORE_DOCS_GROUP);
        custom.children.push(ProductItem::external("npm", "npm", "https://docs.npmjs.com/"));
        let groups = vec![group("Get started"), custom];

        let merged = with_fallback_group(&groups);
        assert_eq!(merged, groups);
    }

    #[test]
    fn match_is_case_sensitive() {
        let groups = vec![group("more docs")];
        let merged = with_fallback_group(&groups);
        assert_eq!(merged.len(), 2);
    }

    #[test]
    fn input_is_left_untouched() {
        let groups = vec![group("Get started")];
        let before = groups.clone();
        let _ = with_fallback_group(&groups);
        let _ = with_fallback_group(&groups);
        assert_eq!(groups, before);
    }

    #[test]
    fn empty_input_yields_only_fallback() {
        let merged = with_fallback_group(&[]);
        assert_eq!(merged, vec![more_docs_group()]);
    }

    #[test]
    fn merge_is_idempotent() {
        let once = with_fallback_group(&[group("Get started")]);
        let twice = with_fallback_group(&once);
        assert_eq!(once, twice);
    }
}
