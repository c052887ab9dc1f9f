//! Formatting helpers for presentation.

/// CSS class for an Octicon name: `PencilIcon` → `octicon-pencil`,
/// `ShieldLockIcon` → `octicon-shield-lock`.
pub fn octicon_class(name: &str) -> String {
    let base = name.strip_suffix("Icon").unwrap_or(name);
    let mut class = String::from("octicon");
    for (i, ch) in base.chars().enumerate() {
        if ch.is_ascii_uppercase() || i == 0 {
            class.push('-');
        }
        class.push(ch.to_ascii_lowercase());
    }
    class
}

/// Host of an absolute URL, for labelling external links.
pub fn display_host(href: &str) -> Option<&str> {
    let rest = href
        .strip_prefix("https://")
        .or_else(|| href.strip_prefix("http://"))?;
    let host = rest.split(['/', '?', '#']).next()?;
    (!host.is_empty()).then_some(host.trim_start_matches("www."))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn octicon_classes() {
        assert_eq!(octicon_class("PencilIcon"), "octicon-pencil");
        assert_eq!(octicon_class("ShieldLockIcon"), "octicon-shield-lock");
        assert_eq!(octicon_class("rocket"), "octicon-rocket");
    }

    #[test]
    fn hosts() {
        assert_eq!(
            display_host("https://www.electronjs.org/docs/latest"),
            Some("electronjs.org")
        );
        assert_eq!(display_host("https://docs.npmjs.com/"), Some("docs.npmjs.com"));
        assert_eq!(display_host("/get-started"), None);
    }
}
