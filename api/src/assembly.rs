//! Builds [`HomePageProps`] for one request.

use thiserror::Error;

use crate::content::{ContentError, ContentProvider};
use crate::context::{ContextError, ContextResolver, RequestContext, RequestMeta, RichLink};
use crate::model::{FeaturedLink, HomePageProps, MainContext};

#[derive(Debug, Error)]
pub enum AssemblyError {
    #[error("portal services have not been registered")]
    ServicesUnavailable,
    #[error(transparent)]
    Context(#[from] ContextError),
    #[error(transparent)]
    Content(#[from] ContentError),
}

/// Keeps only `title`, `href` and `intro`, in input order.
pub fn project_links(links: &[RichLink]) -> Vec<FeaturedLink> {
    links
        .iter()
        .map(|RichLink { title, href, intro, .. }| FeaturedLink {
            href: href.clone(),
            title: title.clone(),
            intro: intro.clone(),
        })
        .collect()
}

/// Resolves the request context, reads the content for the negotiated
/// language and projects it into [`HomePageProps`].
pub async fn assemble_home_props(
    resolver: &dyn ContextResolver,
    content: &dyn ContentProvider,
    request: &RequestMeta,
) -> Result<HomePageProps, AssemblyError> {
    let main_context = resolver.resolve(request).await?;
    let request_context = content.request_context(&main_context.current_language)?;
    Ok(build_home_props(main_context, &request_context))
}

/// The projection half of [`assemble_home_props`].
pub fn build_home_props(main_context: MainContext, request_context: &RequestContext) -> HomePageProps {
    let props = HomePageProps {
        main_context,
        product_groups: request_context.product_groups.clone(),
        getting_started_links: project_links(&request_context.featured_links.getting_started),
        popular_links: project_links(&request_context.featured_links.popular),
    };

    tracing::debug!(
        language = %props.main_context.current_language,
        groups = props.product_groups.len(),
        getting_started = props.getting_started_links.len(),
        popular = props.popular_links.len(),
        "assembled home page props"
    );
    props
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::JsonContentIndex;
    use crate::context::LocaleContextResolver;
    use crate::model::DEFAULT_VERSION;
    use serde_json::json;

    fn rich(title: &str, href: &str, intro: &str) -> RichLink {
        serde_json::from_value(json!({
            "title": title,
            "href": href,
            "intro": intro,
            "fullTitle": format!("{title} (full)"),
            "authors": ["octocat"],
        }))
        .unwrap()
    }

    fn resolver() -> LocaleContextResolver {
        LocaleContextResolver::new(vec!["en-US".into(), "es-ES".into()], "en-US", DEFAULT_VERSION)
    }

    #[test]
    fn projection_keeps_order_and_three_fields() {
        let links = vec![
            rich("B", "/b", "second letter"),
            rich("A", "/a", "first letter"),
            rich("B", "/b", "second letter"),
        ];
        let projected = project_links(&links);

        assert_eq!(projected.len(), links.len());
        for (out, src) in projected.iter().zip(&links) {
            assert_eq!(out.title, src.title);
            assert_eq!(out.href, src.href);
            assert_eq!(out.intro, src.intro);
        }

        let value = serde_json::to_value(&projected[0]).unwrap();
        let keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys.len(), 3);
        assert!(!keys.contains(&"fullTitle".to_string()));
    }

    #[test]
    fn projection_of_empty_is_empty() {
        assert!(project_links(&[]).is_empty());
    }

    fn content() -> JsonContentIndex {
        let index = json!({
            "en-US": {
                "productGroups": [{
                    "name": "Get started",
                    "octicon": "RocketIcon",
                    "children": [{
                        "id": "get-started",
                        "name": "Get started",
                        "href": "/get-started",
                        "versions": [DEFAULT_VERSION]
                    }]
                }],
                "featuredLinks": {
                    "gettingStarted": [
                        {"title": "Set up Git", "href": "/set-up-git", "intro": "Git basics", "fullTitle": "x"}
                    ],
                    "popular": []
                }
            },
            "es-ES": {
                "productGroups": [],
                "featuredLinks": {
                    "gettingStarted": [],
                    "popular": [
                        {"title": "PRs", "href": "/prs", "intro": "About PRs", "type": "overview"},
                        {"title": "Forks", "href": "/forks"}
                    ]
                }
            }
        });
        JsonContentIndex::from_json(&index.to_string(), "en-US").unwrap()
    }

    #[tokio::test]
    async fn content_follows_negotiated_language() {
        let props = assemble_home_props(&resolver(), &content(), &RequestMeta::homepage("es"))
            .await
            .unwrap();

        assert_eq!(props.main_context.current_language, "es-ES");
        assert!(props.product_groups.is_empty());
        assert!(props.getting_started_links.is_empty());
        let popular: Vec<_> = props.popular_links.iter().map(|l| l.href.as_str()).collect();
        assert_eq!(popular, ["/prs", "/forks"]);
        assert_eq!(props.popular_links[1].intro, "");
    }

    #[tokio::test]
    async fn unknown_language_gets_default_content() {
        let props = assemble_home_props(&resolver(), &content(), &RequestMeta::homepage("zz-ZZ"))
            .await
            .unwrap();

        assert_eq!(props.main_context.current_language, "en-US");
        assert_eq!(props.product_groups.len(), 1);
        assert_eq!(props.product_groups[0].children[0].id, "get-started");
        assert_eq!(props.getting_started_links[0].title, "Set up Git");
    }

    #[tokio::test]
    async fn resolver_failure_propagates() {
        let broken = LocaleContextResolver::new(Vec::new(), "en-US", DEFAULT_VERSION);
        let err = assemble_home_props(&broken, &content(), &RequestMeta::homepage("en-US"))
            .await
            .unwrap_err();
        assert!(matches!(err, AssemblyError::Context(ContextError::NoLanguages)));
    }

    #[tokio::test]
    async fn missing_content_is_a_content_error() {
        let empty = JsonContentIndex::from_json("{}", "en-US").unwrap();
        let err = assemble_home_props(&resolver(), &empty, &RequestMeta::homepage("en-US"))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            AssemblyError::Content(ContentError::MissingLocale { .. })
        ));
    }
}
