//! Detection of external stylesheet/script references left in markup.
//!
//! Detection does not depend on the pattern table. The markup is parsed as an
//! HTML document and every `<link href>` and `<script src>` element is checked;
//! the ones whose path names the stylesheet or script file in any directory
//! form are reported. Comments and raw-text script bodies never yield
//! elements, so references inside them are not reported.

use gameframe_core::model::{AssetKind, AssetNames};
use once_cell::sync::Lazy;
use scraper::{Html, Selector};
use serde::Serialize;

// Hardcoded and syntactically valid; a parse failure is a bug in this string.
static REFERENCE_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("link[href], script[src]")
        .expect("BUG: hardcoded selector 'link[href], script[src]' is invalid")
});

/// An external reference to the stylesheet or script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExternalReference {
    pub asset: AssetKind,
    /// Attribute value after entity decoding.
    pub url: String,
    /// The element and its referencing attribute, e.g. `<script src="game.js">`.
    pub tag: String,
}

/// Scan `markup` for external references to the stylesheet or script, in
/// document order.
pub fn find_external_references(markup: &str, names: &AssetNames) -> Vec<ExternalReference> {
    let document = Html::parse_document(markup);
    let mut out = Vec::new();

    for element in document.select(&REFERENCE_SELECTOR) {
        let name = element.value().name();
        let attr = if name == "link" { "href" } else { "src" };
        let Some(url) = element.value().attr(attr) else {
            continue;
        };

        if let Some(asset) = referenced_asset(url, names) {
            out.push(ExternalReference {
                asset,
                url: url.trim().to_string(),
                tag: format!(r#"<{name} {attr}="{}">"#, url.trim()),
            });
        }
    }

    out
}

fn referenced_asset(url: &str, names: &AssetNames) -> Option<AssetKind> {
    let path = url.split(['?', '#']).next().unwrap_or(url).trim();
    [AssetKind::Stylesheet, AssetKind::Script]
        .into_iter()
        .find(|&kind| {
            let name = names.name(kind);
            !name.is_empty()
                && (path == name
                    || path
                        .strip_suffix(name)
                        .is_some_and(|head| head.ends_with('/')))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(markup: &str) -> Vec<(AssetKind, String)> {
        find_external_references(markup, &AssetNames::default())
            .into_iter()
            .map(|r| (r.asset, r.url))
            .collect()
    }

    #[test]
    fn finds_every_directory_form() {
        let found = scan(
            r#"<link href="./style.css" rel="stylesheet"><script src='assets/game.js' defer></script>"#,
        );
        assert_eq!(
            found,
            vec![
                (AssetKind::Stylesheet, "./style.css".to_string()),
                (AssetKind::Script, "assets/game.js".to_string()),
            ]
        );
    }

    #[test]
    fn tag_and_attribute_case_is_ignored() {
        let found = scan(r#"<SCRIPT SRC=game.js?v=3></SCRIPT>"#);
        assert_eq!(found, vec![(AssetKind::Script, "game.js?v=3".to_string())]);
    }

    #[test]
    fn preload_link_to_script_counts() {
        let found = scan(r#"<link rel="preload" as="script" href="/game.js">"#);
        assert_eq!(found, vec![(AssetKind::Script, "/game.js".to_string())]);
    }

    #[test]
    fn unrelated_and_lookalike_references_are_ignored() {
        assert!(scan(r#"<link rel="icon" href="favicon.ico">"#).is_empty());
        assert!(scan(r#"<script src="mygame.js"></script>"#).is_empty());
        assert!(scan(r#"<a href="style.css">source</a>"#).is_empty());
        assert!(scan(r#"<linkage href="style.css">"#).is_empty());
    }

    #[test]
    fn comments_and_inline_script_bodies_are_skipped() {
        let markup = r#"<!-- <script src="game.js"></script> -->
<script>const tpl = '<link rel="stylesheet" href="style.css">';</script>
<p>ok</p>"#;
        assert!(scan(markup).is_empty());
    }

    #[test]
    fn quoted_gt_does_not_hide_reference() {
        let found = scan(
            r#"<link title="a>b" rel="stylesheet" href="style.css "><script data-cond="a>b" src="/game.js" defer></script>"#,
        );
        assert_eq!(
            found,
            vec![
                (AssetKind::Stylesheet, "style.css".to_string()),
                (AssetKind::Script, "/game.js".to_string()),
            ]
        );
    }

    #[test]
    fn self_closing_and_extended_tags_are_reported() {
        let found = scan(
            r#"<link rel="stylesheet" href="style.css" media="all"/><script type="module" src="game.js" async/></script>"#,
        );
        assert_eq!(found.len(), 2);
    }

    #[test]
    fn entity_encoded_paths_are_decoded() {
        let found = scan(r#"<link rel="stylesheet" href="style&#46;css">"#);
        assert_eq!(found, vec![(AssetKind::Stylesheet, "style.css".to_string())]);
    }

    #[test]
    fn reports_element_and_attribute() {
        let refs = find_external_references(
            r#"<p></p><script defer src="game.js"></script>"#,
            &AssetNames::default(),
        );
        assert_eq!(refs.len(), 1);
        assert_eq!(refs[0].tag, r#"<script src="game.js">"#);
    }
}
