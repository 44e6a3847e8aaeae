mod util;

use gameframe_core::model::{AssetBundle, AssetKind, AssetNames};
use gameframe_inline::{inline, InlineError};
use gameframe_patterns::{all_known, Layout};

fn known_forms() -> Vec<String> {
    all_known(&AssetNames::default())
        .into_iter()
        .map(|p| p.match_form)
        .collect()
}

#[test]
fn stylesheet_link_becomes_style_block() {
    let bundle = AssetBundle::new(
        r#"<head><link rel="stylesheet" href="style.css"></head><script src="game.js"></script>"#,
        "body{color:red}",
        "run();",
    );
    let doc = inline(&bundle, &Layout::Game.patterns(&AssetNames::default())).unwrap();

    assert!(doc.as_str().contains("<style>body{color:red}</style>"));
    assert!(!doc.as_str().contains(r#"href="style.css""#));
}

#[test]
fn redundant_script_forms_are_each_replaced() {
    let bundle = util::read_fixture_bundle("mixed");
    let doc = inline(&bundle, &Layout::Web.patterns(&AssetNames::default())).unwrap();

    assert_eq!(doc.as_str().matches("run();").count(), 2);
    assert!(!doc.as_str().contains(r#"<script src="/game.js"></script>"#));
    assert!(!doc.as_str().contains(r#"<script src="game.js"></script>"#));
}

#[test]
fn supported_templates_leave_no_known_form() {
    for (dir, layout) in [("game", Layout::Game), ("web", Layout::Web), ("mixed", Layout::Web)] {
        let bundle = util::read_fixture_bundle(dir);
        let doc = inline(&bundle, &layout.patterns(&AssetNames::default()))
            .unwrap_or_else(|e| panic!("{dir} must inline: {e}"));

        for form in known_forms() {
            assert!(!doc.as_str().contains(&form), "{dir}: '{form}' survived");
        }
        assert!(doc.as_str().contains(bundle.script.as_str()));
        assert!(doc.as_str().contains(bundle.stylesheet.as_str()));
    }
}

#[test]
fn well_formed_tags_are_preserved() {
    let bundle = util::read_fixture_bundle("game");
    let doc = inline(&bundle, &Layout::Game.patterns(&AssetNames::default())).unwrap();

    for tag in ["<html", "</html>", "<head>", "</head>", "<body>", "</body>", "<canvas"] {
        assert_eq!(doc.as_str().matches(tag).count(), 1, "{tag}");
    }
    assert_eq!(doc.as_str().matches("<script>").count(), 1);
    assert_eq!(doc.as_str().matches("</script>").count(), 1);
}

#[test]
fn web_template_fails_against_game_table() {
    let bundle = util::read_fixture_bundle("web");
    let err = inline(&bundle, &Layout::Game.patterns(&AssetNames::default())).unwrap_err();

    assert_eq!(
        err,
        InlineError::UnresolvedReference {
            asset: AssetKind::Stylesheet,
            url: "/style.css".to_string(),
            tag: r#"<link href="/style.css">"#.to_string(),
        }
    );
}

#[test]
fn unknown_reference_form_is_surfaced() {
    let bundle = util::read_fixture_bundle("unresolved");
    let err = inline(&bundle, &Layout::Web.patterns(&AssetNames::default())).unwrap_err();

    assert_eq!(err.code(), "unresolved_reference");
    assert_eq!(err.asset(), AssetKind::Script);
    assert_eq!(
        err.to_string(),
        r#"unresolved script reference './game.js' in <script src="./game.js">"#
    );
}

#[test]
fn unknown_form_resolves_with_full_table() {
    let bundle = util::read_fixture_bundle("unresolved");
    let doc = inline(&bundle, &all_known(&AssetNames::default())).unwrap();
    assert!(doc.as_str().contains("<script>run();</script>"));
}

#[test]
fn empty_script_is_a_missing_asset() {
    let bundle = util::read_fixture_bundle("empty-script");
    let err = inline(&bundle, &Layout::Web.patterns(&AssetNames::default())).unwrap_err();

    assert_eq!(err, InlineError::MissingAsset { asset: AssetKind::Script });
    assert_eq!(err.to_string(), "missing asset: script is empty");
}

#[test]
fn quoted_gt_does_not_hide_reference() {
    let patterns = Layout::Game.patterns(&AssetNames::default());

    let bundle = AssetBundle::new(
        r#"<head><link rel="stylesheet" href="style.css"><link title="a>b" rel="stylesheet" href="style.css "></head>"#,
        "a{}",
        "run();",
    );
    let err = inline(&bundle, &patterns).unwrap_err();
    assert_eq!(
        err,
        InlineError::UnresolvedReference {
            asset: AssetKind::Stylesheet,
            url: "style.css".to_string(),
            tag: r#"<link href="style.css">"#.to_string(),
        }
    );

    let bundle = AssetBundle::new(
        r#"<body><script src="game.js"></script><script data-cond="a>b" src="/game.js" defer></script></body>"#,
        "a{}",
        "run();",
    );
    let err = inline(&bundle, &patterns).unwrap_err();
    assert_eq!(err.asset(), AssetKind::Script);
    assert_eq!(
        err.to_string(),
        r#"unresolved script reference '/game.js' in <script src="/game.js">"#
    );
}

#[test]
fn comment_split_by_match_is_not_a_reference() {
    let bundle = AssetBundle::new(
        r#"<body><script src="game.js"></script><!-- legacy: <script src="game.js"></script> <script src="./game.js"></script> --></body>"#,
        "a{}",
        "run();",
    );
    let doc = inline(&bundle, &Layout::Game.patterns(&AssetNames::default())).unwrap();

    assert_eq!(doc.as_str().matches("<script>run();</script>").count(), 2);
    assert!(doc.as_str().contains(r#"<script src="./game.js"></script> -->"#));
}

#[test]
fn inline_script_body_split_by_match_is_not_a_reference() {
    let bundle = AssetBundle::new(
        r#"<body><script>var html = '<link rel="stylesheet" href="style.css"> <link rel="stylesheet" href="./style.css">';</script></body>"#,
        "a{}",
        "run();",
    );
    assert!(inline(&bundle, &Layout::Game.patterns(&AssetNames::default())).is_ok());
}
