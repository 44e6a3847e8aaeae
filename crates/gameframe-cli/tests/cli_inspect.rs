use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

fn fixture_dir(name: &str) -> std::path::PathBuf {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("fixtures")
        .join(name)
}

#[test]
fn inspect_lists_every_pattern_in_the_layout_table() {
    let dir = fixture_dir("mixed");

    let mut cmd = cargo_bin_cmd!("gameframe");
    cmd.args(["inspect", dir.to_str().unwrap(), "--layout", "web"]);

    let out = cmd.assert().success().get_output().stdout.clone();
    let s = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = s.lines().collect();

    assert_eq!(lines.len(), 5);
    assert!(lines[0].starts_with("pattern"));
    assert!(lines[0].ends_with("matches"));
    assert!(s.contains(r#"<script src="/game.js"></script>"#));
    for line in &lines[1..] {
        assert!(line.ends_with(" 1") || line.ends_with(" 0"), "row: {line}");
    }
}

#[test]
fn inspect_game_fixture_matches_each_relative_form_once() {
    let dir = fixture_dir("game");

    let mut cmd = cargo_bin_cmd!("gameframe");
    cmd.args(["inspect", dir.to_str().unwrap()]);

    cmd.assert()
        .success()
        .stdout(predicate::str::is_match(r#"href="style.css">\s+stylesheet\s+1"#).unwrap())
        .stdout(predicate::str::is_match(r#"src="game.js"></script>\s+script\s+1"#).unwrap());
}
