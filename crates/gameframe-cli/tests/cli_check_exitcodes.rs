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
fn check_ok_exits_0_and_prints_ok() {
    let dir = fixture_dir("game");

    let mut cmd = cargo_bin_cmd!("gameframe");
    cmd.args(["check", dir.to_str().unwrap()]);

    cmd.assert().success().code(0).stdout("OK\n");
}

#[test]
fn check_unresolved_reference_exits_2() {
    let dir = fixture_dir("unresolved");

    let mut cmd = cargo_bin_cmd!("gameframe");
    cmd.args(["check", dir.to_str().unwrap(), "--layout", "web"]);

    cmd.assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains(
            r#"unresolved script reference './game.js' in <script src="./game.js">"#,
        ));
}

#[test]
fn check_mixed_conventions_need_the_web_table() {
    let dir = fixture_dir("mixed");

    let mut cmd = cargo_bin_cmd!("gameframe");
    cmd.args(["check", dir.to_str().unwrap()]);
    cmd.assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("'/game.js'"));

    let mut cmd = cargo_bin_cmd!("gameframe");
    cmd.args(["check", dir.to_str().unwrap(), "--layout", "web"]);
    cmd.assert().success().stdout("OK\n");

    let mut cmd = cargo_bin_cmd!("gameframe");
    cmd.args(["check", dir.to_str().unwrap(), "--all-forms"]);
    cmd.assert().success().stdout("OK\n");
}

#[test]
fn check_can_emit_structured_diagnostics_json() {
    let dir = fixture_dir("empty-script");

    let mut cmd = cargo_bin_cmd!("gameframe");
    cmd.args(["check", dir.to_str().unwrap(), "--diagnostics-json"]);

    cmd.assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("\"code\":\"missing_asset\""))
        .stderr(predicate::str::contains("missing asset: script is empty"));
}

#[test]
fn check_missing_directory_exits_1() {
    let dir = fixture_dir("does-not-exist");

    let mut cmd = cargo_bin_cmd!("gameframe");
    cmd.args(["check", dir.to_str().unwrap()]);

    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("failed to read markup asset at"));
}

#[test]
fn unknown_layout_is_a_usage_error() {
    let dir = fixture_dir("game");

    let mut cmd = cargo_bin_cmd!("gameframe");
    cmd.args(["check", dir.to_str().unwrap(), "--layout", "desktop"]);

    cmd.assert().failure().stderr(predicate::str::contains("desktop"));
}
