use std::path::{Path, PathBuf};

use gameframe_core::model::AssetBundle;

#[allow(dead_code)]
pub fn workspace_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
}

pub fn read_fixture(dir: &str, file: &str) -> String {
    let path = workspace_root().join("fixtures").join(dir).join(file);
    std::fs::read_to_string(&path).unwrap_or_else(|e| {
        panic!("failed to read fixture {dir}/{file} at {}: {e}", path.display())
    })
}

pub fn read_fixture_bundle(dir: &str) -> AssetBundle {
    AssetBundle::new(
        read_fixture(dir, "index.html"),
        read_fixture(dir, "style.css"),
        read_fixture(dir, "game.js"),
    )
}
