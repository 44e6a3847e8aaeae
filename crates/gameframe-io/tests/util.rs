use std::path::{Path, PathBuf};

pub fn fixtures_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("fixtures")
}

#[allow(dead_code)]
pub fn read_fixture(path: &str) -> String {
    let full = fixtures_root().join(path);
    std::fs::read_to_string(&full).unwrap_or_else(|e| {
        panic!("failed to read fixture {path} at {}: {e}", full.display())
    })
}
