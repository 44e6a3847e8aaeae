//! Reading the three assets from disk.

use std::fs;
use std::path::{Path, PathBuf};

use gameframe_core::model::{AssetBundle, AssetKind, AssetNames};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {asset} asset at {}: {source}", path.display())]
    Io {
        asset: AssetKind,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Read markup, stylesheet and script from `dir` as UTF-8.
///
/// Empty files load fine; the inliner is the one that rejects them.
pub fn load_bundle(dir: &Path, names: &AssetNames) -> Result<AssetBundle, LoadError> {
    let read = |asset: AssetKind| {
        let path = dir.join(names.name(asset));
        log::debug!("reading {asset} from {}", path.display());
        fs::read_to_string(&path).map_err(|source| LoadError::Io { asset, path, source })
    };

    Ok(AssetBundle {
        markup: read(AssetKind::Markup)?,
        stylesheet: read(AssetKind::Stylesheet)?,
        script: read(AssetKind::Script)?,
    })
}
