use gameframe_core::model::AssetKind;
use thiserror::Error;

/// Failures of the asset inliner.
///
/// Both variants are packaging or consistency errors. They are never retried
/// and never downgraded to a partially inlined document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InlineError {
    /// An asset text was empty or whitespace-only when inlining started.
    #[error("missing asset: {asset} is empty")]
    MissingAsset { asset: AssetKind },

    /// An external reference to the stylesheet or script survived every known
    /// pattern.
    #[error("unresolved {asset} reference '{url}' in {tag}")]
    UnresolvedReference {
        asset: AssetKind,
        url: String,
        tag: String,
    },
}

impl InlineError {
    /// Stable machine-readable code.
    pub const fn code(&self) -> &'static str {
        match self {
            InlineError::MissingAsset { .. } => "missing_asset",
            InlineError::UnresolvedReference { .. } => "unresolved_reference",
        }
    }

    pub const fn asset(&self) -> AssetKind {
        match self {
            InlineError::MissingAsset { asset } | InlineError::UnresolvedReference { asset, .. } => *asset,
        }
    }
}
