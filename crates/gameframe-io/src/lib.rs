//! `gameframe-io` is the single supported public entrypoint for embedding the
//! game in a host page: asset loading, inlining, embedding adaptation,
//! deployment variants and the render pipeline.
//!
//! This crate contains **no** game logic. The script asset is opaque text.

// -----------------------------------------------------------------------------
// Public API contract
// -----------------------------------------------------------------------------
//
// Consumers SHOULD import from `gameframe_io::prelude::*`.
// Anything not re-exported via the prelude is considered internal and may change
// without notice.

// Re-export the asset model.
#[doc(hidden)]
pub mod core {
    pub use gameframe_core::hash::{hash_hex, sha256_hex, xxh64_hex};
    pub use gameframe_core::model::{AssetBundle, AssetKind, AssetNames, ReferencePattern};
}

// Re-export the pattern tables.
#[doc(hidden)]
pub mod patterns {
    pub use gameframe_patterns::{all_known, prefixes, Layout};
}

// Re-export the inliner.
#[doc(hidden)]
pub mod inline {
    pub use gameframe_inline::{
        find_external_references, inline, inline_with_options, inline_with_report,
        ExternalReference, InlineError, InlineOptions, InlineReport, InlinedDocument, PatternHit,
    };
}

// Re-export the embedding adapter.
#[doc(hidden)]
pub mod embed {
    pub use gameframe_embed::serialize::{to_minified_json, to_pretty_json};
    pub use gameframe_embed::{
        adapt, adapt_policy, adapt_with_options, AdaptOptions, ChromeRule, ChromeTarget,
        Declaration, EmbedError, EmbeddingConfig, HostSelectors, RenderDirective, SizeMode,
        ViewportPolicy,
    };
}

/// Fingerprints and cache keys for inlined documents.
pub mod hashing;

/// Reading assets from disk.
pub mod loader;

/// Render pipeline and host renderers.
pub mod render;

/// Built-in deployment variants and page settings.
pub mod variant;

/// Variant config file parsing.
pub mod variant_json;

/// Version constants for config files and schemas.
pub mod version;

/// Convenience prelude for consumers.
///
/// This is the **only supported** import surface for external users.
pub mod prelude {
    pub use crate::core::{AssetBundle, AssetKind, AssetNames, ReferencePattern};
    pub use crate::embed::{
        adapt, adapt_policy, adapt_with_options, AdaptOptions, ChromeTarget, EmbedError,
        EmbeddingConfig, RenderDirective, SizeMode, ViewportPolicy,
    };
    pub use crate::inline::{
        inline, inline_with_options, inline_with_report, InlineError, InlineOptions,
        InlineReport, InlinedDocument,
    };
    pub use crate::loader::{load_bundle, LoadError};
    pub use crate::patterns::{all_known, Layout};
    pub use crate::render::{render_variant, HostRenderer, RenderError, Rendered, StaticPageRenderer};
    pub use crate::variant::{DeploymentVariant, PageConfig, PageLayout, SidebarState, BUILTIN_VARIANTS};
    pub use crate::variant_json::{parse_variant_json_str, VariantJsonError};
    pub use crate::hashing;
}
