use gameframe_inline::InlinedDocument;
use serde::Serialize;

use crate::config::{EmbeddingConfig, HostSelectors};
use crate::error::EmbedError;
use crate::profile::ViewportPolicy;

/// Adapter configuration options.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdaptOptions {
    /// Requested container height; `None` uses the profile default.
    pub height_px: Option<u32>,
    /// Minimum container height enforced through the host stylesheet.
    pub min_height_px: Option<u32>,
    pub selectors: HostSelectors,
}

/// Arguments for the host's "render opaque HTML in a sized container"
/// primitive.
///
/// Borrows the document: adaptation never copies or edits it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RenderDirective<'a> {
    pub document: &'a str,
    pub height_px: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_height_px: Option<u32>,
    pub scrolling: bool,
}

/// Adapt a document for the named profile with default options.
pub fn adapt<'a>(
    document: &'a InlinedDocument,
    profile: &str,
) -> Result<(RenderDirective<'a>, EmbeddingConfig), EmbedError> {
    adapt_with_options(document, profile, &AdaptOptions::default())
}

/// Adapt a document for the named profile.
///
/// Fails with [`EmbedError::UnsupportedProfile`] for names outside
/// `inline-panel` / `full-viewport`.
pub fn adapt_with_options<'a>(
    document: &'a InlinedDocument,
    profile: &str,
    opts: &AdaptOptions,
) -> Result<(RenderDirective<'a>, EmbeddingConfig), EmbedError> {
    let policy: ViewportPolicy = profile.parse()?;
    Ok(adapt_policy(document, policy, opts))
}

/// Adapt a document for an already-parsed policy.
pub fn adapt_policy<'a>(
    document: &'a InlinedDocument,
    policy: ViewportPolicy,
    opts: &AdaptOptions,
) -> (RenderDirective<'a>, EmbeddingConfig) {
    let height_px = opts.height_px.unwrap_or(policy.default_height_px());

    let config = match policy {
        ViewportPolicy::InlinePanel => {
            EmbeddingConfig::inline_panel(height_px, opts.min_height_px, &opts.selectors)
        }
        ViewportPolicy::FullViewport => {
            EmbeddingConfig::full_viewport(opts.min_height_px, &opts.selectors)
        }
    };

    log::debug!(
        "adapted {} byte document for {policy}: {height_px}px, {} chrome rule(s)",
        document.len(),
        config.chrome_suppression.len()
    );

    let directive = RenderDirective {
        document: document.as_str(),
        height_px,
        min_height_px: opts.min_height_px,
        scrolling: config.scroll_enabled,
    };

    (directive, config)
}
