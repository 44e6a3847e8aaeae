//! Fingerprints of inlined documents, for cache keys and diagnostics.

use gameframe_core::hash::{hash_hex, xxh64_hex};
use gameframe_inline::InlinedDocument;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported hash algorithm '{0}' (supported: sha256, xxh64)")]
pub struct UnsupportedAlgorithm(pub String);

/// Hex fingerprint of the document under `algorithm` (`xxh64` or `sha256`,
/// case-insensitive).
pub fn document_fingerprint(
    document: &InlinedDocument,
    algorithm: &str,
) -> Result<String, UnsupportedAlgorithm> {
    let algo = algorithm.trim().to_ascii_lowercase();
    hash_hex(&algo, document.as_str()).ok_or_else(|| UnsupportedAlgorithm(algorithm.to_string()))
}

/// Cache key for a rendered variant.
///
///   gameframe|variant=<name>|profile=<profile>|doc=xxh64:<hex>
pub fn cache_key_v1(variant: &str, profile: &str, document: &InlinedDocument) -> String {
    format!(
        "gameframe|variant={variant}|profile={profile}|doc=xxh64:{}",
        xxh64_hex(document.as_str())
    )
}
