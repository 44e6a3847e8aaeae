use sha2::{Digest, Sha256};
use xxhash_rust::xxh3::xxh3_64;

/// Fingerprint algorithms accepted by [`hash_hex`], sorted.
pub const SUPPORTED_ALGORITHMS: &[&str] = &["sha256", "xxh64"];

/// Algorithm used when the caller does not pick one.
pub const DEFAULT_ALGORITHM: &str = "xxh64";

/// Compute an xxh64-style hash (hex) over UTF-8 bytes.
///
/// Implementation detail:
/// - Uses xxh3_64 (from `xxhash-rust`) for speed and stability.
/// - Returned as fixed-width 16-char lowercase hex.
pub fn xxh64_hex(input: &str) -> String {
    format!("{:016x}", xxh3_64(input.as_bytes()))
}

/// Lowercase hex SHA-256 over UTF-8 bytes (64 chars).
pub fn sha256_hex(input: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(input.as_bytes());
    hex::encode(hasher.finalize())
}

/// Hash `input` with the named algorithm.
///
/// Returns `None` for algorithms outside [`SUPPORTED_ALGORITHMS`]. Names are
/// matched exactly; callers normalize case first.
pub fn hash_hex(algorithm: &str, input: &str) -> Option<String> {
    match algorithm {
        "xxh64" => Some(xxh64_hex(input)),
        "sha256" => Some(sha256_hex(input)),
        _ => None,
    }
}
