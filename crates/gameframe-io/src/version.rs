//! Version constants for variant config files and their schema.

/// Supported `v` field of variant config files.
pub const VARIANT_CONFIG_V: u8 = 1;

/// JSON Schema bundle version for on-disk schemas under `schemas/`.
///
/// Bump this if the schema constraints change (even if `v` stays the same).
pub const SCHEMA_BUNDLE_V: u8 = 1;
