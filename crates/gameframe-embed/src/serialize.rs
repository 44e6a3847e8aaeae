use crate::config::EmbeddingConfig;

/// Serialize as minified JSON (no whitespace).
pub fn to_minified_json(config: &EmbeddingConfig) -> Result<String, serde_json::Error> {
    serde_json::to_string(config)
}

/// Serialize as pretty JSON (for debugging).
pub fn to_pretty_json(config: &EmbeddingConfig) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(config)
}
