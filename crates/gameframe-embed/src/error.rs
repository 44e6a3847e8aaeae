use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EmbedError {
    /// Profile name outside the closed set of viewport policies.
    #[error("unsupported profile '{0}' (expected inline-panel or full-viewport)")]
    UnsupportedProfile(String),
}

impl EmbedError {
    /// Stable machine-readable code.
    pub const fn code(&self) -> &'static str {
        match self {
            EmbedError::UnsupportedProfile(_) => "unsupported_profile",
        }
    }
}
