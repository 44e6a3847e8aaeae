use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EmbedError;

/// Presentation profile for the embedded document.
///
/// The set is closed: the document either shares the page with other content
/// or is the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ViewportPolicy {
    /// Fixed-height panel, page chrome visible.
    InlinePanel,
    /// Edge-to-edge, page chrome suppressed.
    FullViewport,
}

impl ViewportPolicy {
    pub const ALL: [ViewportPolicy; 2] = [ViewportPolicy::InlinePanel, ViewportPolicy::FullViewport];

    pub const fn as_str(self) -> &'static str {
        match self {
            ViewportPolicy::InlinePanel => "inline-panel",
            ViewportPolicy::FullViewport => "full-viewport",
        }
    }

    /// Container height requested from the host when none is configured.
    pub const fn default_height_px(self) -> u32 {
        match self {
            ViewportPolicy::InlinePanel => 960,
            ViewportPolicy::FullViewport => 1000,
        }
    }
}

impl fmt::Display for ViewportPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str((*self).as_str())
    }
}

impl FromStr for ViewportPolicy {
    type Err = EmbedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "inline-panel" => Ok(ViewportPolicy::InlinePanel),
            "full-viewport" => Ok(ViewportPolicy::FullViewport),
            _ => Err(EmbedError::UnsupportedProfile(s.to_string())),
        }
    }
}

impl TryFrom<String> for ViewportPolicy {
    type Error = EmbedError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<ViewportPolicy> for String {
    fn from(p: ViewportPolicy) -> Self {
        p.as_str().to_string()
    }
}
