//! Reference pattern tables for the directory layouts the game has shipped in.

use core::fmt;
use core::str::FromStr;

use gameframe_core::model::{AssetKind, AssetNames, ReferencePattern};
use serde::{Deserialize, Serialize};

pub mod prefixes {
    /// Root-relative, e.g. `/style.css`.
    pub const ROOT: &str = "/";
    /// Same-directory relative, e.g. `style.css`.
    pub const SAME_DIR: &str = "";
    /// Explicit same-directory relative, e.g. `./style.css`.
    pub const DOT_RELATIVE: &str = "./";
}

/// Where the assets sit relative to the markup template.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    /// Assets beside the entry point; templates use same-directory references.
    #[default]
    Game,
    /// Assets served from a web root; templates use root-relative or
    /// same-directory references.
    Web,
}

impl Layout {
    pub const ALL: [Layout; 2] = [Layout::Game, Layout::Web];

    pub const fn as_str(self) -> &'static str {
        match self {
            Layout::Game => "game",
            Layout::Web => "web",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Layout::Game => "Assets beside the entry point, same-directory references",
            Layout::Web => "Assets under a web root, root-relative and same-directory references",
        }
    }

    pub const fn prefixes(self) -> &'static [&'static str] {
        match self {
            Layout::Game => &[prefixes::SAME_DIR],
            Layout::Web => &[prefixes::ROOT, prefixes::SAME_DIR],
        }
    }

    /// Ordered pattern table: stylesheet before script, and within each asset
    /// the prefixes in [`Layout::prefixes`] order.
    pub fn patterns(self, names: &AssetNames) -> Vec<ReferencePattern> {
        table(names, self.prefixes())
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str((*self).as_str())
    }
}

impl FromStr for Layout {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "game" => Ok(Layout::Game),
            "web" => Ok(Layout::Web),
            other => Err(format!("unknown layout '{other}' (expected game or web)")),
        }
    }
}

/// Every reference form the game has ever shipped with, across all layouts.
pub fn all_known(names: &AssetNames) -> Vec<ReferencePattern> {
    table(
        names,
        &[prefixes::ROOT, prefixes::SAME_DIR, prefixes::DOT_RELATIVE],
    )
}

fn table(names: &AssetNames, prefixes: &[&str]) -> Vec<ReferencePattern> {
    let mut out = Vec::with_capacity(prefixes.len() * 2);
    for kind in [AssetKind::Stylesheet, AssetKind::Script] {
        for prefix in prefixes {
            let path = format!("{prefix}{}", names.name(kind));
            out.push(match kind {
                AssetKind::Stylesheet => ReferencePattern::stylesheet_link(&path),
                _ => ReferencePattern::script_tag(&path),
            });
        }
    }
    out
}
