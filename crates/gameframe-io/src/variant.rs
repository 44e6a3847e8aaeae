//! Deployment variants: which assets, which reference table, which profile.

use std::path::{Path, PathBuf};

use gameframe_core::model::{AssetNames, ReferencePattern};
use gameframe_embed::{AdaptOptions, ViewportPolicy};
use gameframe_inline::InlineOptions;
use gameframe_patterns::Layout;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const BUILTIN_VARIANTS: [&str; 3] = ["classic", "hyperdrive", "wrapper"];

const TITLE: &str = "Void Runner";
const JOYSTICK: &str = "🕹️";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageLayout {
    Centered,
    #[default]
    Wide,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SidebarState {
    #[default]
    Auto,
    Expanded,
    Collapsed,
}

impl PageLayout {
    pub const fn as_str(self) -> &'static str {
        match self {
            PageLayout::Centered => "centered",
            PageLayout::Wide => "wide",
        }
    }
}

impl SidebarState {
    pub const fn as_str(self) -> &'static str {
        match self {
            SidebarState::Auto => "auto",
            SidebarState::Expanded => "expanded",
            SidebarState::Collapsed => "collapsed",
        }
    }
}

/// Static page settings, supplied once when the host page is set up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PageConfig {
    pub title: String,
    #[serde(default = "default_icon")]
    pub icon: String,
    #[serde(default)]
    pub layout: PageLayout,
    #[serde(default)]
    pub sidebar: SidebarState,
    /// Visible page heading above the embed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heading: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

fn default_icon() -> String {
    JOYSTICK.to_string()
}

impl PageConfig {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            icon: default_icon(),
            layout: PageLayout::Wide,
            sidebar: SidebarState::Auto,
            heading: None,
            caption: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown variant '{0}' (built-in: classic, hyperdrive, wrapper)")]
pub struct UnknownVariant(pub String);

/// One deployment of the game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeploymentVariant {
    pub name: String,
    /// Asset directory, relative to the deployment root.
    pub asset_dir: PathBuf,
    pub layout: Layout,
    pub profile: ViewportPolicy,
    pub page: PageConfig,
    /// `None` uses the profile default.
    pub height_px: Option<u32>,
    pub min_height_px: Option<u32>,
    pub assets: AssetNames,
}

impl DeploymentVariant {
    pub fn builtin(name: &str) -> Result<Self, UnknownVariant> {
        match name.trim().to_ascii_lowercase().as_str() {
            "classic" => Ok(Self::classic()),
            "hyperdrive" => Ok(Self::hyperdrive()),
            "wrapper" => Ok(Self::wrapper()),
            _ => Err(UnknownVariant(name.to_string())),
        }
    }

    /// Game beside the entry point, shown as a panel under a heading.
    pub fn classic() -> Self {
        Self {
            name: "classic".to_string(),
            asset_dir: PathBuf::from("game"),
            layout: Layout::Game,
            profile: ViewportPolicy::InlinePanel,
            page: PageConfig {
                heading: Some(TITLE.to_string()),
                caption: Some("Arcade survival game with visual FX and synthesized audio".to_string()),
                ..PageConfig::titled(TITLE)
            },
            height_px: Some(960),
            min_height_px: None,
            assets: AssetNames::default(),
        }
    }

    /// Game beside the entry point, filling the page.
    pub fn hyperdrive() -> Self {
        Self {
            name: "hyperdrive".to_string(),
            asset_dir: PathBuf::from("game"),
            layout: Layout::Game,
            profile: ViewportPolicy::FullViewport,
            page: PageConfig {
                icon: "🚀".to_string(),
                sidebar: SidebarState::Collapsed,
                ..PageConfig::titled("Void Runner: Hyperdrive Edition")
            },
            height_px: Some(1000),
            min_height_px: None,
            assets: AssetNames::default(),
        }
    }

    /// Game under a web root, filling the page with a minimum height.
    pub fn wrapper() -> Self {
        Self {
            name: "wrapper".to_string(),
            asset_dir: PathBuf::from("web"),
            layout: Layout::Web,
            profile: ViewportPolicy::FullViewport,
            page: PageConfig {
                sidebar: SidebarState::Collapsed,
                ..PageConfig::titled(TITLE)
            },
            height_px: Some(1120),
            min_height_px: Some(1000),
            assets: AssetNames::default(),
        }
    }

    pub fn asset_path(&self, root: &Path) -> PathBuf {
        root.join(&self.asset_dir)
    }

    pub fn patterns(&self) -> Vec<ReferencePattern> {
        self.layout.patterns(&self.assets)
    }

    pub fn inline_options(&self) -> InlineOptions {
        InlineOptions {
            names: self.assets.clone(),
        }
    }

    pub fn adapt_options(&self) -> AdaptOptions {
        AdaptOptions {
            height_px: self.height_px,
            min_height_px: self.min_height_px,
            ..AdaptOptions::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtins_resolve_by_name() {
        for name in BUILTIN_VARIANTS {
            let v = DeploymentVariant::builtin(name).unwrap();
            assert_eq!(v.name, name);
            assert_eq!(v.page.layout, PageLayout::Wide);
        }
        assert_eq!(
            DeploymentVariant::builtin("retro").unwrap_err().to_string(),
            "unknown variant 'retro' (built-in: classic, hyperdrive, wrapper)"
        );
    }

    #[test]
    fn only_classic_is_a_panel() {
        assert_eq!(DeploymentVariant::classic().profile, ViewportPolicy::InlinePanel);
        assert_eq!(DeploymentVariant::hyperdrive().profile, ViewportPolicy::FullViewport);
        assert_eq!(DeploymentVariant::wrapper().profile, ViewportPolicy::FullViewport);
    }

    #[test]
    fn wrapper_accepts_both_reference_conventions() {
        let forms: Vec<String> = DeploymentVariant::wrapper()
            .patterns()
            .into_iter()
            .map(|p| p.match_form)
            .collect();
        assert!(forms.contains(&r#"<script src="/game.js"></script>"#.to_string()));
        assert!(forms.contains(&r#"<script src="game.js"></script>"#.to_string()));
    }

    #[test]
    fn adapt_options_carry_heights() {
        let opts = DeploymentVariant::wrapper().adapt_options();
        assert_eq!(opts.height_px, Some(1120));
        assert_eq!(opts.min_height_px, Some(1000));
    }
}
