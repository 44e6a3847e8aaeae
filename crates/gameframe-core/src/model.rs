use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the three static text resources that form the embeddable unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetKind {
    Markup,
    Stylesheet,
    Script,
}

impl AssetKind {
    pub const ALL: [AssetKind; 3] = [AssetKind::Markup, AssetKind::Stylesheet, AssetKind::Script];

    pub const fn as_str(self) -> &'static str {
        match self {
            AssetKind::Markup => "markup",
            AssetKind::Stylesheet => "stylesheet",
            AssetKind::Script => "script",
        }
    }

    pub const fn default_file_name(self) -> &'static str {
        match self {
            AssetKind::Markup => "index.html",
            AssetKind::Stylesheet => "style.css",
            AssetKind::Script => "game.js",
        }
    }
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str((*self).as_str())
    }
}

/// File names of the three assets inside an asset directory.
///
/// External reference detection is keyed on `stylesheet` and `script`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AssetNames {
    pub markup: String,
    pub stylesheet: String,
    pub script: String,
}

impl Default for AssetNames {
    fn default() -> Self {
        Self {
            markup: AssetKind::Markup.default_file_name().to_string(),
            stylesheet: AssetKind::Stylesheet.default_file_name().to_string(),
            script: AssetKind::Script.default_file_name().to_string(),
        }
    }
}

impl AssetNames {
    pub fn name(&self, kind: AssetKind) -> &str {
        match kind {
            AssetKind::Markup => &self.markup,
            AssetKind::Stylesheet => &self.stylesheet,
            AssetKind::Script => &self.script,
        }
    }
}

/// The three asset texts, fully resident before inlining begins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetBundle {
    pub markup: String,
    pub stylesheet: String,
    pub script: String,
}

impl AssetBundle {
    pub fn new(
        markup: impl Into<String>,
        stylesheet: impl Into<String>,
        script: impl Into<String>,
    ) -> Self {
        Self {
            markup: markup.into(),
            stylesheet: stylesheet.into(),
            script: script.into(),
        }
    }

    pub fn text(&self, kind: AssetKind) -> &str {
        match kind {
            AssetKind::Markup => &self.markup,
            AssetKind::Stylesheet => &self.stylesheet,
            AssetKind::Script => &self.script,
        }
    }

    /// First asset (in [`AssetKind::ALL`] order) whose text is empty or
    /// whitespace-only.
    pub fn first_missing(&self) -> Option<AssetKind> {
        AssetKind::ALL
            .into_iter()
            .find(|&kind| self.text(kind).trim().is_empty())
    }
}

/// One way the markup template may reference an asset externally.
///
/// The replacement form is implied by `asset`: a `<style>` block for the
/// stylesheet, a `<script>` block for the script.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReferencePattern {
    pub asset: AssetKind,
    pub match_form: String,
}

impl ReferencePattern {
    pub fn new(asset: AssetKind, match_form: impl Into<String>) -> Self {
        Self {
            asset,
            match_form: match_form.into(),
        }
    }

    /// `<link rel="stylesheet" href="{path}">`
    pub fn stylesheet_link(path: &str) -> Self {
        Self::new(
            AssetKind::Stylesheet,
            format!(r#"<link rel="stylesheet" href="{path}">"#),
        )
    }

    /// `<script src="{path}"></script>`
    pub fn script_tag(path: &str) -> Self {
        Self::new(AssetKind::Script, format!(r#"<script src="{path}"></script>"#))
    }

    /// The embedded block that replaces `match_form`.
    pub fn replacement_form(&self, bundle: &AssetBundle) -> String {
        embedded_block(self.asset, bundle.text(self.asset))
    }
}

/// Wrap asset text in the block that embeds it.
///
/// A closing tag sequence inside the text is written as `<\/tag` so the block
/// cannot end early. Markup is returned unchanged.
pub fn embedded_block(kind: AssetKind, text: &str) -> String {
    match kind {
        AssetKind::Stylesheet => format!("<style>{}</style>", escape_closing_tag(text, "style")),
        AssetKind::Script => format!("<script>{}</script>", escape_closing_tag(text, "script")),
        AssetKind::Markup => text.to_string(),
    }
}

fn escape_closing_tag<'a>(text: &'a str, tag: &str) -> Cow<'a, str> {
    let needle = format!("</{tag}");
    // ASCII lowercasing keeps byte offsets aligned with `text`.
    let lower = text.to_ascii_lowercase();
    if !lower.contains(&needle) {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len() + 8);
    let mut last = 0;
    for (pos, _) in lower.match_indices(&needle) {
        out.push_str(&text[last..pos]);
        out.push_str("<\\/");
        out.push_str(&text[pos + 2..pos + needle.len()]);
        last = pos + needle.len();
    }
    out.push_str(&text[last..]);
    Cow::Owned(out)
}
