use std::fmt;

use serde::{Deserialize, Serialize};

use crate::profile::ViewportPolicy;

/// How a box is sized by the host page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum SizeMode {
    /// Host framework default.
    Auto,
    /// 100% of the parent container.
    Fill,
    /// Fixed pixel size.
    Fixed { px: u32 },
    /// 100% of the viewport.
    Viewport,
}

impl fmt::Display for SizeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SizeMode::Auto => f.write_str("auto"),
            SizeMode::Fill => f.write_str("100% of container"),
            SizeMode::Fixed { px } => write!(f, "{px}px"),
            SizeMode::Viewport => f.write_str("100% of viewport"),
        }
    }
}

/// Host-page structure a chrome rule applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChromeTarget {
    PageRoot,
    Header,
    Toolbar,
    Decoration,
    StatusWidget,
    Footer,
    ContentPadding,
    BlockGap,
    ComponentContainer,
    ComponentFrame,
}

/// One CSS declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Declaration {
    pub property: String,
    pub value: String,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub important: bool,
}

impl Declaration {
    fn new(property: &str, value: &str) -> Self {
        Self {
            property: property.to_string(),
            value: value.to_string(),
            important: false,
        }
    }

    fn important(property: &str, value: &str) -> Self {
        Self {
            important: true,
            ..Self::new(property, value)
        }
    }

    pub fn to_css(&self) -> String {
        if self.important {
            format!("{}: {} !important;", self.property, self.value)
        } else {
            format!("{}: {};", self.property, self.value)
        }
    }
}

/// A host-page element to hide, zero or resize.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChromeRule {
    pub target: ChromeTarget,
    pub selectors: Vec<String>,
    pub declarations: Vec<Declaration>,
}

impl ChromeRule {
    fn new(target: ChromeTarget, selectors: &[&str], declarations: Vec<Declaration>) -> Self {
        Self {
            target,
            selectors: selectors.iter().map(|s| s.to_string()).collect(),
            declarations,
        }
    }
}

/// CSS selectors for the host framework's page structure.
///
/// Defaults match the dashboard framework the game is deployed in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HostSelectors {
    pub page_roots: Vec<String>,
    pub header: String,
    pub toolbar: String,
    pub decoration: String,
    pub status_widget: String,
    pub footer: String,
    pub content: String,
    pub block_stack: String,
    pub component: String,
}

impl Default for HostSelectors {
    fn default() -> Self {
        Self {
            page_roots: vec![
                "html".to_string(),
                "body".to_string(),
                r#"[data-testid="stAppViewContainer"]"#.to_string(),
                r#"[data-testid="stMain"]"#.to_string(),
            ],
            header: r#"header[data-testid="stHeader"]"#.to_string(),
            toolbar: r#"[data-testid="stToolbar"]"#.to_string(),
            decoration: r#"[data-testid="stDecoration"]"#.to_string(),
            status_widget: r#"[data-testid="stStatusWidget"]"#.to_string(),
            footer: "footer".to_string(),
            content: ".block-container".to_string(),
            block_stack: r#"[data-testid="stVerticalBlock"]"#.to_string(),
            component: r#"[data-testid="stComponentsV1Html"]"#.to_string(),
        }
    }
}

/// How the host page must size and present the embedding container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbeddingConfig {
    pub profile: ViewportPolicy,
    /// Rendering container.
    pub width: SizeMode,
    pub height: SizeMode,
    /// Content area the container sits in.
    pub content_width: SizeMode,
    pub content_height: SizeMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_height_px: Option<u32>,
    pub scroll_enabled: bool,
    pub chrome_suppression: Vec<ChromeRule>,
}

impl EmbeddingConfig {
    pub(crate) fn inline_panel(height_px: u32, min_height_px: Option<u32>, sel: &HostSelectors) -> Self {
        let chrome_suppression = vec![
            ChromeRule::new(
                ChromeTarget::ContentPadding,
                &[sel.content.as_str()],
                vec![
                    Declaration::new("padding-top", "0.6rem"),
                    Declaration::new("padding-bottom", "0.4rem"),
                    Declaration::new("max-width", "100%"),
                ],
            ),
            ChromeRule::new(
                ChromeTarget::Footer,
                &[sel.footer.as_str()],
                vec![Declaration::new("visibility", "hidden")],
            ),
            ChromeRule::new(
                ChromeTarget::Header,
                &[sel.header.as_str()],
                vec![Declaration::new("height", "0")],
            ),
        ];

        Self {
            profile: ViewportPolicy::InlinePanel,
            width: SizeMode::Fill,
            height: SizeMode::Fixed { px: height_px },
            content_width: SizeMode::Fill,
            content_height: SizeMode::Auto,
            min_height_px,
            scroll_enabled: false,
            chrome_suppression,
        }
    }

    pub(crate) fn full_viewport(min_height_px: Option<u32>, sel: &HostSelectors) -> Self {
        let roots: Vec<&str> = sel.page_roots.iter().map(String::as_str).collect();
        let frame = format!("{} iframe", sel.component);
        let min_height = min_height_px.map(|px| Declaration::important("min-height", &format!("{px}px")));
        let hidden = || vec![Declaration::important("display", "none")];

        let mut container = vec![
            Declaration::important("width", "100vw"),
            Declaration::important("height", "100vh"),
        ];
        container.extend(min_height.clone());

        let mut frame_decls = vec![
            Declaration::new("display", "block"),
            Declaration::important("width", "100vw"),
            Declaration::important("height", "100vh"),
        ];
        frame_decls.extend(min_height);
        frame_decls.push(Declaration::important("border", "0"));

        let chrome_suppression = vec![
            ChromeRule::new(
                ChromeTarget::PageRoot,
                &roots,
                vec![
                    Declaration::new("background", "#000"),
                    Declaration::new("height", "100%"),
                    Declaration::new("overflow", "hidden"),
                ],
            ),
            ChromeRule::new(ChromeTarget::Header, &[sel.header.as_str()], hidden()),
            ChromeRule::new(ChromeTarget::Toolbar, &[sel.toolbar.as_str()], hidden()),
            ChromeRule::new(ChromeTarget::Decoration, &[sel.decoration.as_str()], hidden()),
            ChromeRule::new(ChromeTarget::StatusWidget, &[sel.status_widget.as_str()], hidden()),
            ChromeRule::new(ChromeTarget::Footer, &[sel.footer.as_str()], hidden()),
            ChromeRule::new(
                ChromeTarget::ContentPadding,
                &[sel.content.as_str()],
                vec![
                    Declaration::important("padding", "0"),
                    Declaration::important("margin", "0"),
                    Declaration::important("max-width", "100vw"),
                    Declaration::important("height", "100vh"),
                ],
            ),
            ChromeRule::new(
                ChromeTarget::BlockGap,
                &[sel.block_stack.as_str()],
                vec![Declaration::important("gap", "0")],
            ),
            ChromeRule::new(ChromeTarget::ComponentContainer, &[sel.component.as_str()], container),
            ChromeRule::new(ChromeTarget::ComponentFrame, &[frame.as_str()], frame_decls),
        ];

        Self {
            profile: ViewportPolicy::FullViewport,
            width: SizeMode::Viewport,
            height: SizeMode::Viewport,
            content_width: SizeMode::Viewport,
            content_height: SizeMode::Viewport,
            min_height_px,
            scroll_enabled: false,
            chrome_suppression,
        }
    }

    pub fn suppresses(&self, target: ChromeTarget) -> bool {
        self.chrome_suppression.iter().any(|r| r.target == target)
    }

    /// Render the chrome rules as a single `<style>` block for the host page.
    pub fn host_stylesheet(&self) -> String {
        let mut out = String::from("<style>\n");
        for (i, rule) in self.chrome_suppression.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            out.push_str("  ");
            out.push_str(&rule.selectors.join(",\n  "));
            out.push_str(" {\n");
            for d in &rule.declarations {
                out.push_str("    ");
                out.push_str(&d.to_css());
                out.push('\n');
            }
            out.push_str("  }\n");
        }
        out.push_str("</style>\n");
        out
    }
}
