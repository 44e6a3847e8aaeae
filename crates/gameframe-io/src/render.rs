//! The per-request render pipeline and a static host-page renderer.

use std::path::Path;

use gameframe_embed::{adapt_policy, EmbeddingConfig, RenderDirective};
use gameframe_inline::{inline_with_report, InlineError, InlineReport};
use html_escape::{encode_double_quoted_attribute, encode_text};
use thiserror::Error;

use crate::hashing::cache_key_v1;
use crate::loader::{load_bundle, LoadError};
use crate::variant::{DeploymentVariant, PageConfig, PageLayout};

/// Content width of the dashboard framework's centered layout.
const CENTERED_MAX_WIDTH_PX: u32 = 736;

/// The host framework's "render opaque HTML in a sized container" primitive.
///
/// Implementations must isolate the document from the host page's own
/// script and style scope.
pub trait HostRenderer {
    type Output;

    fn render(
        &mut self,
        page: &PageConfig,
        host_stylesheet: &str,
        directive: &RenderDirective<'_>,
    ) -> Self::Output;
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error(transparent)]
    Inline(#[from] InlineError),
}

impl RenderError {
    pub fn code(&self) -> &'static str {
        match self {
            RenderError::Load(_) => "load_failed",
            RenderError::Inline(e) => e.code(),
        }
    }
}

/// Everything one render request produced.
#[derive(Debug, Clone)]
pub struct Rendered<T> {
    pub output: T,
    pub config: EmbeddingConfig,
    pub report: InlineReport,
    pub cache_key: String,
}

/// Load, inline, adapt and hand off to `renderer`, once.
///
/// `root` is the deployment root; the variant's asset directory is resolved
/// against it.
pub fn render_variant<R: HostRenderer>(
    root: &Path,
    variant: &DeploymentVariant,
    renderer: &mut R,
) -> Result<Rendered<R::Output>, RenderError> {
    let bundle = load_bundle(&variant.asset_path(root), &variant.assets)?;
    let (document, report) =
        inline_with_report(&bundle, &variant.patterns(), &variant.inline_options())?;

    let (directive, config) = adapt_policy(&document, variant.profile, &variant.adapt_options());
    let output = renderer.render(&variant.page, &config.host_stylesheet(), &directive);

    let cache_key = cache_key_v1(&variant.name, variant.profile.as_str(), &document);
    log::info!(
        "rendered variant '{}' ({}, {}px): {}",
        variant.name,
        variant.profile,
        directive.height_px,
        cache_key
    );

    Ok(Rendered {
        output,
        config,
        report,
        cache_key,
    })
}

/// Renders a standalone host page that embeds the document in a sandboxed
/// `<iframe srcdoc>`, using the dashboard framework's page structure so the
/// host stylesheet applies.
///
/// The page layout and sidebar state are written as `data-layout` /
/// `data-sidebar` on the app container; the centered layout also caps the
/// content width.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticPageRenderer;

impl HostRenderer for StaticPageRenderer {
    type Output = String;

    fn render(
        &mut self,
        page: &PageConfig,
        host_stylesheet: &str,
        directive: &RenderDirective<'_>,
    ) -> String {
        let icon = format!(
            "data:image/svg+xml,<svg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 100 100'><text y='.9em' font-size='90'>{}</text></svg>",
            page.icon
        );

        let mut frame_style = String::from("border:0");
        if let Some(px) = directive.min_height_px {
            frame_style.push_str(&format!(";min-height:{px}px"));
        }

        let mut out = String::with_capacity(directive.document.len() * 2 + 2048);
        out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
        out.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
        out.push_str(&format!("<title>{}</title>\n", encode_text(&page.title)));
        out.push_str(&format!(
            "<link rel=\"icon\" href=\"{}\">\n",
            encode_double_quoted_attribute(&icon)
        ));
        out.push_str(host_stylesheet);
        out.push_str("</head>\n<body>\n");
        out.push_str(&format!(
            "<div data-testid=\"stAppViewContainer\" data-layout=\"{}\" data-sidebar=\"{}\">\n",
            page.layout.as_str(),
            page.sidebar.as_str()
        ));
        out.push_str("<header data-testid=\"stHeader\"><div data-testid=\"stDecoration\"></div><div data-testid=\"stToolbar\"></div></header>\n");
        out.push_str("<main data-testid=\"stMain\">\n");
        match page.layout {
            PageLayout::Centered => out.push_str(&format!(
                "<div class=\"block-container\" style=\"max-width:{CENTERED_MAX_WIDTH_PX}px;margin:0 auto\">\n"
            )),
            PageLayout::Wide => out.push_str("<div class=\"block-container\">\n"),
        }
        out.push_str("<div data-testid=\"stVerticalBlock\">\n");
        if let Some(heading) = &page.heading {
            out.push_str(&format!("<h1>{}</h1>\n", encode_text(heading)));
        }
        if let Some(caption) = &page.caption {
            out.push_str(&format!("<p class=\"caption\">{}</p>\n", encode_text(caption)));
        }
        out.push_str(&format!(
            "<div data-testid=\"stComponentsV1Html\"><iframe title=\"{}\" srcdoc=\"{}\" width=\"100%\" height=\"{}\" scrolling=\"{}\" sandbox=\"allow-scripts\" style=\"{}\"></iframe></div>\n",
            encode_double_quoted_attribute(&page.title),
            encode_double_quoted_attribute(directive.document),
            directive.height_px,
            if directive.scrolling { "yes" } else { "no" },
            frame_style,
        ));
        out.push_str("</div>\n</div>\n</main>\n<footer></footer>\n</div>\n</body>\n</html>\n");
        out
    }
}
