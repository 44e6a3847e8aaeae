use gameframe_core::hash::xxh64_hex;
use gameframe_core::model::{AssetBundle, AssetNames, ReferencePattern};

use crate::document::InlinedDocument;
use crate::error::InlineError;
use crate::report::{InlineReport, PatternHit};
use crate::residual::find_external_references;

/// Inliner configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InlineOptions {
    /// File names used to detect external references that no pattern covered.
    pub names: AssetNames,
}

/// One located occurrence of a pattern's match-form in the template.
#[derive(Debug, Clone, Copy)]
struct Match {
    start: usize,
    end: usize,
    pattern: usize,
}

/// Inline the stylesheet and script into the markup template.
///
/// Rules:
/// - every asset text must be non-empty
/// - every occurrence of every pattern's match-form is replaced by its embedded
///   block; absent forms are skipped
/// - no external stylesheet/script reference may remain afterwards
///
/// Leftover references are detected against the default asset file names
/// (`style.css`, `game.js`) regardless of the names `patterns` were built
/// from. Use [`inline_with_options`] when the assets are named differently.
pub fn inline(
    bundle: &AssetBundle,
    patterns: &[ReferencePattern],
) -> Result<InlinedDocument, InlineError> {
    inline_with_options(bundle, patterns, &InlineOptions::default())
}

/// Inline with explicit options.
pub fn inline_with_options(
    bundle: &AssetBundle,
    patterns: &[ReferencePattern],
    opts: &InlineOptions,
) -> Result<InlinedDocument, InlineError> {
    inline_with_report(bundle, patterns, opts).map(|(doc, _)| doc)
}

/// Inline and report which patterns matched.
///
/// Substitution is a single pass over the template: asset text that gets
/// spliced in is never rescanned, so a script containing a match-form is
/// embedded verbatim. At equal offsets the earlier pattern wins, and matches
/// overlapping an accepted one are dropped.
pub fn inline_with_report(
    bundle: &AssetBundle,
    patterns: &[ReferencePattern],
    opts: &InlineOptions,
) -> Result<(InlinedDocument, InlineReport), InlineError> {
    if let Some(asset) = bundle.first_missing() {
        return Err(InlineError::MissingAsset { asset });
    }

    let markup = bundle.markup.as_str();
    let matches = locate(markup, patterns);

    let residual = find_external_references(&masked(markup, &matches), &opts.names);
    if let Some(r) = residual.into_iter().next() {
        log::debug!("unresolved reference: {}", r.tag);
        return Err(InlineError::UnresolvedReference {
            asset: r.asset,
            url: r.url,
            tag: r.tag,
        });
    }

    let mut hits = vec![0usize; patterns.len()];
    let mut out = String::with_capacity(
        markup.len() + bundle.stylesheet.len() + bundle.script.len() + 32,
    );
    let mut cursor = 0;
    for m in &matches {
        out.push_str(&markup[cursor..m.start]);
        out.push_str(&patterns[m.pattern].replacement_form(bundle));
        cursor = m.end;
        hits[m.pattern] += 1;
    }
    out.push_str(&markup[cursor..]);

    for (p, &n) in patterns.iter().zip(&hits) {
        if n > 0 {
            log::debug!("inlined {} via {:?} ({n} match(es))", p.asset, p.match_form);
        }
    }
    if matches.is_empty() {
        log::warn!("markup references no known asset form; stylesheet and script were not embedded");
    }

    let report = InlineReport {
        patterns: patterns
            .iter()
            .zip(hits)
            .map(|(p, matches)| PatternHit {
                asset: p.asset,
                match_form: p.match_form.clone(),
                matches,
            })
            .collect(),
        markup_bytes: bundle.markup.len(),
        stylesheet_bytes: bundle.stylesheet.len(),
        script_bytes: bundle.script.len(),
        output_bytes: out.len(),
        fingerprint: xxh64_hex(&out),
    };

    log::info!(
        "inlined document: {} bytes, {} reference(s) replaced",
        report.output_bytes,
        report.total_matches()
    );

    Ok((InlinedDocument::new(out), report))
}

fn locate(markup: &str, patterns: &[ReferencePattern]) -> Vec<Match> {
    let mut found = Vec::new();
    for (i, p) in patterns.iter().enumerate() {
        if p.match_form.is_empty() {
            continue;
        }
        for (start, form) in markup.match_indices(p.match_form.as_str()) {
            found.push(Match {
                start,
                end: start + form.len(),
                pattern: i,
            });
        }
    }
    found.sort_by_key(|m| (m.start, m.pattern));

    let mut kept = Vec::with_capacity(found.len());
    let mut cursor = 0;
    for m in found {
        if m.start >= cursor {
            cursor = m.end;
            kept.push(m);
        }
    }
    kept
}

/// The template with every accepted match blanked out, so the residual scan
/// sees surrounding comments and script bodies intact.
fn masked(markup: &str, matches: &[Match]) -> String {
    let mut out = String::with_capacity(markup.len());
    let mut cursor = 0;
    for m in matches {
        out.push_str(&markup[cursor..m.start]);
        out.extend(std::iter::repeat_n(' ', m.end - m.start));
        cursor = m.end;
    }
    out.push_str(&markup[cursor..]);
    out
}
