#![doc = r#"
⚠️ INTERNAL CRATE – NOT A STABLE API

This crate is an internal implementation detail of the gameframe project.

Do NOT depend on this crate directly.
Use `gameframe-io` instead.
"#]

pub mod document;
pub mod error;
pub mod inline;
pub mod report;
pub mod residual;

pub use document::InlinedDocument;
pub use error::InlineError;
pub use inline::{inline, inline_with_options, inline_with_report, InlineOptions};
pub use report::{InlineReport, PatternHit};
pub use residual::{find_external_references, ExternalReference};
