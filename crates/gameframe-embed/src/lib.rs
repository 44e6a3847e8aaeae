#![doc = r#"
⚠️ INTERNAL CRATE – NOT A STABLE API

This crate is an internal implementation detail of the gameframe project.

Do NOT depend on this crate directly.
Use `gameframe-io` instead.
"#]

pub mod adapt;
pub mod config;
pub mod error;
pub mod profile;
pub mod serialize;

pub use adapt::{adapt, adapt_policy, adapt_with_options, AdaptOptions, RenderDirective};
pub use config::{ChromeRule, ChromeTarget, Declaration, EmbeddingConfig, HostSelectors, SizeMode};
pub use error::EmbedError;
pub use profile::ViewportPolicy;
