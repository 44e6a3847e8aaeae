#![doc = r#"
⚠️ INTERNAL CRATE – NOT A STABLE API

This crate is an internal implementation detail of the gameframe project.

Do NOT depend on this crate directly.
Use `gameframe-io` instead.
"#]

pub mod model;
pub mod hash;
