//! Parsing variant config files with actionable diagnostics.
//!
//! serde's "missing field X" is correct but names one field at a time. These
//! helpers report every missing required top-level field at once and keep the
//! unsupported-profile message identical to the adapter's.

use std::path::PathBuf;

use gameframe_core::model::AssetNames;
use gameframe_embed::{EmbedError, ViewportPolicy};
use gameframe_patterns::Layout;
use serde::Deserialize;
use serde::de::Error as _;
use serde_json::Value;
use thiserror::Error;

use crate::variant::{DeploymentVariant, PageConfig};
use crate::version::VARIANT_CONFIG_V;

const REQUIRED_TOP_LEVEL_FIELDS: &[&str] = &["v", "name", "asset_dir", "profile"];

#[derive(Debug, Error)]
pub enum VariantJsonError {
    /// The input was not valid JSON.
    #[error("Invalid JSON: {0}")]
    InvalidJson(#[source] serde_json::Error),

    #[error(
        "Invalid variant JSON: missing required top-level field(s): {}. Required top-level fields: {}.",
        .missing.join(", "),
        .required.join(", ")
    )]
    MissingRequiredTopLevelFields {
        missing: Vec<&'static str>,
        required: Vec<&'static str>,
    },

    /// JSON was valid, but did not match the variant shape.
    #[error(
        "Invalid variant JSON shape: {0}. Required top-level fields: {required}.",
        required = REQUIRED_TOP_LEVEL_FIELDS.join(", ")
    )]
    InvalidShape(#[source] serde_json::Error),

    #[error("Unsupported variant config version {0}. Supported versions: 1.")]
    UnsupportedVersion(u64),

    #[error(transparent)]
    UnsupportedProfile(#[from] EmbedError),
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct VariantFileV1 {
    #[allow(dead_code)]
    v: u8,
    name: String,
    asset_dir: PathBuf,
    #[serde(default)]
    layout: Layout,
    profile: String,
    #[serde(default)]
    page: Option<PageConfig>,
    #[serde(default)]
    height_px: Option<u32>,
    #[serde(default)]
    min_height_px: Option<u32>,
    #[serde(default)]
    assets: AssetNames,
}

/// Parse a variant config file.
///
/// Without a `page` object the page is titled after the variant name.
pub fn parse_variant_json_str(s: &str) -> Result<DeploymentVariant, VariantJsonError> {
    let v: Value = serde_json::from_str(s).map_err(VariantJsonError::InvalidJson)?;
    let obj = v.as_object().ok_or_else(|| {
        VariantJsonError::InvalidShape(serde_json::Error::custom("expected a JSON object"))
    })?;

    let missing: Vec<&'static str> = REQUIRED_TOP_LEVEL_FIELDS
        .iter()
        .copied()
        .filter(|k| !obj.contains_key(*k))
        .collect();
    if !missing.is_empty() {
        return Err(VariantJsonError::MissingRequiredTopLevelFields {
            missing,
            required: REQUIRED_TOP_LEVEL_FIELDS.to_vec(),
        });
    }

    if let Some(version) = obj.get("v").and_then(Value::as_u64) {
        if version != u64::from(VARIANT_CONFIG_V) {
            return Err(VariantJsonError::UnsupportedVersion(version));
        }
    }

    let file: VariantFileV1 = serde_json::from_value(v).map_err(VariantJsonError::InvalidShape)?;
    let profile: ViewportPolicy = file.profile.parse::<ViewportPolicy>()?;
    let page = file.page.unwrap_or_else(|| PageConfig::titled(file.name.clone()));

    Ok(DeploymentVariant {
        name: file.name,
        asset_dir: file.asset_dir,
        layout: file.layout,
        profile,
        page,
        height_px: file.height_px,
        min_height_px: file.min_height_px,
        assets: file.assets,
    })
}
