use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use sr_core::SeedError;

use crate::error_map::{map_manifest_invalid, map_manifest_read};

pub const DEFAULT_FALLBACK_CULTURE: &str = "en";

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedManifest {
    #[serde(default)]
    pub languages: Vec<LanguageSeed>,
    #[serde(default)]
    pub reference_data: Vec<TableSeed>,
    #[serde(default)]
    pub resources: Option<ResourceSeedConfig>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageSeed {
    pub name: String,
    pub culture: String,
    #[serde(default = "default_published")]
    pub published: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableSeed {
    pub table: String,
    #[serde(default)]
    pub sample: bool,
    #[serde(default)]
    pub slug_field: Option<String>,
    #[serde(default)]
    pub records: Vec<Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceSeedConfig {
    pub root: PathBuf,
    #[serde(default = "default_fallback_culture")]
    pub fallback_culture: String,
}

fn default_published() -> bool {
    true
}

fn default_fallback_culture() -> String {
    DEFAULT_FALLBACK_CULTURE.to_string()
}

/// Reads a JSON manifest. A relative resource root is resolved against the
/// manifest's own directory.
pub fn load_manifest(path: &Path) -> Result<SeedManifest, SeedError> {
    let raw = fs::read_to_string(path).map_err(map_manifest_read)?;
    let mut manifest = parse_manifest(&raw)?;

    if let Some(resources) = manifest.resources.as_mut() {
        if resources.root.is_relative() {
            let base = path.parent().unwrap_or_else(|| Path::new("."));
            resources.root = base.join(&resources.root);
        }
    }

    Ok(manifest)
}

pub fn parse_manifest(raw: &str) -> Result<SeedManifest, SeedError> {
    let manifest: SeedManifest = serde_json::from_str(raw).map_err(map_manifest_invalid)?;
    validate_manifest(&manifest)?;
    Ok(manifest)
}

fn validate_manifest(manifest: &SeedManifest) -> Result<(), SeedError> {
    for language in &manifest.languages {
        if language.name.trim().is_empty() || language.culture.trim().is_empty() {
            return Err(SeedError::new(
                "MANIFEST_INVALID",
                "Every language needs a non-empty name and culture.",
            ));
        }
    }

    for table in &manifest.reference_data {
        if table.table.trim().is_empty() {
            return Err(SeedError::new(
                "MANIFEST_INVALID",
                "Reference data table name cannot be empty.",
            ));
        }
    }

    if let Some(resources) = &manifest.resources {
        if resources.fallback_culture.trim().is_empty() {
            return Err(SeedError::new(
                "MANIFEST_INVALID",
                "Resource fallback culture cannot be empty.",
            ));
        }
    }

    Ok(())
}
