use std::fs;
use std::path::{Path, PathBuf};

use sr_core::SeedError;
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::error_map::{map_resource_dir_scan, map_resource_file_read};

pub const RESOURCE_FILE_SUFFIX: &str = ".smres.xml";

/// Picks `root/culture`, falling back once to `root/fallback_culture`.
pub fn resolve_resource_dir(
    root: &Path,
    culture: &str,
    fallback_culture: &str,
) -> Result<PathBuf, SeedError> {
    let primary = root.join(culture);
    if primary.is_dir() {
        return Ok(primary);
    }

    let fallback = root.join(fallback_culture);
    if fallback.is_dir() {
        warn!(
            culture,
            fallback = fallback_culture,
            "locale resource directory missing, using fallback"
        );
        return Ok(fallback);
    }

    Err(SeedError::new(
        "RESOURCE_DIR_NOT_FOUND",
        format!(
            "No resource directory for culture \"{}\" under {} (fallback \"{}\" also missing).",
            culture,
            root.display(),
            fallback_culture
        ),
    ))
}

/// Lists `*.smres.xml` files directly inside `dir`, sorted by file name.
pub fn discover_resource_files(dir: &Path) -> Result<Vec<PathBuf>, SeedError> {
    let mut files = Vec::new();

    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(false)
        .sort_by_file_name()
    {
        let entry = entry.map_err(map_resource_dir_scan)?;
        if !entry.file_type().is_file() {
            continue;
        }

        let is_resource_file = entry
            .file_name()
            .to_str()
            .is_some_and(|name| name.ends_with(RESOURCE_FILE_SUFFIX));
        if is_resource_file {
            files.push(entry.into_path());
        }
    }

    debug!(dir = %dir.display(), count = files.len(), "discovered resource files");
    Ok(files)
}

pub fn read_resource_file(path: &Path) -> Result<String, SeedError> {
    fs::read_to_string(path).map_err(map_resource_file_read)
}
