use sr_core::SeedError;
use std::fmt::Display;

fn map_error(code: &'static str, error: impl Display) -> SeedError {
    SeedError::new(code, error.to_string())
}

pub(crate) fn map_resource_dir_scan(error: walkdir::Error) -> SeedError {
    map_error("RESOURCE_DIR_SCAN", error)
}

pub(crate) fn map_resource_file_read(error: std::io::Error) -> SeedError {
    map_error("RESOURCE_FILE_READ", error)
}

pub(crate) fn map_manifest_read(error: std::io::Error) -> SeedError {
    map_error("MANIFEST_READ", error)
}

pub(crate) fn map_manifest_invalid(error: serde_json::Error) -> SeedError {
    map_error("MANIFEST_INVALID", error)
}
