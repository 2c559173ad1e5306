use std::collections::BTreeMap;

use sr_core::SeedError;
use sr_parser::read_flat_resources;
use tracing::info;

/// Consumer of normalized resource documents.
///
/// An import either applies every resource of the document or none of them.
pub trait ResourceImporter {
    fn import_resources(&mut self, culture: &str, xml: &str) -> Result<usize, SeedError>;
}

/// In-process resource table keyed by culture, then qualified name.
#[derive(Debug, Default, Clone)]
pub struct MemoryResourceStore {
    resources: BTreeMap<String, BTreeMap<String, String>>,
}

impl MemoryResourceStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, culture: &str, name: &str) -> Option<&str> {
        self.resources
            .get(culture)
            .and_then(|by_name| by_name.get(name))
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.resources.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn cultures(&self) -> impl Iterator<Item = &str> {
        self.resources.keys().map(String::as_str)
    }
}

impl ResourceImporter for MemoryResourceStore {
    fn import_resources(&mut self, culture: &str, xml: &str) -> Result<usize, SeedError> {
        let (_, flat) = read_flat_resources(xml)?;
        let imported = flat.len();

        let by_name = self.resources.entry(culture.to_string()).or_default();
        for resource in flat {
            by_name.insert(resource.name, resource.value);
        }

        info!(culture, imported, "imported locale resources");
        Ok(imported)
    }
}
