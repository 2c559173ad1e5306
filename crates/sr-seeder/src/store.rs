use std::collections::BTreeMap;

use serde_json::Value;
use sr_core::SeedError;

/// Destination for seeded reference rows.
pub trait SeedStore {
    /// Inserts all records into `table` or none of them.
    fn insert_records(&mut self, table: &str, records: Vec<Value>) -> Result<usize, SeedError>;
}

#[derive(Debug, Default, Clone)]
pub struct MemorySeedStore {
    tables: BTreeMap<String, Vec<Value>>,
}

impl MemorySeedStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn table(&self, table: &str) -> &[Value] {
        self.tables.get(table).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn total_records(&self) -> usize {
        self.tables.values().map(Vec::len).sum()
    }
}

impl SeedStore for MemorySeedStore {
    fn insert_records(&mut self, table: &str, records: Vec<Value>) -> Result<usize, SeedError> {
        if let Some(index) = records.iter().position(|record| !record.is_object()) {
            return Err(SeedError::new(
                "SEED_RECORD_INVALID",
                format!(
                    "Record {} for table \"{}\" must be a JSON object.",
                    index, table
                ),
            ));
        }

        let inserted = records.len();
        self.tables
            .entry(table.to_string())
            .or_default()
            .extend(records);
        Ok(inserted)
    }
}
