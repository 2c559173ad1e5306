use serde_json::{json, Map, Value};
use sr_core::{SeedError, SeedProgress};
use sr_parser::{normalize_locale_resources, WriteOptions};
use tracing::debug;

use crate::import::ResourceImporter;
use crate::manifest::{LanguageSeed, ResourceSeedConfig, TableSeed};
use crate::slug::SlugAllocator;
use crate::source::{discover_resource_files, read_resource_file, resolve_resource_dir};
use crate::store::SeedStore;

pub const LANGUAGES_TABLE: &str = "languages";
pub const SLUG_FIELD: &str = "slug";

pub struct SeedContext<'a> {
    pub store: &'a mut dyn SeedStore,
    pub importer: &'a mut dyn ResourceImporter,
}

/// Forwards in-step detail to the caller's progress callback.
pub struct StepReporter<'a> {
    pub(crate) step: &'a str,
    pub(crate) completed_steps: usize,
    pub(crate) total_steps: usize,
    pub(crate) sink: &'a mut dyn FnMut(SeedProgress),
}

impl StepReporter<'_> {
    pub fn detail(&mut self, detail: impl Into<String>) {
        (self.sink)(SeedProgress {
            step: self.step.to_string(),
            completed_steps: self.completed_steps,
            total_steps: self.total_steps,
            detail: Some(detail.into()),
        });
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepOutcome {
    pub records_inserted: usize,
    pub resources_imported: usize,
}

pub trait SeedStep {
    fn name(&self) -> &str;

    /// Sample steps only run when sample data was requested.
    fn is_sample(&self) -> bool {
        false
    }

    fn run(
        &self,
        context: &mut SeedContext<'_>,
        reporter: &mut StepReporter<'_>,
    ) -> Result<StepOutcome, SeedError>;
}

pub struct LanguagesStep {
    languages: Vec<LanguageSeed>,
}

impl LanguagesStep {
    pub fn new(languages: Vec<LanguageSeed>) -> Self {
        Self { languages }
    }
}

impl SeedStep for LanguagesStep {
    fn name(&self) -> &str {
        "languages"
    }

    fn run(
        &self,
        context: &mut SeedContext<'_>,
        _reporter: &mut StepReporter<'_>,
    ) -> Result<StepOutcome, SeedError> {
        let records = self
            .languages
            .iter()
            .enumerate()
            .map(|(index, language)| {
                json!({
                    "name": language.name,
                    "culture": language.culture,
                    "published": language.published,
                    "displayOrder": index + 1,
                })
            })
            .collect::<Vec<_>>();

        let records_inserted = context.store.insert_records(LANGUAGES_TABLE, records)?;
        Ok(StepOutcome {
            records_inserted,
            resources_imported: 0,
        })
    }
}

pub struct ReferenceDataStep {
    name: String,
    table: TableSeed,
}

impl ReferenceDataStep {
    pub fn new(table: TableSeed) -> Self {
        Self {
            name: format!("reference-data:{}", table.table),
            table,
        }
    }
}

impl SeedStep for ReferenceDataStep {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_sample(&self) -> bool {
        self.table.sample
    }

    fn run(
        &self,
        context: &mut SeedContext<'_>,
        _reporter: &mut StepReporter<'_>,
    ) -> Result<StepOutcome, SeedError> {
        let records = match &self.table.slug_field {
            Some(field) => with_slugs(&self.table.table, field, &self.table.records)?,
            None => self.table.records.clone(),
        };

        let records_inserted = context.store.insert_records(&self.table.table, records)?;
        Ok(StepOutcome {
            records_inserted,
            resources_imported: 0,
        })
    }
}

fn with_slugs(table: &str, field: &str, records: &[Value]) -> Result<Vec<Value>, SeedError> {
    let mut slugs = SlugAllocator::default();
    records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            let Some(object) = record.as_object() else {
                return Err(SeedError::new(
                    "SEED_RECORD_INVALID",
                    format!("Record {} for table \"{}\" must be a JSON object.", index, table),
                ));
            };
            let Some(source) = object.get(field).and_then(Value::as_str) else {
                return Err(SeedError::new(
                    "SEED_SLUG_SOURCE_MISSING",
                    format!(
                        "Record {} for table \"{}\" has no string field \"{}\" to build a slug from.",
                        index, table, field
                    ),
                ));
            };

            let mut object: Map<String, Value> = object.clone();
            object.insert(SLUG_FIELD.to_string(), Value::String(slugs.allocate(source)));
            Ok(Value::Object(object))
        })
        .collect()
}

/// Normalizes every `*.smres.xml` file of each language and imports it.
pub struct LocaleResourcesStep {
    languages: Vec<LanguageSeed>,
    config: ResourceSeedConfig,
    write: WriteOptions,
}

impl LocaleResourcesStep {
    pub fn new(
        languages: Vec<LanguageSeed>,
        config: ResourceSeedConfig,
        write: WriteOptions,
    ) -> Self {
        Self {
            languages,
            config,
            write,
        }
    }
}

impl SeedStep for LocaleResourcesStep {
    fn name(&self) -> &str {
        "locale-resources"
    }

    fn run(
        &self,
        context: &mut SeedContext<'_>,
        reporter: &mut StepReporter<'_>,
    ) -> Result<StepOutcome, SeedError> {
        let mut resources_imported = 0;

        for language in &self.languages {
            let dir = resolve_resource_dir(
                &self.config.root,
                &language.culture,
                &self.config.fallback_culture,
            )?;

            for path in discover_resource_files(&dir)? {
                debug!(culture = %language.culture, file = %path.display(), "importing resource file");
                let source = read_resource_file(&path)?;
                let normalized =
                    normalize_locale_resources(&source, &self.write).map_err(|error| {
                        SeedError {
                            message: format!("{} ({})", error.message, path.display()),
                            ..error
                        }
                    })?;
                resources_imported += context
                    .importer
                    .import_resources(&language.culture, &normalized)?;

                let file_name = path
                    .file_name()
                    .map(|name| name.to_string_lossy().to_string())
                    .unwrap_or_default();
                reporter.detail(format!("{}: {}", language.culture, file_name));
            }
        }

        Ok(StepOutcome {
            records_inserted: 0,
            resources_imported,
        })
    }
}
