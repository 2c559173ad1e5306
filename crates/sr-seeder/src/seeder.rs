use serde::Serialize;
use sr_core::{SeedError, SeedProgress};
use sr_parser::WriteOptions;
use tracing::info;

use crate::import::ResourceImporter;
use crate::manifest::SeedManifest;
use crate::steps::{
    LanguagesStep, LocaleResourcesStep, ReferenceDataStep, SeedContext, SeedStep, StepReporter,
};
use crate::store::SeedStore;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedOptions {
    pub install_sample_data: bool,
    pub write: WriteOptions,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedReport {
    pub steps_run: Vec<String>,
    pub steps_skipped: Vec<String>,
    pub records_inserted: usize,
    pub resources_imported: usize,
}

/// Ordered list of seeding steps.
///
/// A run stops at the first failing step; nothing already written is undone.
pub struct Seeder {
    steps: Vec<Box<dyn SeedStep>>,
    options: SeedOptions,
}

impl Seeder {
    pub fn new(options: SeedOptions) -> Self {
        Self {
            steps: Vec::new(),
            options,
        }
    }

    /// Languages first, then reference tables in manifest order, then locale
    /// resources for every language.
    pub fn from_manifest(manifest: &SeedManifest, options: SeedOptions) -> Self {
        let mut seeder = Self::new(options);

        if !manifest.languages.is_empty() {
            seeder.add_step(LanguagesStep::new(manifest.languages.clone()));
        }
        for table in &manifest.reference_data {
            seeder.add_step(ReferenceDataStep::new(table.clone()));
        }
        if let Some(resources) = &manifest.resources {
            let write = seeder.options.write.clone();
            seeder.add_step(LocaleResourcesStep::new(
                manifest.languages.clone(),
                resources.clone(),
                write,
            ));
        }

        seeder
    }

    pub fn add_step(&mut self, step: impl SeedStep + 'static) -> &mut Self {
        self.steps.push(Box::new(step));
        self
    }

    pub fn step_names(&self) -> Vec<&str> {
        self.steps.iter().map(|step| step.name()).collect()
    }

    pub fn run(
        &self,
        store: &mut dyn SeedStore,
        importer: &mut dyn ResourceImporter,
        progress: &mut dyn FnMut(SeedProgress),
    ) -> Result<SeedReport, SeedError> {
        let mut report = SeedReport::default();
        let (active, skipped): (Vec<_>, Vec<_>) = self
            .steps
            .iter()
            .partition(|step| self.options.install_sample_data || !step.is_sample());
        report.steps_skipped = skipped
            .iter()
            .map(|step| step.name().to_string())
            .collect();

        let total_steps = active.len();
        let mut context = SeedContext { store, importer };

        for (index, step) in active.into_iter().enumerate() {
            let name = step.name();
            let mut reporter = StepReporter {
                step: name,
                completed_steps: index,
                total_steps,
                sink: &mut *progress,
            };
            let outcome = step
                .run(&mut context, &mut reporter)
                .map_err(|error| SeedError::in_step(name, error))?;

            report.records_inserted += outcome.records_inserted;
            report.resources_imported += outcome.resources_imported;
            report.steps_run.push(name.to_string());
            info!(
                step = name,
                records = outcome.records_inserted,
                resources = outcome.resources_imported,
                "seed step completed"
            );

            progress(SeedProgress {
                step: name.to_string(),
                completed_steps: index + 1,
                total_steps,
                detail: None,
            });
        }

        Ok(report)
    }
}
