mod error_map;
mod import;
mod manifest;
mod seeder;
mod slug;
mod source;
mod steps;
mod store;

pub use import::{MemoryResourceStore, ResourceImporter};
pub use manifest::{
    load_manifest, parse_manifest, LanguageSeed, ResourceSeedConfig, SeedManifest, TableSeed,
    DEFAULT_FALLBACK_CULTURE,
};
pub use seeder::{SeedOptions, SeedReport, Seeder};
pub use slug::{slugify, SlugAllocator};
pub use source::{
    discover_resource_files, read_resource_file, resolve_resource_dir, RESOURCE_FILE_SUFFIX,
};
pub use steps::{
    LanguagesStep, LocaleResourcesStep, ReferenceDataStep, SeedContext, SeedStep, StepOutcome,
    StepReporter, LANGUAGES_TABLE, SLUG_FIELD,
};
pub use store::{MemorySeedStore, SeedStore};
