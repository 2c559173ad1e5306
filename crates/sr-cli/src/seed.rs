use std::path::Path;

use sr_core::{SeedError, SeedProgress};
use sr_seeder::{load_manifest, MemoryResourceStore, MemorySeedStore, SeedOptions, Seeder};

use crate::{map_cli_report_json, SeedArgs};

pub(crate) fn run_seed(args: SeedArgs) -> Result<i32, SeedError> {
    let manifest = load_manifest(Path::new(&args.manifest))?;
    let seeder = Seeder::from_manifest(
        &manifest,
        SeedOptions {
            install_sample_data: args.sample_data,
            ..SeedOptions::default()
        },
    );

    let mut store = MemorySeedStore::new();
    let mut resources = MemoryResourceStore::new();
    let mut print_progress = |progress: SeedProgress| println!("{}", progress_line(&progress));
    let report = seeder.run(&mut store, &mut resources, &mut print_progress)?;

    println!("RESULT:OK");
    println!("STEPS:{}", report.steps_run.join(","));
    if !report.steps_skipped.is_empty() {
        println!("SKIPPED:{}", report.steps_skipped.join(","));
    }
    println!("RECORDS:{}", report.records_inserted);
    println!("RESOURCES:{}", report.resources_imported);
    println!(
        "REPORT_JSON:{}",
        serde_json::to_string(&report).map_err(map_cli_report_json)?
    );
    Ok(0)
}

fn progress_line(progress: &SeedProgress) -> String {
    match &progress.detail {
        Some(detail) => format!("PROGRESS:{}:{}", progress.step, detail),
        None => format!(
            "PROGRESS:{}/{}:{}:{}%",
            progress.completed_steps,
            progress.total_steps,
            progress.step,
            progress.percent()
        ),
    }
}
