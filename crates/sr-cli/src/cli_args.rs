use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "sr-cli")]
#[command(about = "Storefront seed data and locale resource tool")]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Mode,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Mode {
    /// Sort and flatten one nested resource document.
    Normalize(NormalizeArgs),
    /// Run every seeding step described by a manifest.
    Seed(SeedArgs),
}

#[derive(Debug, Args)]
pub(crate) struct NormalizeArgs {
    #[arg(long = "file")]
    pub(crate) file: String,
    #[arg(long = "out")]
    pub(crate) out: Option<String>,
    #[arg(long = "compact")]
    pub(crate) compact: bool,
}

#[derive(Debug, Args)]
pub(crate) struct SeedArgs {
    #[arg(long = "manifest")]
    pub(crate) manifest: String,
    #[arg(long = "sample-data")]
    pub(crate) sample_data: bool,
}
