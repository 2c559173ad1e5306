use std::ffi::OsString;

use clap::Parser;
use sr_core::SeedError;

mod cli_args;
mod error_map;
mod normalize;
mod seed;

pub(crate) use cli_args::{Cli, Mode, NormalizeArgs, SeedArgs};
pub(crate) use error_map::{
    emit_error, map_cli_output_write, map_cli_report_json, map_cli_source_read,
};

pub fn run_cli_from_args<I, T>(args: I) -> i32
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(error) => {
            let _ = error.print();
            return error.exit_code();
        }
    };
    match run(cli) {
        Ok(code) => code,
        Err(error) => emit_error(error),
    }
}

fn run(cli: Cli) -> Result<i32, SeedError> {
    match cli.command {
        Mode::Normalize(args) => normalize::run_normalize(args),
        Mode::Seed(args) => seed::run_seed(args),
    }
}
