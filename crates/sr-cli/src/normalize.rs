use std::fs;
use std::path::Path;

use sr_core::SeedError;
use sr_parser::{normalize_locale_resources, WriteOptions};
use tracing::info;

use crate::{map_cli_output_write, map_cli_source_read, NormalizeArgs};

pub(crate) fn run_normalize(args: NormalizeArgs) -> Result<i32, SeedError> {
    let source = fs::read_to_string(&args.file).map_err(map_cli_source_read)?;
    let options = WriteOptions {
        indent: !args.compact,
    };
    let normalized = normalize_locale_resources(&source, &options)?;

    match args.out {
        Some(out) => {
            write_output(Path::new(&out), &normalized)?;
            info!(file = %args.file, out = %out, "wrote normalized resources");
            println!("RESULT:OK");
            println!("OUT:{}", out);
        }
        None => print!("{}", normalized),
    }

    Ok(0)
}

fn write_output(path: &Path, content: &str) -> Result<(), SeedError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(map_cli_output_write)?;
        }
    }
    fs::write(path, content).map_err(map_cli_output_write)
}
