use sr_core::SeedError;
use std::fmt::Display;

fn map_error(code: &'static str, error: impl Display) -> SeedError {
    SeedError::new(code, error.to_string())
}

pub(crate) fn emit_error(error: SeedError) -> i32 {
    println!("RESULT:ERROR");
    println!("ERROR_CODE:{}", error.code);
    if let Some(step) = &error.step {
        println!("ERROR_STEP:{}", step);
    }
    if let Some(span) = &error.span {
        println!("ERROR_AT:{}:{}", span.start.line, span.start.column);
    }
    println!(
        "ERROR_MSG_JSON:{}",
        serde_json::to_string(&error.message).unwrap_or_else(|_| format!("{:?}", error.message))
    );
    1
}

pub(crate) fn map_cli_source_read(error: std::io::Error) -> SeedError {
    map_error("CLI_SOURCE_READ", error)
}

pub(crate) fn map_cli_output_write(error: std::io::Error) -> SeedError {
    map_error("CLI_OUTPUT_WRITE", error)
}

pub(crate) fn map_cli_report_json(error: serde_json::Error) -> SeedError {
    map_error("CLI_REPORT_JSON", error)
}
