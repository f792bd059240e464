#![allow(dead_code)]

use std::io::Write;
use std::path::PathBuf;

use oxide_mysql_cli::{OutputFormat, Report, Result, RunOptions, Source, process_source};
use tempfile::NamedTempFile;

pub fn options(format: OutputFormat, keep_going: bool) -> RunOptions {
    RunOptions { format, keep_going }
}

/// Writes `sql` to a temporary `.sql` file.
pub fn script_file(sql: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".sql")
        .tempfile()
        .expect("Failed to create temp file");
    file.write_all(sql.as_bytes())
        .expect("Failed to write temp file");
    file
}

/// Processes a source and returns the report together with everything written.
pub fn run(source: &Source, options: &RunOptions) -> (Result<Report>, String) {
    let mut out = Vec::new();
    let result = process_source(source, options, &mut out);
    (result, String::from_utf8(out).expect("Output is not UTF-8"))
}

pub fn run_file(sql: &str, options: &RunOptions) -> (Result<Report>, String) {
    let file = script_file(sql);
    run(&Source::File(PathBuf::from(file.path())), options)
}
