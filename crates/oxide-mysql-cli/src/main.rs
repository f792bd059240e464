//! oxide-mysql CLI
//!
//! Command-line tool for parsing MySQL statements and scripts.

use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;
use tracing::{Level, debug, info};
use tracing_subscriber::FmtSubscriber;

use oxide_mysql_cli::{OutputFormat, Report, RunOptions, Source, process_source};

/// Parse MySQL statements and print their structure.
#[derive(Parser)]
#[command(name = "oxide-mysql")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// SQL script files (stdin when none are given).
    files: Vec<PathBuf>,

    /// Parse this SQL text instead of reading files.
    #[arg(short, long, conflicts_with = "files")]
    execute: Option<String>,

    /// Output format.
    #[arg(
        short,
        long,
        value_enum,
        env = "OXIDE_MYSQL_FORMAT",
        default_value = "summary"
    )]
    format: OutputFormat,

    /// Report parse errors and continue with the next statement.
    #[arg(short, long)]
    keep_going: bool,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn sources(&self) -> Vec<Source> {
        if let Some(sql) = &self.execute {
            vec![Source::Inline(sql.clone())]
        } else if self.files.is_empty() {
            vec![Source::Stdin]
        } else {
            self.files.iter().cloned().map(Source::File).collect()
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .without_time()
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let options = RunOptions {
        format: cli.format,
        keep_going: cli.keep_going,
    };
    debug!(format = ?options.format, keep_going = options.keep_going, "Starting");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut report = Report::default();
    for source in cli.sources() {
        report += process_source(&source, &options, &mut out)?;
    }
    out.flush()?;

    info!(parsed = report.parsed, failed = report.failed, "Done.");
    if !report.is_success() {
        anyhow::bail!("{} statement(s) failed to parse", report.failed);
    }
    Ok(())
}
