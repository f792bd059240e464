//! Command-line front end for `oxide-mysql-core`.
//!
//! Reads SQL scripts from files, an inline argument or stdin, splits them
//! into statements, parses each one and prints it in the selected
//! [`OutputFormat`].
//!
//! # Example
//!
//! ```rust
//! use oxide_mysql_cli::{OutputFormat, RunOptions, Source, process_source};
//!
//! let source = Source::Inline(String::from("DELETE FROM t; TRUNCATE u"));
//! let options = RunOptions {
//!     format: OutputFormat::Sql,
//!     keep_going: false,
//! };
//! let mut out = Vec::new();
//! let report = process_source(&source, &options, &mut out).unwrap();
//!
//! assert_eq!(report.parsed, 2);
//! assert_eq!(String::from_utf8(out).unwrap(), "DELETE FROM t;\nTRUNCATE TABLE u;\n");
//! ```
//!
//! # CLI Usage
//!
//! ```bash
//! # Summarize every statement of a script
//! oxide-mysql schema.sql
//!
//! # Print the AST of one statement as JSON
//! oxide-mysql --format json -e "SELECT ID FROM TB1 WHERE ID > 1"
//!
//! # Report every bad statement instead of stopping at the first one
//! cat dump.sql | oxide-mysql --keep-going --format sql
//! ```

pub mod error;
pub mod render;
pub mod script;

use std::fmt;
use std::io::{self, Read, Write};
use std::ops::AddAssign;
use std::path::PathBuf;

use oxide_mysql_core::parse;
use oxide_mysql_core::summary::StatementKind;
use tracing::{debug, info, warn};

pub use error::{CliError, Result};
pub use render::{OutputFormat, render};
pub use script::{Fragment, LineIndex, split_statements};

/// Where SQL text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// A script file.
    File(PathBuf),
    /// SQL given on the command line.
    Inline(String),
    /// Standard input.
    Stdin,
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Inline(_) => f.write_str("<execute>"),
            Self::Stdin => f.write_str("<stdin>"),
        }
    }
}

/// Options shared by every processed source.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    /// Output format for parsed statements.
    pub format: OutputFormat,
    /// Log parse errors and continue instead of stopping at the first one.
    pub keep_going: bool,
}

/// Counts of parsed and failed statements.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Report {
    pub parsed: usize,
    pub failed: usize,
}

impl Report {
    /// Returns true if no statement failed.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.failed == 0
    }
}

impl AddAssign for Report {
    fn add_assign(&mut self, other: Self) {
        self.parsed += other.parsed;
        self.failed += other.failed;
    }
}

/// Reads the full text of a source.
///
/// # Errors
///
/// Returns `CliError::Io` if the file or stdin cannot be read.
pub fn read_source(source: &Source) -> Result<String> {
    match source {
        Source::File(path) => std::fs::read_to_string(path).map_err(|source| CliError::Io {
            path: path.clone(),
            source,
        }),
        Source::Inline(sql) => Ok(sql.clone()),
        Source::Stdin => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .map_err(|source| CliError::Io {
                    path: PathBuf::from("<stdin>"),
                    source,
                })?;
            Ok(text)
        }
    }
}

/// Reads a source and processes every statement in it.
///
/// # Errors
///
/// See [`process_script`]; also fails if the source cannot be read.
pub fn process_source(source: &Source, options: &RunOptions, out: &mut impl Write) -> Result<Report> {
    let script = read_source(source)?;
    process_script(&source.to_string(), &script, options, out)
}

/// Parses every statement of `script` and writes the rendered results to `out`.
///
/// Without `keep_going` the first parse error is returned. With it, parse
/// errors are logged and counted in the returned report.
///
/// # Errors
///
/// Returns `CliError::Parse` for the first bad statement unless `keep_going`
/// is set, and `CliError::Json` or `CliError::Write` if output fails.
pub fn process_script(
    origin: &str,
    script: &str,
    options: &RunOptions,
    out: &mut impl Write,
) -> Result<Report> {
    let index = LineIndex::new(script);
    let fragments = split_statements(script);
    info!(origin, statements = fragments.len(), "Parsing script");

    let mut report = Report::default();
    for fragment in fragments {
        match parse(fragment.text) {
            Ok(statement) => {
                let (line, _) = index.line_column(fragment.start());
                debug!(origin, line, kind = %StatementKind::from(&statement), "Parsed statement");
                let rendered = render(&statement, options.format)?;
                writeln!(out, "{rendered}").map_err(CliError::Write)?;
                report.parsed += 1;
            }
            Err(source) => {
                let (line, column) = index.line_column(fragment.offset + source.offset());
                let error = CliError::Parse {
                    origin: origin.to_string(),
                    line,
                    column,
                    statement: fragment.text.trim().to_string(),
                    source,
                };
                if !options.keep_going {
                    return Err(error);
                }
                warn!("{error}");
                report.failed += 1;
            }
        }
    }

    Ok(report)
}
