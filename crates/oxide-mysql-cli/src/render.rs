//! Output formats for parsed statements.

use oxide_mysql_core::{Statement, StatementSummary};

use crate::error::Result;

/// How each parsed statement is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// One-line statement summary.
    #[default]
    Summary,
    /// Canonical SQL, terminated by `;`.
    Sql,
    /// Pretty-printed JSON of the AST.
    Json,
    /// Pretty-printed Rust debug dump of the AST.
    Debug,
}

/// Renders a statement in the given format.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn render(statement: &Statement, format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Summary => StatementSummary::from(statement).to_string(),
        OutputFormat::Sql => format!("{statement};"),
        OutputFormat::Json => serde_json::to_string_pretty(statement)?,
        OutputFormat::Debug => format!("{statement:#?}"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxide_mysql_core::parse;

    #[test]
    fn test_render_sql() {
        let stmt = parse("select a from t where a != 1").unwrap();
        assert_eq!(
            render(&stmt, OutputFormat::Sql).unwrap(),
            "SELECT a FROM t WHERE a <> 1;"
        );
    }

    #[test]
    fn test_render_summary() {
        let stmt = parse("DELETE FROM db.t").unwrap();
        assert_eq!(
            render(&stmt, OutputFormat::Summary).unwrap(),
            "kind: DELETE, tables: [table1: db.t], select_fields: [], set_fields: [], \
             order_by: [], limit: none, offset: none, where: false"
        );
    }

    #[test]
    fn test_render_json_round_trips() {
        let stmt = parse("INSERT INTO t (a, b) VALUES (1, 'x')").unwrap();
        let json = render(&stmt, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["Insert"]["table"]["name"], "t");
        let back: Statement = serde_json::from_str(&json).unwrap();
        assert_eq!(back, stmt);
    }

    #[test]
    fn test_render_debug() {
        let stmt = parse("TRUNCATE t").unwrap();
        assert!(render(&stmt, OutputFormat::Debug).unwrap().starts_with("Truncate("));
    }
}
