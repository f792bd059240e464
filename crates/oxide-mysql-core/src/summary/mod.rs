//! Flat, per-statement summaries.
//!
//! A [`StatementSummary`] answers the questions tooling usually asks of a
//! statement (which tables it touches, which fields it reads or writes, how
//! it is ordered and paged) without walking the AST.

use core::fmt;

use crate::ast::{
    AlterOperation, ColumnRef, Literal, OrderDirection, Projection, Statement, TableName,
    TableRef,
};

/// The kind of a parsed statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StatementKind {
    Select,
    Insert,
    Update,
    Delete,
    CreateTable,
    AlterTable,
    DropTable,
    Truncate,
}

impl StatementKind {
    /// Returns the leading keywords of the statement kind.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Select => "SELECT",
            Self::Insert => "INSERT",
            Self::Update => "UPDATE",
            Self::Delete => "DELETE",
            Self::CreateTable => "CREATE TABLE",
            Self::AlterTable => "ALTER TABLE",
            Self::DropTable => "DROP TABLE",
            Self::Truncate => "TRUNCATE TABLE",
        }
    }
}

impl fmt::Display for StatementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&Statement> for StatementKind {
    fn from(statement: &Statement) -> Self {
        match statement {
            Statement::Select(_) => Self::Select,
            Statement::Insert(_) => Self::Insert,
            Statement::Update(_) => Self::Update,
            Statement::Delete(_) => Self::Delete,
            Statement::CreateTable(_) => Self::CreateTable,
            Statement::AlterTable(_) => Self::AlterTable,
            Statement::DropTable(_) => Self::DropTable,
            Statement::Truncate(_) => Self::Truncate,
        }
    }
}

/// A table referenced by a statement, numbered from 1 in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TableInfo {
    pub index: usize,
    pub schema: Option<String>,
    pub table: String,
    pub alias: Option<String>,
}

impl TableInfo {
    fn from_ref(index: usize, table: &TableRef) -> Self {
        Self {
            index,
            schema: table.schema.clone(),
            table: table.name.clone(),
            alias: table.alias.clone(),
        }
    }

    fn from_name(index: usize, table: &TableName) -> Self {
        Self {
            index,
            schema: table.schema.clone(),
            table: table.name.clone(),
            alias: None,
        }
    }
}

impl fmt::Display for TableInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "table{}: ", self.index)?;
        if let Some(schema) = &self.schema {
            write!(f, "{schema}.")?;
        }
        f.write_str(&self.table)
    }
}

/// A field written by a statement, with its value when one is given.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FieldValue {
    pub column: String,
    pub value: Option<Literal>,
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.column)?;
        if let Some(value) = &self.value {
            write!(f, "={value}")?;
        }
        Ok(())
    }
}

/// An ORDER BY field.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OrderField {
    pub column: String,
    pub direction: OrderDirection,
}

impl fmt::Display for OrderField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.column, self.direction.as_str())
    }
}

/// A flat view of a parsed statement.
///
/// - `select_fields` holds the SELECT list (`*` for a wildcard).
/// - `set_fields` holds UPDATE assignments, INSERT columns paired with the
///   first VALUES row, and the columns a CREATE or ALTER TABLE declares or
///   drops (without values).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatementSummary {
    pub kind: StatementKind,
    pub tables: Vec<TableInfo>,
    pub select_fields: Vec<String>,
    pub set_fields: Vec<FieldValue>,
    pub order_by: Vec<OrderField>,
    pub limit: Option<u64>,
    pub offset: Option<u64>,
    pub has_where: bool,
}

impl StatementSummary {
    fn new(kind: StatementKind) -> Self {
        Self {
            kind,
            tables: vec![],
            select_fields: vec![],
            set_fields: vec![],
            order_by: vec![],
            limit: None,
            offset: None,
            has_where: false,
        }
    }

    fn with_table(mut self, table: &TableName) -> Self {
        self.tables.push(TableInfo::from_name(1, table));
        self
    }
}

fn field_name(column: &ColumnRef) -> String {
    match &column.qualifier {
        Some(qualifier) => format!("{qualifier}.{}", column.name),
        None => column.name.clone(),
    }
}

fn declared(column: impl Into<String>) -> FieldValue {
    FieldValue {
        column: column.into(),
        value: None,
    }
}

impl From<&Statement> for StatementSummary {
    fn from(statement: &Statement) -> Self {
        let summary = Self::new(StatementKind::from(statement));
        match statement {
            Statement::Select(select) => Self {
                tables: select
                    .from
                    .iter()
                    .enumerate()
                    .map(|(i, table)| TableInfo::from_ref(i + 1, table))
                    .collect(),
                select_fields: match &select.projection {
                    Projection::Wildcard => vec![String::from("*")],
                    Projection::Columns(columns) => {
                        columns.iter().map(|c| field_name(&c.column)).collect()
                    }
                },
                order_by: select
                    .order_by
                    .iter()
                    .flatten()
                    .map(|item| OrderField {
                        column: field_name(&item.column),
                        direction: item.direction,
                    })
                    .collect(),
                limit: select.limit,
                offset: select.offset,
                has_where: select.where_clause.is_some(),
                ..summary
            },
            Statement::Insert(insert) => {
                let values = insert.values();
                Self {
                    set_fields: insert
                        .columns
                        .iter()
                        .enumerate()
                        .map(|(i, column)| FieldValue {
                            column: column.clone(),
                            value: values.get(i).cloned(),
                        })
                        .collect(),
                    ..summary.with_table(&insert.table)
                }
            }
            Statement::Update(update) => Self {
                set_fields: update
                    .assignments
                    .iter()
                    .map(|a| FieldValue {
                        column: a.column.clone(),
                        value: Some(a.value.clone()),
                    })
                    .collect(),
                has_where: update.where_clause.is_some(),
                ..summary.with_table(&update.table)
            },
            Statement::Delete(delete) => Self {
                has_where: delete.where_clause.is_some(),
                ..summary.with_table(&delete.table)
            },
            Statement::CreateTable(create) => Self {
                set_fields: create.columns.iter().map(|c| declared(c.name.clone())).collect(),
                ..summary.with_table(&create.table)
            },
            Statement::AlterTable(alter) => {
                let column = match &alter.operation {
                    AlterOperation::AddColumn(def) => declared(def.name.clone()),
                    AlterOperation::DropColumn(name) => declared(name.clone()),
                };
                Self {
                    set_fields: vec![column],
                    ..summary.with_table(&alter.table)
                }
            }
            Statement::DropTable(drop) => Self {
                tables: drop
                    .tables
                    .iter()
                    .enumerate()
                    .map(|(i, table)| TableInfo::from_name(i + 1, table))
                    .collect(),
                ..summary
            },
            Statement::Truncate(truncate) => summary.with_table(&truncate.table),
        }
    }
}

impl From<Statement> for StatementSummary {
    fn from(statement: Statement) -> Self {
        Self::from(&statement)
    }
}

/// Writes `items` as `[a, b, c]`.
fn write_list<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T]) -> fmt::Result {
    f.write_str("[")?;
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    f.write_str("]")
}

fn write_count(f: &mut fmt::Formatter<'_>, count: Option<u64>) -> fmt::Result {
    match count {
        Some(n) => write!(f, "{n}"),
        None => f.write_str("none"),
    }
}

impl fmt::Display for StatementSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "kind: {}, tables: ", self.kind)?;
        write_list(f, &self.tables)?;
        f.write_str(", select_fields: ")?;
        write_list(f, &self.select_fields)?;
        f.write_str(", set_fields: ")?;
        write_list(f, &self.set_fields)?;
        f.write_str(", order_by: ")?;
        write_list(f, &self.order_by)?;
        f.write_str(", limit: ")?;
        write_count(f, self.limit)?;
        f.write_str(", offset: ")?;
        write_count(f, self.offset)?;
        write!(f, ", where: {}", self.has_where)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse;

    fn summarize(sql: &str) -> StatementSummary {
        StatementSummary::from(&parse(sql).unwrap())
    }

    #[test]
    fn test_select_summary_display() {
        let summary = summarize(
            "SELECT ID, t1.NAME FROM DB1.TB1 AS t1, TB2 WHERE ID > 1 \
             ORDER BY ID DESC LIMIT 10 OFFSET 2",
        );
        assert_eq!(
            summary.to_string(),
            "kind: SELECT, tables: [table1: DB1.TB1, table2: TB2], \
             select_fields: [ID, t1.NAME], set_fields: [], order_by: [ID DESC], \
             limit: 10, offset: 2, where: true"
        );
        assert_eq!(summary.tables[0].alias.as_deref(), Some("t1"));
    }

    #[test]
    fn test_wildcard_select() {
        let summary = summarize("SELECT * FROM t");
        assert_eq!(summary.select_fields, vec![String::from("*")]);
        assert!(!summary.has_where);
        assert_eq!(summary.limit, None);
    }

    #[test]
    fn test_insert_pairs_columns_with_first_row() {
        let summary = summarize("INSERT INTO a.t (x, y) VALUES (1, 'b'), (2, 'c')");
        assert_eq!(summary.kind, StatementKind::Insert);
        assert_eq!(summary.tables[0].to_string(), "table1: a.t");
        assert_eq!(
            summary.set_fields,
            vec![
                FieldValue {
                    column: String::from("x"),
                    value: Some(Literal::Integer(1)),
                },
                FieldValue {
                    column: String::from("y"),
                    value: Some(Literal::String(String::from("b"))),
                },
            ]
        );
    }

    #[test]
    fn test_ddl_summaries() {
        let create = summarize("CREATE TABLE t (a INT, b TEXT)");
        assert_eq!(create.kind.as_str(), "CREATE TABLE");
        assert_eq!(create.set_fields.len(), 2);
        assert!(create.set_fields.iter().all(|f| f.value.is_none()));

        let drop = summarize("DROP TABLE IF EXISTS a, s.b");
        assert_eq!(drop.tables.len(), 2);
        assert_eq!(drop.tables[1].index, 2);
        assert_eq!(drop.tables[1].schema.as_deref(), Some("s"));

        let alter = summarize("ALTER TABLE t DROP COLUMN c");
        assert_eq!(alter.set_fields[0].to_string(), "c");
    }
}
