//! SQL statement AST types.

use core::fmt;

use super::expression::{ColumnRef, Expr, Literal};
use super::render::{CommaSeparated, Ident, IdentList};
use super::types::{ColumnDef, TableConstraint};

/// Order direction for ORDER BY.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OrderDirection {
    /// Ascending order (default).
    #[default]
    Asc,
    /// Descending order.
    Desc,
}

impl OrderDirection {
    /// Returns the SQL representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

/// An ORDER BY entry.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OrderItem {
    /// The column to order by.
    pub column: ColumnRef,
    /// The direction; ASC when omitted in the source.
    pub direction: OrderDirection,
}

impl fmt::Display for OrderItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.column, self.direction.as_str())
    }
}

/// A possibly schema-qualified table name.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TableName {
    /// Schema (database) name.
    pub schema: Option<String>,
    /// Table name.
    pub name: String,
}

impl TableName {
    /// Creates an unqualified table name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            schema: None,
            name: name.into(),
        }
    }

    /// Creates a schema-qualified table name.
    #[must_use]
    pub fn with_schema(schema: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            schema: Some(schema.into()),
            name: name.into(),
        }
    }
}

impl fmt::Display for TableName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(schema) = &self.schema {
            write!(f, "{}.", Ident(schema))?;
        }
        write!(f, "{}", Ident(&self.name))
    }
}

/// A table reference in a FROM clause.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TableRef {
    /// Schema name (optional).
    pub schema: Option<String>,
    /// Table name.
    pub name: String,
    /// Alias.
    pub alias: Option<String>,
}

impl TableRef {
    /// Creates a simple table reference.
    #[must_use]
    pub fn table(name: impl Into<String>) -> Self {
        Self {
            schema: None,
            name: name.into(),
            alias: None,
        }
    }

    /// Creates a table reference with schema.
    #[must_use]
    pub fn with_schema(schema: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            schema: Some(schema.into()),
            ..Self::table(name)
        }
    }

    /// Adds an alias to this table reference.
    #[must_use]
    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }
}

impl fmt::Display for TableRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(schema) = &self.schema {
            write!(f, "{}.", Ident(schema))?;
        }
        write!(f, "{}", Ident(&self.name))?;
        if let Some(alias) = &self.alias {
            write!(f, " AS {}", Ident(alias))?;
        }
        Ok(())
    }
}

/// A column in the SELECT list.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SelectColumn {
    /// The selected column.
    pub column: ColumnRef,
    /// Output alias.
    pub alias: Option<String>,
}

impl fmt::Display for SelectColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.column)?;
        if let Some(alias) = &self.alias {
            write!(f, " AS {}", Ident(alias))?;
        }
        Ok(())
    }
}

/// The SELECT list.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Projection {
    /// `*`
    Wildcard,
    /// An explicit column list.
    Columns(Vec<SelectColumn>),
}

impl fmt::Display for Projection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Wildcard => f.write_str("*"),
            Self::Columns(columns) => write!(f, "{}", CommaSeparated(columns)),
        }
    }
}

/// A SELECT statement.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SelectStatement {
    /// The SELECT list.
    pub projection: Projection,
    /// Tables in the FROM clause, never empty.
    pub from: Vec<TableRef>,
    /// The WHERE comparison.
    pub where_clause: Option<Expr>,
    /// ORDER BY entries, never an empty vector.
    pub order_by: Option<Vec<OrderItem>>,
    /// LIMIT row count.
    pub limit: Option<u64>,
    /// OFFSET row count; only present together with a limit.
    pub offset: Option<u64>,
}

impl SelectStatement {
    /// Returns the selected columns, empty for `SELECT *`.
    #[must_use]
    pub fn columns(&self) -> &[SelectColumn] {
        match &self.projection {
            Projection::Wildcard => &[],
            Projection::Columns(columns) => columns,
        }
    }
}

impl fmt::Display for SelectStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SELECT {} FROM {}",
            self.projection,
            CommaSeparated(&self.from)
        )?;
        if let Some(expr) = &self.where_clause {
            write!(f, " WHERE {expr}")?;
        }
        if let Some(items) = &self.order_by {
            write!(f, " ORDER BY {}", CommaSeparated(items))?;
        }
        if let Some(limit) = self.limit {
            write!(f, " LIMIT {limit}")?;
        }
        if let Some(offset) = self.offset {
            write!(f, " OFFSET {offset}")?;
        }
        Ok(())
    }
}

/// A VALUES row.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ValuesRow(pub Vec<Literal>);

impl fmt::Display for ValuesRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({})", CommaSeparated(&self.0))
    }
}

/// An INSERT statement.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InsertStatement {
    /// Target table.
    pub table: TableName,
    /// Column names.
    pub columns: Vec<String>,
    /// VALUES rows; each has exactly `columns.len()` values.
    pub rows: Vec<ValuesRow>,
}

impl InsertStatement {
    /// Returns the values of the first row.
    #[must_use]
    pub fn values(&self) -> &[Literal] {
        match self.rows.first() {
            Some(row) => &row.0,
            None => &[],
        }
    }
}

impl fmt::Display for InsertStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "INSERT INTO {} ({}) VALUES {}",
            self.table,
            IdentList(&self.columns),
            CommaSeparated(&self.rows)
        )
    }
}

/// An assignment in UPDATE SET.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Assignment {
    /// Column name.
    pub column: String,
    /// New value.
    pub value: Literal,
}

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", Ident(&self.column), self.value)
    }
}

/// An UPDATE statement.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UpdateStatement {
    /// Target table.
    pub table: TableName,
    /// SET assignments.
    pub assignments: Vec<Assignment>,
    /// WHERE comparison.
    pub where_clause: Option<Expr>,
}

impl fmt::Display for UpdateStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "UPDATE {} SET {}",
            self.table,
            CommaSeparated(&self.assignments)
        )?;
        if let Some(expr) = &self.where_clause {
            write!(f, " WHERE {expr}")?;
        }
        Ok(())
    }
}

/// A DELETE statement.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeleteStatement {
    /// Target table.
    pub table: TableName,
    /// WHERE comparison.
    pub where_clause: Option<Expr>,
}

impl fmt::Display for DeleteStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DELETE FROM {}", self.table)?;
        if let Some(expr) = &self.where_clause {
            write!(f, " WHERE {expr}")?;
        }
        Ok(())
    }
}

/// A CREATE TABLE statement.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CreateTableStatement {
    /// Whether IF NOT EXISTS was given.
    pub if_not_exists: bool,
    /// Table being created.
    pub table: TableName,
    /// Column definitions, never empty.
    pub columns: Vec<ColumnDef>,
    /// Table-level constraints.
    pub constraints: Vec<TableConstraint>,
}

impl fmt::Display for CreateTableStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CREATE TABLE ")?;
        if self.if_not_exists {
            f.write_str("IF NOT EXISTS ")?;
        }
        write!(f, "{} ({}", self.table, CommaSeparated(&self.columns))?;
        for constraint in &self.constraints {
            write!(f, ", {constraint}")?;
        }
        f.write_str(")")
    }
}

/// The change made by an ALTER TABLE statement.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AlterOperation {
    /// ADD [COLUMN] column-def
    AddColumn(ColumnDef),
    /// DROP [COLUMN] name
    DropColumn(String),
}

impl fmt::Display for AlterOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AddColumn(column) => write!(f, "ADD COLUMN {column}"),
            Self::DropColumn(name) => write!(f, "DROP COLUMN {}", Ident(name)),
        }
    }
}

/// An ALTER TABLE statement.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AlterTableStatement {
    /// Table being altered.
    pub table: TableName,
    /// The change.
    pub operation: AlterOperation,
}

impl fmt::Display for AlterTableStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ALTER TABLE {} {}", self.table, self.operation)
    }
}

/// A DROP TABLE statement.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DropTableStatement {
    /// Whether IF EXISTS was given.
    pub if_exists: bool,
    /// Tables to drop, never empty.
    pub tables: Vec<TableName>,
}

impl fmt::Display for DropTableStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("DROP TABLE ")?;
        if self.if_exists {
            f.write_str("IF EXISTS ")?;
        }
        write!(f, "{}", CommaSeparated(&self.tables))
    }
}

/// A TRUNCATE TABLE statement.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TruncateStatement {
    /// Table to empty.
    pub table: TableName,
}

impl fmt::Display for TruncateStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TRUNCATE TABLE {}", self.table)
    }
}

/// A SQL statement.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Statement {
    /// SELECT statement.
    Select(SelectStatement),
    /// INSERT statement.
    Insert(InsertStatement),
    /// UPDATE statement.
    Update(UpdateStatement),
    /// DELETE statement.
    Delete(DeleteStatement),
    /// CREATE TABLE statement.
    CreateTable(CreateTableStatement),
    /// ALTER TABLE statement.
    AlterTable(AlterTableStatement),
    /// DROP TABLE statement.
    DropTable(DropTableStatement),
    /// TRUNCATE TABLE statement.
    Truncate(TruncateStatement),
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Select(s) => write!(f, "{s}"),
            Self::Insert(s) => write!(f, "{s}"),
            Self::Update(s) => write!(f, "{s}"),
            Self::Delete(s) => write!(f, "{s}"),
            Self::CreateTable(s) => write!(f, "{s}"),
            Self::AlterTable(s) => write!(f, "{s}"),
            Self::DropTable(s) => write!(f, "{s}"),
            Self::Truncate(s) => write!(f, "{s}"),
        }
    }
}
