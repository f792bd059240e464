//! Abstract Syntax Tree (AST) types for SQL statements.
//!
//! Every node owns its children. `Display` renders canonical MySQL text that
//! parses back to an equal tree.

mod expression;
mod render;
mod statement;
mod types;

pub use expression::{ColumnRef, ComparisonOp, Expr, Literal};
pub use statement::{
    AlterOperation, AlterTableStatement, Assignment, CreateTableStatement, DeleteStatement,
    DropTableStatement, InsertStatement, OrderDirection, OrderItem, Projection, SelectColumn,
    SelectStatement, Statement, TableName, TableRef, TruncateStatement, UpdateStatement,
    ValuesRow,
};
pub use types::{ColumnConstraint, ColumnDef, DataType, TableConstraint};
