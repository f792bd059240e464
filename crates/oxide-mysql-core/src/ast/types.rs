//! Column definitions and constraints for CREATE TABLE and ALTER TABLE.

use core::fmt;
use core::mem;

use super::expression::Literal;
use super::render::{CommaSeparated, Ident, IdentList, QuotedString};

/// A column data type: an upper-cased type name plus its numeric parameters.
///
/// `VARCHAR(20)` has the single parameter `20`, `DECIMAL(10, 2)` has two.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DataType {
    /// Type name, upper-cased.
    pub name: String,
    /// Parenthesized parameters, empty when none were given.
    pub params: Vec<u32>,
}

impl DataType {
    /// Creates a data type without parameters.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into().to_ascii_uppercase(),
            params: vec![],
        }
    }

    /// Creates a data type with parameters.
    #[must_use]
    pub fn with_params(name: impl Into<String>, params: Vec<u32>) -> Self {
        Self {
            params,
            ..Self::new(name)
        }
    }

    /// Returns the length parameter when exactly one parameter was given.
    #[must_use]
    pub fn length(&self) -> Option<u32> {
        match self.params.as_slice() {
            [length] => Some(*length),
            _ => None,
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Ident(&self.name))?;
        if !self.params.is_empty() {
            write!(f, "({})", CommaSeparated(&self.params))?;
        }
        Ok(())
    }
}

/// A constraint attached to a single column.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ColumnConstraint {
    /// PRIMARY KEY
    PrimaryKey,
    /// NOT NULL
    NotNull,
    /// NULL
    Null,
    /// AUTO_INCREMENT
    AutoIncrement,
    /// UNIQUE [KEY]
    Unique,
    /// DEFAULT <literal>
    Default(Literal),
    /// COMMENT '<text>'
    Comment(String),
}

impl ColumnConstraint {
    /// Returns true if both constraints cannot be declared on the same column.
    ///
    /// A constraint conflicts with another of the same kind, and NULL
    /// conflicts with NOT NULL.
    #[must_use]
    pub fn conflicts_with(&self, other: &Self) -> bool {
        mem::discriminant(self) == mem::discriminant(other)
            || matches!(
                (self, other),
                (Self::Null, Self::NotNull) | (Self::NotNull, Self::Null)
            )
    }
}

impl fmt::Display for ColumnConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PrimaryKey => f.write_str("PRIMARY KEY"),
            Self::NotNull => f.write_str("NOT NULL"),
            Self::Null => f.write_str("NULL"),
            Self::AutoIncrement => f.write_str("AUTO_INCREMENT"),
            Self::Unique => f.write_str("UNIQUE"),
            Self::Default(value) => write!(f, "DEFAULT {value}"),
            Self::Comment(text) => write!(f, "COMMENT {}", QuotedString(text)),
        }
    }
}

/// A column definition for CREATE TABLE or ALTER TABLE ... ADD.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColumnDef {
    /// Column name.
    pub name: String,
    /// Data type.
    pub data_type: DataType,
    /// Constraints in declaration order; no two of them conflict.
    pub constraints: Vec<ColumnConstraint>,
}

impl ColumnDef {
    /// Creates a column definition without constraints.
    #[must_use]
    pub fn new(name: impl Into<String>, data_type: DataType) -> Self {
        Self {
            name: name.into(),
            data_type,
            constraints: vec![],
        }
    }

    /// Adds a constraint.
    #[must_use]
    pub fn constraint(mut self, constraint: ColumnConstraint) -> Self {
        self.constraints.push(constraint);
        self
    }

    /// Returns true if the column carries the given constraint kind.
    #[must_use]
    pub fn has(&self, constraint: &ColumnConstraint) -> bool {
        self.constraints
            .iter()
            .any(|c| mem::discriminant(c) == mem::discriminant(constraint))
    }

    /// Returns true if the column is declared PRIMARY KEY.
    #[must_use]
    pub fn is_primary_key(&self) -> bool {
        self.has(&ColumnConstraint::PrimaryKey)
    }

    /// Returns true if the column is declared NOT NULL.
    #[must_use]
    pub fn is_not_null(&self) -> bool {
        self.has(&ColumnConstraint::NotNull)
    }

    /// Returns true if the column is declared AUTO_INCREMENT.
    #[must_use]
    pub fn is_auto_increment(&self) -> bool {
        self.has(&ColumnConstraint::AutoIncrement)
    }

    /// Returns the DEFAULT value, if any.
    #[must_use]
    pub fn default_value(&self) -> Option<&Literal> {
        self.constraints.iter().find_map(|c| match c {
            ColumnConstraint::Default(value) => Some(value),
            _ => None,
        })
    }

    /// Returns the COMMENT text, if any.
    #[must_use]
    pub fn comment(&self) -> Option<&str> {
        self.constraints.iter().find_map(|c| match c {
            ColumnConstraint::Comment(text) => Some(text.as_str()),
            _ => None,
        })
    }
}

impl fmt::Display for ColumnDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", Ident(&self.name), self.data_type)?;
        for constraint in &self.constraints {
            write!(f, " {constraint}")?;
        }
        Ok(())
    }
}

/// A table-level constraint in a CREATE TABLE element list.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TableConstraint {
    /// PRIMARY KEY (columns)
    PrimaryKey(Vec<String>),
    /// UNIQUE [KEY] (columns)
    Unique(Vec<String>),
}

impl fmt::Display for TableConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PrimaryKey(columns) => write!(f, "PRIMARY KEY ({})", IdentList(columns)),
            Self::Unique(columns) => write!(f, "UNIQUE ({})", IdentList(columns)),
        }
    }
}
