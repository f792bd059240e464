//! Expression AST types.

use core::fmt;

use super::render::{Ident, QuotedString};

/// A literal value.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Literal {
    /// Integer literal.
    Integer(i64),
    /// Decimal literal, kept as written.
    Decimal(String),
    /// String literal.
    String(String),
    /// Boolean literal.
    Boolean(bool),
    /// NULL literal.
    Null,
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Decimal(text) => f.write_str(text),
            Self::String(s) => write!(f, "{}", QuotedString(s)),
            Self::Boolean(true) => f.write_str("TRUE"),
            Self::Boolean(false) => f.write_str("FALSE"),
            Self::Null => f.write_str("NULL"),
        }
    }
}

/// Comparison operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ComparisonOp {
    Eq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
}

impl ComparisonOp {
    /// Returns the SQL representation of the operator.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Eq => "=",
            Self::NotEq => "<>",
            Self::Lt => "<",
            Self::LtEq => "<=",
            Self::Gt => ">",
            Self::GtEq => ">=",
        }
    }
}

impl fmt::Display for ComparisonOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A column reference, optionally qualified with a table name or alias.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColumnRef {
    /// Table name or alias.
    pub qualifier: Option<String>,
    /// Column name.
    pub name: String,
}

impl ColumnRef {
    /// Creates an unqualified column reference.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            qualifier: None,
            name: name.into(),
        }
    }

    /// Creates a column reference qualified by a table name or alias.
    #[must_use]
    pub fn qualified(qualifier: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            qualifier: Some(qualifier.into()),
            name: name.into(),
        }
    }
}

impl fmt::Display for ColumnRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(qualifier) = &self.qualifier {
            write!(f, "{}.", Ident(qualifier))?;
        }
        write!(f, "{}", Ident(&self.name))
    }
}

/// A WHERE-clause expression.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Expr {
    /// `left op right`.
    Comparison {
        /// Left operand.
        left: Box<Expr>,
        /// Operator.
        op: ComparisonOp,
        /// Right operand.
        right: Box<Expr>,
    },

    /// A literal value.
    Literal(Literal),

    /// A column reference.
    Column(ColumnRef),
}

impl Expr {
    /// Creates an unqualified column reference.
    #[must_use]
    pub fn column(name: impl Into<String>) -> Self {
        Self::Column(ColumnRef::new(name))
    }

    /// Creates a qualified column reference.
    #[must_use]
    pub fn qualified_column(qualifier: impl Into<String>, name: impl Into<String>) -> Self {
        Self::Column(ColumnRef::qualified(qualifier, name))
    }

    /// Creates an integer literal.
    #[must_use]
    pub const fn integer(value: i64) -> Self {
        Self::Literal(Literal::Integer(value))
    }

    /// Creates a string literal.
    #[must_use]
    pub fn string(value: impl Into<String>) -> Self {
        Self::Literal(Literal::String(value.into()))
    }

    /// Creates a boolean literal.
    #[must_use]
    pub const fn boolean(value: bool) -> Self {
        Self::Literal(Literal::Boolean(value))
    }

    /// Creates a comparison with `self` on the left.
    #[must_use]
    pub fn compare(self, op: ComparisonOp, right: Self) -> Self {
        Self::Comparison {
            left: Box::new(self),
            op,
            right: Box::new(right),
        }
    }

    /// Creates an equality comparison.
    #[must_use]
    pub fn eq(self, right: Self) -> Self {
        self.compare(ComparisonOp::Eq, right)
    }

    /// Creates an inequality comparison.
    #[must_use]
    pub fn not_eq(self, right: Self) -> Self {
        self.compare(ComparisonOp::NotEq, right)
    }

    /// Creates a less-than comparison.
    #[must_use]
    pub fn lt(self, right: Self) -> Self {
        self.compare(ComparisonOp::Lt, right)
    }

    /// Creates a greater-than comparison.
    #[must_use]
    pub fn gt(self, right: Self) -> Self {
        self.compare(ComparisonOp::Gt, right)
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Comparison { left, op, right } => write!(f, "{left} {op} {right}"),
            Self::Literal(literal) => write!(f, "{literal}"),
            Self::Column(column) => write!(f, "{column}"),
        }
    }
}
