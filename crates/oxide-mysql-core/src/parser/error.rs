//! Parser error types.

use crate::lexer::Token;

/// The category of a [`ParseError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The input could not be tokenized.
    Lex,
    /// The tokens do not form a valid statement.
    Syntax,
    /// An INSERT row has a different number of values than columns.
    Arity,
}

/// Errors produced while tokenizing or parsing a statement.
///
/// Every variant carries the byte offset into the parsed text where the
/// problem was detected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ParseError {
    /// An unrecognized character or an unterminated literal.
    #[error("{message} at offset {offset}")]
    Lex {
        /// What went wrong.
        message: String,
        /// Byte offset where the offending construct starts.
        offset: usize,
    },

    /// A token that no production accepts at this point.
    #[error("Unexpected token: expected {expected}, found {found} at offset {offset}")]
    Syntax {
        /// Description of what the parser expected.
        expected: String,
        /// Description of the token that was found.
        found: String,
        /// Byte offset of the offending token.
        offset: usize,
    },

    /// INSERT column and value counts differ.
    #[error("INSERT lists {columns} columns but a row has {values} values at offset {offset}")]
    Arity {
        /// Number of columns in the column list.
        columns: usize,
        /// Number of values in the offending row.
        values: usize,
        /// Byte offset of the offending row's opening parenthesis.
        offset: usize,
    },
}

impl ParseError {
    /// Creates a lex error.
    #[must_use]
    pub fn lex(message: impl Into<String>, offset: usize) -> Self {
        Self::Lex {
            message: message.into(),
            offset,
        }
    }

    /// Creates an "unexpected token" error pointing at `found`.
    #[must_use]
    pub fn unexpected(expected: impl Into<String>, found: &Token) -> Self {
        Self::Syntax {
            expected: expected.into(),
            found: found.kind.describe(),
            offset: found.span.start,
        }
    }

    /// Creates an INSERT arity error.
    #[must_use]
    pub const fn arity(columns: usize, values: usize, offset: usize) -> Self {
        Self::Arity {
            columns,
            values,
            offset,
        }
    }

    /// Returns the byte offset the error points at.
    #[must_use]
    pub const fn offset(&self) -> usize {
        match self {
            Self::Lex { offset, .. } | Self::Syntax { offset, .. } | Self::Arity { offset, .. } => {
                *offset
            }
        }
    }

    /// Returns the category of the error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Lex { .. } => ErrorKind::Lex,
            Self::Syntax { .. } => ErrorKind::Syntax,
            Self::Arity { .. } => ErrorKind::Arity,
        }
    }
}
