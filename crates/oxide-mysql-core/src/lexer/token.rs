//! Token types for the SQL lexer.

use core::fmt;

use super::Span;

/// Reserved words of the supported MySQL subset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Keyword {
    // Data Query Language (DQL)
    Select,
    From,
    Where,
    Order,
    By,
    Asc,
    Desc,
    Limit,
    Offset,
    As,

    // Data Manipulation Language (DML)
    Insert,
    Into,
    Values,
    Update,
    Set,
    Delete,

    // Data Definition Language (DDL)
    Create,
    Alter,
    Drop,
    Truncate,
    Table,
    Add,
    Column,
    If,
    Exists,

    // Column constraints
    Primary,
    Key,
    Unique,
    Not,
    Null,
    Default,
    AutoIncrement,
    Comment,
}

impl Keyword {
    /// Every keyword, in declaration order.
    pub const ALL: [Self; 33] = [
        Self::Select,
        Self::From,
        Self::Where,
        Self::Order,
        Self::By,
        Self::Asc,
        Self::Desc,
        Self::Limit,
        Self::Offset,
        Self::As,
        Self::Insert,
        Self::Into,
        Self::Values,
        Self::Update,
        Self::Set,
        Self::Delete,
        Self::Create,
        Self::Alter,
        Self::Drop,
        Self::Truncate,
        Self::Table,
        Self::Add,
        Self::Column,
        Self::If,
        Self::Exists,
        Self::Primary,
        Self::Key,
        Self::Unique,
        Self::Not,
        Self::Null,
        Self::Default,
        Self::AutoIncrement,
        Self::Comment,
    ];

    /// Attempts to parse a keyword from a string (case-insensitive).
    #[must_use]
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|keyword| keyword.as_str().eq_ignore_ascii_case(s))
    }

    /// Returns the keyword as written in canonical SQL.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Select => "SELECT",
            Self::From => "FROM",
            Self::Where => "WHERE",
            Self::Order => "ORDER",
            Self::By => "BY",
            Self::Asc => "ASC",
            Self::Desc => "DESC",
            Self::Limit => "LIMIT",
            Self::Offset => "OFFSET",
            Self::As => "AS",
            Self::Insert => "INSERT",
            Self::Into => "INTO",
            Self::Values => "VALUES",
            Self::Update => "UPDATE",
            Self::Set => "SET",
            Self::Delete => "DELETE",
            Self::Create => "CREATE",
            Self::Alter => "ALTER",
            Self::Drop => "DROP",
            Self::Truncate => "TRUNCATE",
            Self::Table => "TABLE",
            Self::Add => "ADD",
            Self::Column => "COLUMN",
            Self::If => "IF",
            Self::Exists => "EXISTS",
            Self::Primary => "PRIMARY",
            Self::Key => "KEY",
            Self::Unique => "UNIQUE",
            Self::Not => "NOT",
            Self::Null => "NULL",
            Self::Default => "DEFAULT",
            Self::AutoIncrement => "AUTO_INCREMENT",
            Self::Comment => "COMMENT",
        }
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The kind of token.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TokenKind {
    // Literals
    /// Integer literal (e.g., 42). A leading `-` is a separate token, so
    /// this holds the magnitude.
    Integer(u64),
    /// Decimal literal, kept as written (e.g., 3.50)
    Decimal(String),
    /// String literal with escapes resolved (e.g., 'it''s')
    String(String),
    /// TRUE or FALSE
    Boolean(bool),

    // Identifiers and keywords
    /// Bare or backtick-quoted identifier
    Identifier(String),
    /// Reserved word
    Keyword(Keyword),

    // Operators
    /// =
    Eq,
    /// <> or !=
    NotEq,
    /// <
    Lt,
    /// <=
    LtEq,
    /// >
    Gt,
    /// >=
    GtEq,
    /// *
    Star,
    /// -
    Minus,

    // Delimiters
    /// (
    LeftParen,
    /// )
    RightParen,
    /// ,
    Comma,
    /// ;
    Semicolon,
    /// .
    Dot,

    /// End of input
    Eof,
}

impl TokenKind {
    /// Describes the token for error messages.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::Integer(n) => format!("integer {n}"),
            Self::Decimal(text) => format!("decimal {text}"),
            Self::String(s) => format!("string '{s}'"),
            Self::Boolean(b) => format!("boolean {}", if *b { "TRUE" } else { "FALSE" }),
            Self::Identifier(name) => format!("identifier `{name}`"),
            Self::Keyword(kw) => format!("keyword {kw}"),
            Self::Eof => String::from("end of input"),
            punct => format!("`{}`", punct.symbol()),
        }
    }

    /// Returns the source symbol of an operator or delimiter, empty otherwise.
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Eq => "=",
            Self::NotEq => "<>",
            Self::Lt => "<",
            Self::LtEq => "<=",
            Self::Gt => ">",
            Self::GtEq => ">=",
            Self::Star => "*",
            Self::Minus => "-",
            Self::LeftParen => "(",
            Self::RightParen => ")",
            Self::Comma => ",",
            Self::Semicolon => ";",
            Self::Dot => ".",
            _ => "",
        }
    }
}

/// A token with its span in the source code.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Token {
    /// The kind of token.
    pub kind: TokenKind,
    /// The location in the source code.
    pub span: Span,
}

impl Token {
    /// Creates a new token.
    #[must_use]
    pub const fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// Returns true if this is an EOF token.
    #[must_use]
    pub const fn is_eof(&self) -> bool {
        matches!(self.kind, TokenKind::Eof)
    }

    /// Returns the keyword if this is a keyword token.
    #[must_use]
    pub const fn as_keyword(&self) -> Option<Keyword> {
        match &self.kind {
            TokenKind::Keyword(kw) => Some(*kw),
            _ => None,
        }
    }
}
