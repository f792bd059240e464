//! Formatting helpers shared by the AST `Display` implementations.

use core::fmt;

use crate::lexer::Keyword;

/// An identifier, backtick-quoted when it would not lex back as itself.
pub struct Ident<'a>(pub &'a str);

impl Ident<'_> {
    fn needs_quoting(&self) -> bool {
        let mut chars = self.0.chars();
        let Some(first) = chars.next() else {
            return true;
        };
        !(first.is_alphabetic() || first == '_')
            || !chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
            || Keyword::from_str(self.0).is_some()
            || self.0.eq_ignore_ascii_case("TRUE")
            || self.0.eq_ignore_ascii_case("FALSE")
    }
}

impl fmt::Display for Ident<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.needs_quoting() {
            write!(f, "`{}`", self.0.replace('`', "``"))
        } else {
            f.write_str(self.0)
        }
    }
}

/// A single-quoted string literal.
pub struct QuotedString<'a>(pub &'a str);

impl fmt::Display for QuotedString<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("'")?;
        for c in self.0.chars() {
            match c {
                '\'' => f.write_str("''")?,
                '\\' => f.write_str("\\\\")?,
                c => write!(f, "{c}")?,
            }
        }
        f.write_str("'")
    }
}

/// Items joined with `", "`.
pub struct CommaSeparated<'a, T>(pub &'a [T]);

impl<T: fmt::Display> fmt::Display for CommaSeparated<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, item) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{item}")?;
        }
        Ok(())
    }
}

/// Identifiers joined with `", "`.
pub struct IdentList<'a>(pub &'a [String]);

impl fmt::Display for IdentList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, name) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", Ident(name))?;
        }
        Ok(())
    }
}
