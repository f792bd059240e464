//! Splitting SQL scripts into statements and locating offsets in them.

use oxide_mysql_core::{Lexer, TokenKind};

/// One statement's text cut out of a script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fragment<'a> {
    /// Byte offset of `text` in the script.
    pub offset: usize,
    /// Statement text without its terminating `;`.
    pub text: &'a str,
}

impl Fragment<'_> {
    /// Byte offset in the script of the first non-whitespace character.
    #[must_use]
    pub fn start(&self) -> usize {
        self.offset + (self.text.len() - self.text.trim_start().len())
    }

    /// Returns true if the fragment holds only whitespace and comments.
    ///
    /// A fragment the lexer rejects is not blank, so its error gets reported.
    fn is_blank(&self) -> bool {
        matches!(
            Lexer::new(self.text).next_token(),
            Ok(token) if token.kind == TokenKind::Eof
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Code,
    String,
    QuotedIdentifier,
    LineComment,
    BlockComment,
}

/// `--` opens a comment only when followed by whitespace or the end of input.
fn is_dash_comment(rest: &str) -> bool {
    rest.strip_prefix("--")
        .is_some_and(|rest| !matches!(rest.chars().next(), Some(c) if !c.is_whitespace()))
}

/// Splits `script` on `;` outside strings, backtick identifiers and comments.
///
/// Fragments that contain only whitespace and comments are dropped.
#[must_use]
pub fn split_statements(script: &str) -> Vec<Fragment<'_>> {
    let mut fragments = vec![];
    let mut push = |start: usize, end: usize| {
        let fragment = Fragment {
            offset: start,
            text: &script[start..end],
        };
        if !fragment.is_blank() {
            fragments.push(fragment);
        }
    };

    let mut state = State::Code;
    let mut start = 0;
    let mut chars = script.char_indices().peekable();
    while let Some((i, c)) = chars.next() {
        let next = chars.peek().map(|&(_, c)| c);
        state = match (state, c) {
            (State::Code, ';') => {
                push(start, i);
                start = i + 1;
                State::Code
            }
            (State::Code, '\'') => State::String,
            (State::Code, '`') => State::QuotedIdentifier,
            (State::Code, '#') => State::LineComment,
            (State::Code, '-') if is_dash_comment(&script[i..]) => {
                chars.next();
                State::LineComment
            }
            (State::Code, '/') if next == Some('*') => {
                chars.next();
                State::BlockComment
            }
            (State::String, '\\') => {
                chars.next();
                State::String
            }
            // '' re-enters the string on the next quote.
            (State::String, '\'')
            | (State::QuotedIdentifier, '`')
            | (State::LineComment, '\n') => State::Code,
            (State::BlockComment, '*') if next == Some('/') => {
                chars.next();
                State::Code
            }
            (state, _) => state,
        };
    }
    push(start, script.len());

    fragments
}

/// Maps byte offsets in a text to 1-based line and column numbers.
#[derive(Debug, Clone)]
pub struct LineIndex {
    line_starts: Vec<usize>,
}

impl LineIndex {
    /// Indexes the line starts of `text`.
    #[must_use]
    pub fn new(text: &str) -> Self {
        let mut line_starts = vec![0];
        line_starts.extend(text.match_indices('\n').map(|(i, _)| i + 1));
        Self { line_starts }
    }

    /// Returns the 1-based line and byte column of `offset`.
    #[must_use]
    pub fn line_column(&self, offset: usize) -> (usize, usize) {
        let line = self.line_starts.partition_point(|&start| start <= offset);
        let line_start = self.line_starts.get(line - 1).copied().unwrap_or(0);
        (line, offset - line_start + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(script: &str) -> Vec<&str> {
        split_statements(script)
            .iter()
            .map(|f| f.text.trim())
            .collect()
    }

    #[test]
    fn test_split_simple() {
        assert_eq!(
            texts("SELECT a FROM t; DELETE FROM u;"),
            vec!["SELECT a FROM t", "DELETE FROM u"]
        );
    }

    #[test]
    fn test_split_keeps_last_unterminated_statement() {
        assert_eq!(texts("DELETE FROM t;\nTRUNCATE u"), vec!["DELETE FROM t", "TRUNCATE u"]);
    }

    #[test]
    fn test_split_ignores_semicolons_in_quotes_and_comments() {
        let script = "INSERT INTO t (a) VALUES ('x;y'); -- c;d\n\
                      SELECT `a;b` FROM t /* ; */; # e;f\n\
                      UPDATE t SET a = 'it''s;' ;\
                      UPDATE t SET a = 'back\\';slash'";
        assert_eq!(
            texts(script),
            vec![
                "INSERT INTO t (a) VALUES ('x;y')",
                "-- c;d\nSELECT `a;b` FROM t /* ; */",
                "# e;f\nUPDATE t SET a = 'it''s;'",
                "UPDATE t SET a = 'back\\';slash'",
            ]
        );
    }

    #[test]
    fn test_split_double_dash_needs_whitespace() {
        assert_eq!(
            texts("DELETE FROM t WHERE a = 1--2; TRUNCATE u"),
            vec!["DELETE FROM t WHERE a = 1--2", "TRUNCATE u"]
        );
        assert_eq!(
            texts("DELETE FROM t WHERE a = 1-- 2; TRUNCATE u\nTRUNCATE v"),
            vec!["DELETE FROM t WHERE a = 1-- 2; TRUNCATE u\nTRUNCATE v"]
        );
    }

    #[test]
    fn test_split_drops_blank_fragments() {
        assert!(split_statements(" ;; -- only a comment\n ; /* x */").is_empty());
    }

    #[test]
    fn test_fragment_offsets() {
        let script = "SELECT a FROM t;\n  DELETE FROM u";
        let fragments = split_statements(script);
        assert_eq!(fragments[1].offset, 16);
        assert_eq!(fragments[1].start(), 19);
        assert_eq!(&script[fragments[1].start()..], "DELETE FROM u");
    }

    #[test]
    fn test_line_index() {
        let index = LineIndex::new("ab\ncd\n\nef");
        assert_eq!(index.line_column(0), (1, 1));
        assert_eq!(index.line_column(2), (1, 3));
        assert_eq!(index.line_column(3), (2, 1));
        assert_eq!(index.line_column(6), (3, 1));
        assert_eq!(index.line_column(8), (4, 2));
    }
}
