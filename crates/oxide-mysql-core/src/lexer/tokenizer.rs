//! SQL tokenizer implementation.

use super::{Keyword, Span, Token, TokenKind};
use crate::parser::ParseError;

/// A lexer that tokenizes MySQL input on demand.
///
/// Tokens are produced lazily by [`Lexer::next_token`] or by iterating the
/// lexer. Iteration yields the `Eof` token once and then stops; it also stops
/// after the first error. The lexer is cheap to clone, so a clone works as a
/// checkpoint, and [`Lexer::reset`] restarts it from the beginning.
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    /// The input source code.
    input: &'a str,
    /// The current byte position.
    pos: usize,
    /// The byte position of the start of the current token.
    start: usize,
    /// Set once iteration has yielded `Eof` or an error.
    finished: bool,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given input.
    #[must_use]
    pub const fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            start: 0,
            finished: false,
        }
    }

    /// Rewinds the lexer to the start of the input.
    pub fn reset(&mut self) {
        self.pos = 0;
        self.start = 0;
        self.finished = false;
    }

    /// Returns the current character without advancing.
    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    /// Returns the character after the current one without advancing.
    fn peek_next(&self) -> Option<char> {
        let mut chars = self.input[self.pos..].chars();
        chars.next();
        chars.next()
    }

    /// Advances to the next character and returns it.
    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    /// Returns true at a `-- ` comment. MySQL requires whitespace or the end
    /// of input after the dashes, so `1--2` is not a comment.
    fn at_dash_comment(&self) -> bool {
        self.input[self.pos..]
            .strip_prefix("--")
            .is_some_and(|rest| !matches!(rest.chars().next(), Some(c) if !c.is_whitespace()))
    }

    /// Skips everything up to (not including) the next newline.
    fn skip_line(&mut self) {
        while self.peek().is_some_and(|c| c != '\n') {
            self.advance();
        }
    }

    /// Skips whitespace and comments (`-- ...`, `# ...`, `/* ... */`).
    fn skip_whitespace_and_comments(&mut self) -> Result<(), ParseError> {
        loop {
            while self.peek().is_some_and(char::is_whitespace) {
                self.advance();
            }

            if self.at_dash_comment() || self.peek() == Some('#') {
                self.skip_line();
                continue;
            }

            match (self.peek(), self.peek_next()) {
                (Some('/'), Some('*')) => {
                    let comment_start = self.pos;
                    self.advance(); // /
                    self.advance(); // *
                    loop {
                        match self.advance() {
                            Some('*') if self.peek() == Some('/') => {
                                self.advance();
                                break;
                            }
                            Some(_) => {}
                            None => {
                                return Err(ParseError::lex(
                                    "Unterminated block comment",
                                    comment_start,
                                ));
                            }
                        }
                    }
                }
                _ => return Ok(()),
            }
        }
    }

    /// Creates a token spanning from the token start to the current position.
    const fn make_token(&self, kind: TokenKind) -> Token {
        Token::new(kind, Span::new(self.start, self.pos))
    }

    /// Scans an identifier, keyword or boolean literal.
    fn scan_word(&mut self) -> Token {
        while self
            .peek()
            .is_some_and(|c| c.is_alphanumeric() || c == '_' || c == '$')
        {
            self.advance();
        }

        let text = &self.input[self.start..self.pos];

        if let Some(keyword) = Keyword::from_str(text) {
            self.make_token(TokenKind::Keyword(keyword))
        } else if text.eq_ignore_ascii_case("TRUE") {
            self.make_token(TokenKind::Boolean(true))
        } else if text.eq_ignore_ascii_case("FALSE") {
            self.make_token(TokenKind::Boolean(false))
        } else {
            self.make_token(TokenKind::Identifier(String::from(text)))
        }
    }

    /// Scans a backtick-quoted identifier. The opening backtick is consumed.
    fn scan_quoted_identifier(&mut self) -> Result<Token, ParseError> {
        let mut name = String::new();

        loop {
            match self.advance() {
                Some('`') if self.peek() == Some('`') => {
                    self.advance();
                    name.push('`');
                }
                Some('`') => break,
                Some(c) => name.push(c),
                None => {
                    return Err(ParseError::lex(
                        "Unterminated quoted identifier",
                        self.start,
                    ));
                }
            }
        }

        if name.is_empty() {
            return Err(ParseError::lex("Empty quoted identifier", self.start));
        }
        Ok(self.make_token(TokenKind::Identifier(name)))
    }

    /// Scans an integer or decimal literal. The first digit is consumed.
    fn scan_number(&mut self) -> Result<Token, ParseError> {
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }

        let mut is_decimal = false;
        if self.peek() == Some('.') && self.peek_next().is_some_and(|c| c.is_ascii_digit()) {
            is_decimal = true;
            self.advance(); // .
            while self.peek().is_some_and(|c| c.is_ascii_digit()) {
                self.advance();
            }
        }

        let span = Span::new(self.start, self.pos);
        let text = span.source_text(self.input);

        if is_decimal {
            return Ok(Token::new(TokenKind::Decimal(String::from(text)), span));
        }
        text.parse::<u64>()
            .map(|n| Token::new(TokenKind::Integer(n), span))
            .map_err(|_| ParseError::lex(format!("Integer literal out of range: {text}"), self.start))
    }

    /// Scans a single-quoted string literal. The opening quote is consumed.
    ///
    /// Both `''` and MySQL backslash escapes are resolved.
    fn scan_string(&mut self) -> Result<Token, ParseError> {
        let mut value = String::new();

        loop {
            match self.advance() {
                Some('\'') if self.peek() == Some('\'') => {
                    self.advance();
                    value.push('\'');
                }
                Some('\'') => return Ok(self.make_token(TokenKind::String(value))),
                Some('\\') => match self.advance() {
                    Some('n') => value.push('\n'),
                    Some('r') => value.push('\r'),
                    Some('t') => value.push('\t'),
                    Some('0') => value.push('\0'),
                    Some(other) => value.push(other),
                    None => break,
                },
                Some(c) => value.push(c),
                None => break,
            }
        }

        Err(ParseError::lex("Unterminated string literal", self.start))
    }

    /// Scans the next token.
    ///
    /// # Errors
    ///
    /// Returns a lex error for an unrecognized character, an unterminated
    /// string, quoted identifier or block comment, or an integer literal that
    /// does not fit in a `u64`.
    pub fn next_token(&mut self) -> Result<Token, ParseError> {
        self.skip_whitespace_and_comments()?;
        self.start = self.pos;

        let Some(c) = self.advance() else {
            return Ok(self.make_token(TokenKind::Eof));
        };

        let kind = match c {
            '(' => TokenKind::LeftParen,
            ')' => TokenKind::RightParen,
            ',' => TokenKind::Comma,
            ';' => TokenKind::Semicolon,
            '.' => TokenKind::Dot,
            '*' => TokenKind::Star,
            '-' => TokenKind::Minus,
            '=' => TokenKind::Eq,
            '<' => match self.peek() {
                Some('=') => {
                    self.advance();
                    TokenKind::LtEq
                }
                Some('>') => {
                    self.advance();
                    TokenKind::NotEq
                }
                _ => TokenKind::Lt,
            },
            '>' => {
                if self.peek() == Some('=') {
                    self.advance();
                    TokenKind::GtEq
                } else {
                    TokenKind::Gt
                }
            }
            '!' if self.peek() == Some('=') => {
                self.advance();
                TokenKind::NotEq
            }
            '\'' => return self.scan_string(),
            '`' => return self.scan_quoted_identifier(),
            c if c.is_ascii_digit() => return self.scan_number(),
            c if c.is_alphabetic() || c == '_' => return Ok(self.scan_word()),
            c => {
                return Err(ParseError::lex(
                    format!("Unexpected character: {c}"),
                    self.start,
                ));
            }
        };

        Ok(self.make_token(kind))
    }

    /// Tokenizes the remaining input, including the trailing `Eof` token.
    ///
    /// # Errors
    ///
    /// Returns the first lex error encountered.
    pub fn tokenize(&mut self) -> Result<Vec<Token>, ParseError> {
        self.by_ref().collect()
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<Token, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let result = self.next_token();
        if !matches!(&result, Ok(token) if !token.is_eof()) {
            self.finished = true;
        }
        Some(result)
    }
}
