//! SQL Parser implementation.

use super::error::ParseError;
use crate::ast::{
    AlterOperation, AlterTableStatement, Assignment, ColumnConstraint, ColumnDef, ColumnRef,
    ComparisonOp, CreateTableStatement, DataType, DeleteStatement, DropTableStatement, Expr,
    InsertStatement, Literal, OrderDirection, OrderItem, Projection, SelectColumn,
    SelectStatement, Statement, TableConstraint, TableName, TableRef, TruncateStatement,
    UpdateStatement, ValuesRow,
};
use crate::lexer::{Keyword, Lexer, Span, Token, TokenKind};

/// SQL Parser.
///
/// A parser handles exactly one statement, optionally terminated by `;`.
/// Tokens are pulled from the lexer as the grammar needs them.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    current: Token,
}

impl<'a> Parser<'a> {
    /// Creates a new parser for the given input.
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Self {
            lexer: Lexer::new(input),
            current: Token::new(TokenKind::Eof, Span::new(0, 0)),
        }
    }

    /// Parses the input as a single SQL statement.
    ///
    /// # Errors
    ///
    /// Returns a `ParseError` if the input cannot be tokenized, is not a
    /// valid statement, contains anything after the statement's `;`, or is an
    /// INSERT whose rows do not match its column list.
    pub fn parse_statement(mut self) -> Result<Statement, ParseError> {
        self.advance()?;

        let statement = match self.current.as_keyword() {
            Some(Keyword::Select) => Statement::Select(self.parse_select_statement()?),
            Some(Keyword::Insert) => Statement::Insert(self.parse_insert_statement()?),
            Some(Keyword::Update) => Statement::Update(self.parse_update_statement()?),
            Some(Keyword::Delete) => Statement::Delete(self.parse_delete_statement()?),
            Some(Keyword::Create) => Statement::CreateTable(self.parse_create_table_statement()?),
            Some(Keyword::Alter) => Statement::AlterTable(self.parse_alter_table_statement()?),
            Some(Keyword::Drop) => Statement::DropTable(self.parse_drop_table_statement()?),
            Some(Keyword::Truncate) => Statement::Truncate(self.parse_truncate_statement()?),
            _ => {
                return Err(self.unexpected(
                    "SELECT, INSERT, UPDATE, DELETE, CREATE, ALTER, DROP or TRUNCATE",
                ));
            }
        };

        self.eat(&TokenKind::Semicolon)?;
        if !self.current.is_eof() {
            return Err(self.unexpected("end of statement"));
        }

        Ok(statement)
    }

    /// Parses a SELECT statement.
    fn parse_select_statement(&mut self) -> Result<SelectStatement, ParseError> {
        self.expect_keyword(Keyword::Select)?;

        let projection = if self.eat(&TokenKind::Star)? {
            Projection::Wildcard
        } else if matches!(self.current.kind, TokenKind::Identifier(_)) {
            Projection::Columns(self.parse_comma_separated(Self::parse_select_column)?)
        } else {
            return Err(self.unexpected("`*` or column name"));
        };

        self.expect_keyword(Keyword::From)?;
        let from = self.parse_comma_separated(Self::parse_table_ref)?;

        let where_clause = self.parse_where_clause()?;

        let order_by = if self.eat_keyword(Keyword::Order)? {
            self.expect_keyword(Keyword::By)?;
            Some(self.parse_comma_separated(Self::parse_order_item)?)
        } else {
            None
        };

        let (limit, offset) = self.parse_limit_clause()?;

        Ok(SelectStatement {
            projection,
            from,
            where_clause,
            order_by,
            limit,
            offset,
        })
    }

    /// Parses one entry of the SELECT list.
    fn parse_select_column(&mut self) -> Result<SelectColumn, ParseError> {
        let column = self.parse_column_ref()?;
        let alias = self.parse_optional_alias()?;
        Ok(SelectColumn { column, alias })
    }

    /// Parses a table reference in a FROM clause.
    fn parse_table_ref(&mut self) -> Result<TableRef, ParseError> {
        let TableName { schema, name } = self.parse_table_name()?;
        let alias = self.parse_optional_alias()?;
        Ok(TableRef {
            schema,
            name,
            alias,
        })
    }

    /// Parses `name` or `schema.name`.
    fn parse_table_name(&mut self) -> Result<TableName, ParseError> {
        let first = self.expect_identifier("table name")?;
        if self.eat(&TokenKind::Dot)? {
            let name = self.expect_identifier("table name")?;
            Ok(TableName {
                schema: Some(first),
                name,
            })
        } else {
            Ok(TableName {
                schema: None,
                name: first,
            })
        }
    }

    /// Parses `column` or `qualifier.column`.
    fn parse_column_ref(&mut self) -> Result<ColumnRef, ParseError> {
        let first = self.expect_identifier("column name")?;
        if self.eat(&TokenKind::Dot)? {
            let name = self.expect_identifier("column name")?;
            Ok(ColumnRef {
                qualifier: Some(first),
                name,
            })
        } else {
            Ok(ColumnRef {
                qualifier: None,
                name: first,
            })
        }
    }

    /// Parses an optional `AS alias` or bare `alias`.
    fn parse_optional_alias(&mut self) -> Result<Option<String>, ParseError> {
        if self.eat_keyword(Keyword::As)? || matches!(self.current.kind, TokenKind::Identifier(_))
        {
            self.expect_identifier("alias").map(Some)
        } else {
            Ok(None)
        }
    }

    /// Parses an optional WHERE clause.
    fn parse_where_clause(&mut self) -> Result<Option<Expr>, ParseError> {
        if self.eat_keyword(Keyword::Where)? {
            Ok(Some(self.parse_comparison()?))
        } else {
            Ok(None)
        }
    }

    /// Parses `operand op operand`.
    fn parse_comparison(&mut self) -> Result<Expr, ParseError> {
        let left = self.parse_operand()?;
        let Some(op) = comparison_op(&self.current.kind) else {
            return Err(self.unexpected("comparison operator"));
        };
        self.advance()?;
        let right = self.parse_operand()?;
        Ok(left.compare(op, right))
    }

    /// Parses a column reference or a literal.
    fn parse_operand(&mut self) -> Result<Expr, ParseError> {
        if matches!(self.current.kind, TokenKind::Identifier(_)) {
            Ok(Expr::Column(self.parse_column_ref()?))
        } else {
            Ok(Expr::Literal(self.parse_literal("column name or literal")?))
        }
    }

    /// Parses an ORDER BY entry.
    fn parse_order_item(&mut self) -> Result<OrderItem, ParseError> {
        let column = self.parse_column_ref()?;
        let direction = if self.eat_keyword(Keyword::Desc)? {
            OrderDirection::Desc
        } else {
            self.eat_keyword(Keyword::Asc)?;
            OrderDirection::Asc
        };
        Ok(OrderItem { column, direction })
    }

    /// Parses an optional `LIMIT n [OFFSET m]` or MySQL `LIMIT m, n`.
    fn parse_limit_clause(&mut self) -> Result<(Option<u64>, Option<u64>), ParseError> {
        if !self.eat_keyword(Keyword::Limit)? {
            return Ok((None, None));
        }

        let first = self.parse_row_count()?;

        // LIMIT offset, count
        if self.eat(&TokenKind::Comma)? {
            let count = self.parse_row_count()?;
            return Ok((Some(count), Some(first)));
        }

        let offset = if self.eat_keyword(Keyword::Offset)? {
            Some(self.parse_row_count()?)
        } else {
            None
        };
        Ok((Some(first), offset))
    }

    /// Parses a non-negative integer for LIMIT/OFFSET.
    fn parse_row_count(&mut self) -> Result<u64, ParseError> {
        let TokenKind::Integer(count) = self.current.kind else {
            return Err(self.unexpected("row count"));
        };
        self.advance()?;
        Ok(count)
    }

    /// Parses an INSERT statement.
    fn parse_insert_statement(&mut self) -> Result<InsertStatement, ParseError> {
        self.expect_keyword(Keyword::Insert)?;
        self.expect_keyword(Keyword::Into)?;

        let table = self.parse_table_name()?;
        let columns = self.parse_column_list()?;

        self.expect_keyword(Keyword::Values)?;
        let mut rows = vec![];
        loop {
            let row_start = self.current.span.start;
            self.expect(&TokenKind::LeftParen)?;
            let values = if self.check(&TokenKind::RightParen) {
                vec![]
            } else {
                self.parse_comma_separated(|p| p.parse_literal("literal value"))?
            };
            self.expect(&TokenKind::RightParen)?;

            if values.len() != columns.len() {
                return Err(ParseError::arity(columns.len(), values.len(), row_start));
            }
            rows.push(ValuesRow(values));

            if !self.eat(&TokenKind::Comma)? {
                break;
            }
        }

        Ok(InsertStatement {
            table,
            columns,
            rows,
        })
    }

    /// Parses an UPDATE statement.
    fn parse_update_statement(&mut self) -> Result<UpdateStatement, ParseError> {
        self.expect_keyword(Keyword::Update)?;
        let table = self.parse_table_name()?;

        self.expect_keyword(Keyword::Set)?;
        let assignments = self.parse_comma_separated(|p| {
            let column = p.expect_identifier("column name")?;
            p.expect(&TokenKind::Eq)?;
            let value = p.parse_literal("literal value")?;
            Ok(Assignment { column, value })
        })?;

        let where_clause = self.parse_where_clause()?;

        Ok(UpdateStatement {
            table,
            assignments,
            where_clause,
        })
    }

    /// Parses a DELETE statement.
    fn parse_delete_statement(&mut self) -> Result<DeleteStatement, ParseError> {
        self.expect_keyword(Keyword::Delete)?;
        self.expect_keyword(Keyword::From)?;
        let table = self.parse_table_name()?;
        let where_clause = self.parse_where_clause()?;
        Ok(DeleteStatement {
            table,
            where_clause,
        })
    }

    /// Parses a CREATE TABLE statement.
    fn parse_create_table_statement(&mut self) -> Result<CreateTableStatement, ParseError> {
        self.expect_keyword(Keyword::Create)?;
        self.expect_keyword(Keyword::Table)?;

        let if_not_exists = if self.eat_keyword(Keyword::If)? {
            self.expect_keyword(Keyword::Not)?;
            self.expect_keyword(Keyword::Exists)?;
            true
        } else {
            false
        };

        let table = self.parse_table_name()?;

        self.expect(&TokenKind::LeftParen)?;
        let mut columns = vec![];
        let mut constraints = vec![];
        loop {
            match self.current.as_keyword() {
                Some(Keyword::Primary) => {
                    self.advance()?;
                    self.expect_keyword(Keyword::Key)?;
                    constraints.push(TableConstraint::PrimaryKey(self.parse_column_list()?));
                }
                Some(Keyword::Unique) => {
                    self.advance()?;
                    self.eat_keyword(Keyword::Key)?;
                    constraints.push(TableConstraint::Unique(self.parse_column_list()?));
                }
                _ => columns.push(self.parse_column_def()?),
            }
            if !self.eat(&TokenKind::Comma)? {
                break;
            }
        }
        if columns.is_empty() {
            return Err(self.unexpected("column definition"));
        }
        self.expect(&TokenKind::RightParen)?;

        Ok(CreateTableStatement {
            if_not_exists,
            table,
            columns,
            constraints,
        })
    }

    /// Parses `name type[(params)] constraint*`.
    fn parse_column_def(&mut self) -> Result<ColumnDef, ParseError> {
        let name = self.expect_identifier("column name")?;
        let data_type = self.parse_data_type()?;

        let mut constraints: Vec<ColumnConstraint> = vec![];
        loop {
            let start = self.current.clone();
            let constraint = match start.as_keyword() {
                Some(Keyword::Primary) => {
                    self.advance()?;
                    self.expect_keyword(Keyword::Key)?;
                    ColumnConstraint::PrimaryKey
                }
                Some(Keyword::Not) => {
                    self.advance()?;
                    self.expect_keyword(Keyword::Null)?;
                    ColumnConstraint::NotNull
                }
                Some(Keyword::Null) => {
                    self.advance()?;
                    ColumnConstraint::Null
                }
                Some(Keyword::AutoIncrement) => {
                    self.advance()?;
                    ColumnConstraint::AutoIncrement
                }
                Some(Keyword::Unique) => {
                    self.advance()?;
                    self.eat_keyword(Keyword::Key)?;
                    ColumnConstraint::Unique
                }
                Some(Keyword::Default) => {
                    self.advance()?;
                    ColumnConstraint::Default(self.parse_literal("default value")?)
                }
                Some(Keyword::Comment) => {
                    self.advance()?;
                    ColumnConstraint::Comment(self.expect_string("comment string")?)
                }
                _ => break,
            };

            if constraints.iter().any(|c| c.conflicts_with(&constraint)) {
                return Err(ParseError::unexpected(
                    "a constraint not already declared for this column",
                    &start,
                ));
            }
            constraints.push(constraint);
        }

        Ok(ColumnDef {
            name,
            data_type,
            constraints,
        })
    }

    /// Parses a data type name and its optional parameters.
    fn parse_data_type(&mut self) -> Result<DataType, ParseError> {
        let name = match &self.current.kind {
            TokenKind::Identifier(name) => name.to_ascii_uppercase(),
            _ => return Err(self.unexpected("data type")),
        };
        self.advance()?;

        let params = if self.eat(&TokenKind::LeftParen)? {
            let params = self.parse_comma_separated(|p| {
                let TokenKind::Integer(n) = &p.current.kind else {
                    return Err(p.unexpected("type parameter"));
                };
                let param = u32::try_from(*n).map_err(|_| p.unexpected("type parameter"))?;
                p.advance()?;
                Ok(param)
            })?;
            self.expect(&TokenKind::RightParen)?;
            params
        } else {
            vec![]
        };

        Ok(DataType { name, params })
    }

    /// Parses an ALTER TABLE statement.
    fn parse_alter_table_statement(&mut self) -> Result<AlterTableStatement, ParseError> {
        self.expect_keyword(Keyword::Alter)?;
        self.expect_keyword(Keyword::Table)?;
        let table = self.parse_table_name()?;

        let operation = if self.eat_keyword(Keyword::Add)? {
            self.eat_keyword(Keyword::Column)?;
            AlterOperation::AddColumn(self.parse_column_def()?)
        } else if self.eat_keyword(Keyword::Drop)? {
            self.eat_keyword(Keyword::Column)?;
            AlterOperation::DropColumn(self.expect_identifier("column name")?)
        } else {
            return Err(self.unexpected("ADD or DROP"));
        };

        Ok(AlterTableStatement { table, operation })
    }

    /// Parses a DROP TABLE statement.
    fn parse_drop_table_statement(&mut self) -> Result<DropTableStatement, ParseError> {
        self.expect_keyword(Keyword::Drop)?;
        self.expect_keyword(Keyword::Table)?;

        let if_exists = if self.eat_keyword(Keyword::If)? {
            self.expect_keyword(Keyword::Exists)?;
            true
        } else {
            false
        };

        let tables = self.parse_comma_separated(Self::parse_table_name)?;
        Ok(DropTableStatement { if_exists, tables })
    }

    /// Parses a TRUNCATE [TABLE] statement.
    fn parse_truncate_statement(&mut self) -> Result<TruncateStatement, ParseError> {
        self.expect_keyword(Keyword::Truncate)?;
        self.eat_keyword(Keyword::Table)?;
        let table = self.parse_table_name()?;
        Ok(TruncateStatement { table })
    }

    /// Parses a literal value, including negative numbers.
    fn parse_literal(&mut self, expected: &str) -> Result<Literal, ParseError> {
        if self.eat(&TokenKind::Minus)? {
            return self.parse_negative_number();
        }

        let literal = match &self.current.kind {
            TokenKind::Integer(n) => Literal::Integer(
                i64::try_from(*n).map_err(|_| self.integer_out_of_range("", *n))?,
            ),
            TokenKind::Decimal(text) => Literal::Decimal(text.clone()),
            TokenKind::String(s) => Literal::String(s.clone()),
            TokenKind::Boolean(b) => Literal::Boolean(*b),
            TokenKind::Keyword(Keyword::Null) => Literal::Null,
            _ => return Err(self.unexpected(expected)),
        };
        self.advance()?;
        Ok(literal)
    }

    /// Parses the number after a leading `-`.
    fn parse_negative_number(&mut self) -> Result<Literal, ParseError> {
        let literal = match &self.current.kind {
            TokenKind::Integer(n) => Literal::Integer(
                0_i64
                    .checked_sub_unsigned(*n)
                    .ok_or_else(|| self.integer_out_of_range("-", *n))?,
            ),
            TokenKind::Decimal(text) => Literal::Decimal(format!("-{text}")),
            _ => return Err(self.unexpected("number")),
        };
        self.advance()?;
        Ok(literal)
    }

    /// Lex error for an integer literal that does not fit in an `i64`.
    fn integer_out_of_range(&self, sign: &str, magnitude: u64) -> ParseError {
        ParseError::lex(
            format!("Integer literal out of range: {sign}{magnitude}"),
            self.current.span.start,
        )
    }

    /// Parses a parenthesized, comma-separated list of column names.
    fn parse_column_list(&mut self) -> Result<Vec<String>, ParseError> {
        self.expect(&TokenKind::LeftParen)?;
        let columns = self.parse_comma_separated(|p| p.expect_identifier("column name"))?;
        self.expect(&TokenKind::RightParen)?;
        Ok(columns)
    }

    /// Parses one or more items separated by commas.
    fn parse_comma_separated<T>(
        &mut self,
        mut parse_item: impl FnMut(&mut Self) -> Result<T, ParseError>,
    ) -> Result<Vec<T>, ParseError> {
        let mut items = vec![parse_item(self)?];
        while self.eat(&TokenKind::Comma)? {
            items.push(parse_item(self)?);
        }
        Ok(items)
    }

    // --- Helper methods ---

    /// Advances to the next token, returning the one just consumed.
    fn advance(&mut self) -> Result<Token, ParseError> {
        let next = self.lexer.next_token()?;
        Ok(core::mem::replace(&mut self.current, next))
    }

    /// Creates an error for the current token.
    fn unexpected(&self, expected: &str) -> ParseError {
        ParseError::unexpected(expected, &self.current)
    }

    /// Checks if the current token matches the given kind.
    fn check(&self, kind: &TokenKind) -> bool {
        core::mem::discriminant(&self.current.kind) == core::mem::discriminant(kind)
    }

    /// Checks if the current token is the given keyword.
    fn check_keyword(&self, keyword: Keyword) -> bool {
        self.current.as_keyword() == Some(keyword)
    }

    /// Consumes the current token if it matches the given kind.
    fn eat(&mut self, kind: &TokenKind) -> Result<bool, ParseError> {
        if self.check(kind) {
            self.advance()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Consumes the current token if it is the given keyword.
    fn eat_keyword(&mut self, keyword: Keyword) -> Result<bool, ParseError> {
        if self.check_keyword(keyword) {
            self.advance()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Expects the current token to be the given kind.
    fn expect(&mut self, kind: &TokenKind) -> Result<(), ParseError> {
        if self.eat(kind)? {
            Ok(())
        } else {
            Err(self.unexpected(&kind.describe()))
        }
    }

    /// Expects the current token to be the given keyword.
    fn expect_keyword(&mut self, keyword: Keyword) -> Result<(), ParseError> {
        if self.eat_keyword(keyword)? {
            Ok(())
        } else {
            Err(self.unexpected(keyword.as_str()))
        }
    }

    /// Expects and returns an identifier.
    fn expect_identifier(&mut self, expected: &str) -> Result<String, ParseError> {
        match &self.current.kind {
            TokenKind::Identifier(name) => {
                let name = name.clone();
                self.advance()?;
                Ok(name)
            }
            _ => Err(self.unexpected(expected)),
        }
    }

    /// Expects and returns a string literal.
    fn expect_string(&mut self, expected: &str) -> Result<String, ParseError> {
        match &self.current.kind {
            TokenKind::String(value) => {
                let value = value.clone();
                self.advance()?;
                Ok(value)
            }
            _ => Err(self.unexpected(expected)),
        }
    }
}

/// Maps a token to the comparison operator it spells.
const fn comparison_op(kind: &TokenKind) -> Option<ComparisonOp> {
    match kind {
        TokenKind::Eq => Some(ComparisonOp::Eq),
        TokenKind::NotEq => Some(ComparisonOp::NotEq),
        TokenKind::Lt => Some(ComparisonOp::Lt),
        TokenKind::LtEq => Some(ComparisonOp::LtEq),
        TokenKind::Gt => Some(ComparisonOp::Gt),
        TokenKind::GtEq => Some(ComparisonOp::GtEq),
        _ => None,
    }
}
