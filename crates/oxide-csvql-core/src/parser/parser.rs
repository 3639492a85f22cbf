//! Statement parser: a single forward pass driven by an explicit [`State`].

use tracing::{debug, trace};

use super::error::ParseError;
use super::state::State;
use super::validate::validate;
use crate::ast::{Condition, OperandKind, Query, QueryType};
use crate::lexer::{Cursor, Reserved, TokenKind};

/// Statement parser.
///
/// Owns the cursor, the current grammar position and the query being
/// built. Each call to [`Parser::parse`] consumes the parser, so no state
/// survives from one statement to the next.
#[derive(Debug)]
pub struct Parser<'a> {
    cursor: Cursor<'a>,
    state: State,
    query: Query,
    /// UPDATE column whose value has not been read yet.
    pending_field: Option<String>,
}

impl<'a> Parser<'a> {
    /// Creates a new parser for the given statement.
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Self {
            cursor: Cursor::new(input),
            state: State::Type,
            query: Query::default(),
            pending_field: None,
        }
    }

    /// Parses the statement.
    ///
    /// # Errors
    ///
    /// Returns a `ParseError` for the first token that does not fit the
    /// grammar, or for the first structural rule the finished statement
    /// breaks.
    pub fn parse(self) -> Result<Query, ParseError> {
        match self.parse_partial() {
            (query, None) => Ok(query),
            (_, Some(err)) => Err(err),
        }
    }

    /// Parses the statement, returning whatever was built before a failure
    /// together with the failure.
    #[must_use]
    pub fn parse_partial(mut self) -> (Query, Option<ParseError>) {
        let result = self
            .scan()
            .and_then(|()| validate(&self.query, self.state, self.cursor.end()));

        if let Err(err) = &result {
            debug!(
                error = %err,
                pos = err.pos,
                kind = ?err.kind,
                state = ?self.state,
                "Statement rejected"
            );
        }
        (self.query, result.err())
    }

    fn scan(&mut self) -> Result<(), ParseError> {
        while !self.cursor.is_at_end() {
            let next = self.step()?;
            trace!(from = ?self.state, to = ?next, pos = self.cursor.pos(), "Transition");
            self.state = next;
        }
        Ok(())
    }

    /// Reads from the current position and returns the next one.
    fn step(&mut self) -> Result<State, ParseError> {
        match self.state {
            State::Type => self.statement_type(),

            State::SelectField => self.select_field(),
            State::SelectComma => self.expect(Reserved::Comma, State::SelectField),
            State::SelectFrom => self.expect(Reserved::From, State::SelectFromTable),
            State::SelectFromTable => self.table_name(State::Where),

            State::InsertTable => self.table_name(State::InsertFieldsOpeningParens),
            State::InsertFieldsOpeningParens => {
                self.expect(Reserved::LeftParen, State::InsertFields)
            }
            State::InsertFields => self.insert_field(),
            State::InsertFieldsCommaOrClosingParens => {
                self.comma_or_closing_parens(State::InsertFields, State::InsertValuesRWord)
            }
            State::InsertValuesRWord => {
                self.expect(Reserved::Values, State::InsertValuesOpeningParens)
            }
            State::InsertValuesOpeningParens => self.insert_row(),
            State::InsertValues => self.insert_value(),
            State::InsertValuesCommaOrClosingParens => self.insert_row_end(),
            State::InsertValuesCommaBeforeOpeningParens => {
                self.expect(Reserved::Comma, State::InsertValuesOpeningParens)
            }

            State::UpdateTable => self.table_name(State::UpdateSet),
            State::UpdateSet => self.expect(Reserved::Set, State::UpdateField),
            State::UpdateField => self.update_field(),
            State::UpdateEquals => self.expect(Reserved::Eq, State::UpdateValue),
            State::UpdateValue => self.update_value(),
            State::UpdateComma => self.expect(Reserved::Comma, State::UpdateField),

            State::DeleteFromTable => self.table_name(State::Where),

            State::Where => self.expect(Reserved::Where, State::WhereField),
            State::WhereField => self.where_field(),
            State::WhereOperator => self.where_operator(),
            State::WhereValue => self.where_value(),
            State::WhereAnd => self.expect(Reserved::And, State::WhereField),
        }
    }

    /// An error for the current state at the current offset.
    fn error(&self) -> ParseError {
        self.error_with(self.state.expected())
    }

    fn error_with(&self, message: impl Into<String>) -> ParseError {
        let mut message = message.into();
        if let TokenKind::Error(detail) = self.cursor.peek().kind {
            message = format!("{message} ({detail})");
        }
        ParseError::syntax(message, self.cursor.pos())
    }

    /// Pops `reserved` and moves to `next`, or fails with the state's message.
    fn expect(&mut self, reserved: Reserved, next: State) -> Result<State, ParseError> {
        if !self.cursor.peek().is(reserved) {
            return Err(self.error());
        }
        self.cursor.pop();
        Ok(next)
    }

    fn comma_or_closing_parens(
        &mut self,
        on_comma: State,
        on_close: State,
    ) -> Result<State, ParseError> {
        let token = self.cursor.peek();
        let next = if token.is(Reserved::Comma) {
            on_comma
        } else if token.is(Reserved::RightParen) {
            on_close
        } else {
            return Err(self.error());
        };
        self.cursor.pop();
        Ok(next)
    }

    /// `INSERT INTO` and `DELETE FROM` are read as two words.
    fn expect_second_word(&mut self, first: Reserved, second: Reserved) -> Result<(), ParseError> {
        let token = self.cursor.peek();
        if !token.is(second) {
            return Err(self.error_with(format!(
                "at {}: expected {}, got {}",
                first.as_str(),
                second.as_str(),
                token.kind
            )));
        }
        self.cursor.pop();
        Ok(())
    }

    fn statement_type(&mut self) -> Result<State, ParseError> {
        let keyword = match self.cursor.peek().kind {
            TokenKind::Reserved(
                keyword @ (Reserved::Select | Reserved::Insert | Reserved::Update | Reserved::Delete),
            ) => keyword,
            _ => return Err(self.error()),
        };
        self.cursor.pop();

        match keyword {
            Reserved::Select => {
                self.query.query_type = QueryType::Select;
                Ok(State::SelectField)
            }
            Reserved::Insert => {
                self.expect_second_word(Reserved::Insert, Reserved::Into)?;
                self.query.query_type = QueryType::Insert;
                Ok(State::InsertTable)
            }
            Reserved::Update => {
                self.query.query_type = QueryType::Update;
                Ok(State::UpdateTable)
            }
            _ => {
                self.expect_second_word(Reserved::Delete, Reserved::From)?;
                self.query.query_type = QueryType::Delete;
                Ok(State::DeleteFromTable)
            }
        }
    }

    /// A non-empty quoted name or a bare identifier.
    fn table_name(&mut self, next: State) -> Result<State, ParseError> {
        let name = match self.cursor.peek().kind {
            TokenKind::Quoted(name) if !name.is_empty() => name,
            TokenKind::Identifier(name) if name != "*" => name,
            _ => return Err(self.error()),
        };
        self.cursor.pop();
        self.query.table_name = name;
        Ok(next)
    }

    /// One projection entry with its optional `AS alias`.
    fn select_field(&mut self) -> Result<State, ParseError> {
        let TokenKind::Identifier(field) = self.cursor.peek().kind else {
            return Err(self.error());
        };
        self.cursor.pop();
        self.query.fields.push(field);

        let alias = if self.cursor.peek().is(Reserved::As) {
            self.cursor.pop();
            let token = self.cursor.peek();
            let Some(alias) = token.as_column() else {
                let field = self.query.fields.last().map_or("", String::as_str);
                return Err(self.error_with(format!("at AS: expected alias for {field}")));
            };
            let alias = alias.to_owned();
            self.cursor.pop();
            alias
        } else {
            String::new()
        };
        self.query.aliases.push(alias);

        if self.cursor.peek().is(Reserved::From) {
            Ok(State::SelectFrom)
        } else {
            Ok(State::SelectComma)
        }
    }

    fn insert_field(&mut self) -> Result<State, ParseError> {
        let token = self.cursor.peek();
        let Some(field) = token.as_column() else {
            return Err(self.error());
        };
        self.query.fields.push(field.to_owned());
        self.cursor.pop();
        Ok(State::InsertFieldsCommaOrClosingParens)
    }

    fn insert_row(&mut self) -> Result<State, ParseError> {
        let next = self.expect(Reserved::LeftParen, State::InsertValues)?;
        self.query.inserts.push(Vec::new());
        Ok(next)
    }

    fn insert_value(&mut self) -> Result<State, ParseError> {
        let TokenKind::Quoted(value) = self.cursor.peek().kind else {
            return Err(self.error());
        };
        self.cursor.pop();
        if let Some(row) = self.query.inserts.last_mut() {
            row.push(value);
        }
        Ok(State::InsertValuesCommaOrClosingParens)
    }

    /// A comma continues the row; `)` closes it once its length matches the
    /// column list.
    fn insert_row_end(&mut self) -> Result<State, ParseError> {
        if self.cursor.peek().is(Reserved::RightParen) {
            let row_len = self.query.inserts.last().map_or(0, Vec::len);
            if row_len != self.query.fields.len() {
                return Err(
                    self.error_with("at INSERT INTO: value count doesn't match field count")
                );
            }
        }
        self.comma_or_closing_parens(
            State::InsertValues,
            State::InsertValuesCommaBeforeOpeningParens,
        )
    }

    fn update_field(&mut self) -> Result<State, ParseError> {
        let token = self.cursor.peek();
        let Some(field) = token.as_column() else {
            return Err(self.error());
        };
        self.pending_field = Some(field.to_owned());
        self.cursor.pop();
        Ok(State::UpdateEquals)
    }

    fn update_value(&mut self) -> Result<State, ParseError> {
        let TokenKind::Quoted(value) = self.cursor.peek().kind else {
            return Err(self.error());
        };
        self.cursor.pop();
        if let Some(field) = self.pending_field.take() {
            self.query.updates.insert(field, value);
        }

        if self.cursor.peek().is(Reserved::Where) {
            Ok(State::Where)
        } else {
            Ok(State::UpdateComma)
        }
    }

    fn where_field(&mut self) -> Result<State, ParseError> {
        let token = self.cursor.peek();
        let Some(field) = token.as_name() else {
            return Err(self.error());
        };
        self.query.conditions.push(Condition::on_field(field));
        self.cursor.pop();
        Ok(State::WhereOperator)
    }

    fn where_operator(&mut self) -> Result<State, ParseError> {
        let Some(operator) = self.cursor.peek().as_operator() else {
            return Err(self.error());
        };
        self.cursor.pop();
        if let Some(condition) = self.query.conditions.last_mut() {
            condition.operator = operator;
        }
        Ok(State::WhereValue)
    }

    /// A quoted literal, a number, or another column.
    fn where_value(&mut self) -> Result<State, ParseError> {
        let (operand, kind) = match self.cursor.peek().kind {
            TokenKind::Quoted(value) => (value, OperandKind::QuotedLiteral),
            TokenKind::Number(value) => (value, OperandKind::NumericLiteral),
            TokenKind::Identifier(field) if field != "*" => (field, OperandKind::FieldReference),
            _ => return Err(self.error()),
        };
        self.cursor.pop();
        if let Some(condition) = self.query.conditions.last_mut() {
            condition.operand2 = operand;
            condition.operand2_kind = kind;
        }
        Ok(State::WhereAnd)
    }
}
