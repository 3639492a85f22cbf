//! Checks run once the scan has consumed the whole statement.

use super::error::ParseError;
use super::state::State;
use crate::ast::{OperandKind, Operator, Query, QueryType};

/// Checks the rules that can only be judged after the last token.
///
/// `state` is where the scan stopped and `pos` the final offset; every
/// failure is reported at `pos`.
pub(super) fn validate(query: &Query, state: State, pos: usize) -> Result<(), ParseError> {
    let fail = |message: &str| -> Result<(), ParseError> {
        Err(ParseError::validation(message, pos))
    };

    if state == State::WhereField && query.conditions.is_empty() {
        return fail("at WHERE: empty WHERE clause");
    }
    if query.query_type == QueryType::Unknown {
        return Err(ParseError::empty_input(pos));
    }

    // SELECT version() has no FROM; SELECT a FROM <end> does.
    let select_without_from = query.query_type == QueryType::Select
        && !query.fields.is_empty()
        && state != State::SelectFromTable;
    if query.table_name.is_empty() && !select_without_from {
        return fail("table name cannot be empty");
    }

    if matches!(query.query_type, QueryType::Update | QueryType::Delete)
        && query.conditions.is_empty()
    {
        return fail("at WHERE: WHERE clause is mandatory for UPDATE & DELETE");
    }

    for condition in &query.conditions {
        if condition.operator == Operator::Unknown {
            return fail("at WHERE: condition without operator");
        }
        // The right side was never read, so its kind is meaningless.
        if state == State::WhereValue {
            return Err(ParseError::syntax(state.expected(), pos));
        }
        if condition.operand1.is_empty() && condition.operand1_kind == OperandKind::FieldReference
        {
            return fail("at WHERE: condition with empty left side operand");
        }
        if condition.operand2.is_empty() && condition.operand2_kind == OperandKind::FieldReference
        {
            return fail("at WHERE: condition with empty right side operand");
        }
    }

    if query.query_type == QueryType::Insert {
        if query.inserts.is_empty() {
            return fail("at INSERT INTO: need at least one row to insert");
        }
        if query.inserts.iter().any(|row| row.len() != query.fields.len()) {
            return fail("at INSERT INTO: value count doesn't match field count");
        }
    }

    if query.query_type == QueryType::Select && query.fields.len() != query.aliases.len() {
        return fail("at SELECT: fields and aliases count mismatch");
    }

    // Stopped mid-clause, e.g. after a trailing comma or AND.
    if !state.accepts_end() {
        return Err(ParseError::syntax(state.expected(), pos));
    }

    Ok(())
}
