//! WHERE clause predicate types.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::write_quoted;

/// Comparison operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operator {
    /// Not yet resolved. Never present in a successfully parsed query.
    #[default]
    Unknown,
    Eq,
    Ne,
    Lt,
    Lte,
    Gt,
    Gte,
}

impl Operator {
    /// Returns the operator symbol.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Unknown => "?",
            Self::Eq => "=",
            Self::Ne => "!=",
            Self::Lt => "<",
            Self::Lte => "<=",
            Self::Gt => ">",
            Self::Gte => ">=",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What an operand holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OperandKind {
    /// A column name.
    #[default]
    FieldReference,
    /// A single-quoted string.
    QuotedLiteral,
    /// A bare number such as `-1.5`.
    NumericLiteral,
}

/// One comparison in a WHERE clause.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Condition {
    /// Left-hand operand.
    pub operand1: String,
    /// Always [`OperandKind::FieldReference`] in this grammar.
    pub operand1_kind: OperandKind,
    /// The comparison.
    pub operator: Operator,
    /// Right-hand operand.
    pub operand2: String,
    /// Whether the right-hand side is a column or a literal.
    pub operand2_kind: OperandKind,
}

impl Condition {
    /// Creates a `field <operator> operand2` condition.
    #[must_use]
    pub fn new(
        field: impl Into<String>,
        operator: Operator,
        operand2: impl Into<String>,
        operand2_kind: OperandKind,
    ) -> Self {
        Self {
            operand1: field.into(),
            operand1_kind: OperandKind::FieldReference,
            operator,
            operand2: operand2.into(),
            operand2_kind,
        }
    }

    /// A condition whose left side is known but whose operator and right
    /// side are still to be read.
    pub(crate) fn on_field(field: impl Into<String>) -> Self {
        Self {
            operand1: field.into(),
            ..Self::default()
        }
    }
}

fn write_operand(f: &mut fmt::Formatter<'_>, value: &str, kind: OperandKind) -> fmt::Result {
    match kind {
        OperandKind::QuotedLiteral => write_quoted(f, value),
        OperandKind::FieldReference | OperandKind::NumericLiteral => f.write_str(value),
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_operand(f, &self.operand1, self.operand1_kind)?;
        write!(f, " {} ", self.operator)?;
        write_operand(f, &self.operand2, self.operand2_kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_condition_display() {
        let quoted = Condition::new("name", Operator::Ne, "it's", OperandKind::QuotedLiteral);
        assert_eq!(quoted.to_string(), r"name != 'it\'s'");

        let field = Condition::new("a", Operator::Lte, "b", OperandKind::FieldReference);
        assert_eq!(field.to_string(), "a <= b");

        let number = Condition::new("age", Operator::Gt, "-3.5", OperandKind::NumericLiteral);
        assert_eq!(number.to_string(), "age > -3.5");
    }

    #[test]
    fn test_on_field_is_unresolved() {
        let c = Condition::on_field("a");
        assert_eq!(c.operand1, "a");
        assert_eq!(c.operator, Operator::Unknown);
        assert_eq!(c.operand2_kind, OperandKind::FieldReference);
        assert!(c.operand2.is_empty());
    }
}
