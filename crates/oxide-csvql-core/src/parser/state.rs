//! Grammar positions of the statement state machine.

/// Where the parser is in the statement; decides how the next token is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum State {
    /// Expecting SELECT, INSERT INTO, UPDATE or DELETE FROM.
    #[default]
    Type,

    SelectField,
    SelectComma,
    SelectFrom,
    SelectFromTable,

    InsertTable,
    InsertFieldsOpeningParens,
    InsertFields,
    InsertFieldsCommaOrClosingParens,
    InsertValuesRWord,
    InsertValuesOpeningParens,
    InsertValues,
    InsertValuesCommaOrClosingParens,
    /// A row was closed; another one needs a comma first.
    InsertValuesCommaBeforeOpeningParens,

    UpdateTable,
    UpdateSet,
    UpdateField,
    UpdateEquals,
    UpdateValue,
    UpdateComma,

    DeleteFromTable,

    /// The optional (SELECT) or mandatory (UPDATE, DELETE) WHERE keyword.
    Where,
    WhereField,
    WhereOperator,
    WhereValue,
    WhereAnd,
}

impl State {
    /// The message reported when the token at this position does not fit.
    #[must_use]
    pub const fn expected(self) -> &'static str {
        match self {
            Self::Type => "invalid query type",
            Self::SelectField => "at SELECT: expected field to SELECT",
            Self::SelectComma => "at SELECT: expected comma or FROM",
            Self::SelectFrom => "at SELECT: expected FROM",
            Self::SelectFromTable => "at SELECT: expected quoted table name",
            Self::InsertTable => "at INSERT INTO: expected quoted table name",
            Self::InsertFieldsOpeningParens | Self::InsertValuesOpeningParens => {
                "at INSERT INTO: expected opening parens"
            }
            Self::InsertFields => "at INSERT INTO: expected at least one field to insert",
            Self::InsertFieldsCommaOrClosingParens | Self::InsertValuesCommaOrClosingParens => {
                "at INSERT INTO: expected comma or closing parens"
            }
            Self::InsertValuesRWord => "at INSERT INTO: expected 'VALUES'",
            Self::InsertValues => "at INSERT INTO: expected quoted value",
            Self::InsertValuesCommaBeforeOpeningParens => "at INSERT INTO: expected comma",
            Self::UpdateTable => "at UPDATE: expected quoted table name",
            Self::UpdateSet => "at UPDATE: expected 'SET'",
            Self::UpdateField => "at UPDATE: expected at least one field to update",
            Self::UpdateEquals => "at UPDATE: expected '='",
            Self::UpdateValue => "at UPDATE: expected quoted value",
            Self::UpdateComma => "at UPDATE: expected ','",
            Self::DeleteFromTable => "at DELETE FROM: expected quoted table name",
            Self::Where => "expected WHERE",
            Self::WhereField => "at WHERE: expected field",
            Self::WhereOperator => "at WHERE: unknown operator",
            Self::WhereValue => "at WHERE: expected quoted value",
            Self::WhereAnd => "at WHERE: expected AND",
        }
    }

    /// Returns true if the statement may end here.
    #[must_use]
    pub const fn accepts_end(self) -> bool {
        matches!(
            self,
            Self::SelectComma
                | Self::Where
                | Self::WhereAnd
                | Self::InsertValuesCommaBeforeOpeningParens
                | Self::UpdateComma
        )
    }
}
