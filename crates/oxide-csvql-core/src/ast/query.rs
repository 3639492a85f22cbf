//! The parsed statement.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::{Condition, write_quoted};

/// Statement kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryType {
    /// No statement keyword recognized yet.
    #[default]
    Unknown,
    Select,
    Insert,
    Update,
    Delete,
}

impl QueryType {
    /// Returns the leading keyword(s) of the statement.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Unknown => "UNKNOWN",
            Self::Select => "SELECT",
            Self::Insert => "INSERT INTO",
            Self::Update => "UPDATE",
            Self::Delete => "DELETE FROM",
        }
    }
}

impl fmt::Display for QueryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A parsed SELECT, INSERT, UPDATE or DELETE statement.
///
/// Which fields are meaningful depends on [`Query::query_type`]:
///
/// | type   | fields            | aliases | conditions | updates | inserts |
/// |--------|-------------------|---------|------------|---------|---------|
/// | SELECT | projection        | yes     | optional   |         |         |
/// | INSERT | target columns    |         |            |         | rows    |
/// | UPDATE |                   |         | required   | yes     |         |
/// | DELETE |                   |         | required   |         |         |
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Query {
    /// Statement kind.
    #[serde(rename = "type")]
    pub query_type: QueryType,
    /// Target table (the quoted or bare name after FROM/INTO/UPDATE).
    /// Empty for a SELECT without FROM.
    pub table_name: String,
    /// Projection for SELECT, column list for INSERT.
    pub fields: Vec<String>,
    /// One entry per SELECT field; empty when no `AS` was given.
    pub aliases: Vec<String>,
    /// Flat AND-conjunction, in source order.
    pub conditions: Vec<Condition>,
    /// SET assignments of an UPDATE.
    pub updates: IndexMap<String, String>,
    /// VALUES rows of an INSERT, each as long as `fields`.
    pub inserts: Vec<Vec<String>>,
}

impl Query {
    /// Pairs every SELECT field with its alias, if one was given.
    pub fn projection(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.fields.iter().zip(&self.aliases).map(|(field, alias)| {
            let alias = (!alias.is_empty()).then_some(alias.as_str());
            (field.as_str(), alias)
        })
    }

    fn write_conditions(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, condition) in self.conditions.iter().enumerate() {
            f.write_str(if i == 0 { " WHERE " } else { " AND " })?;
            write!(f, "{condition}")?;
        }
        Ok(())
    }
}

/// Renders the statement as canonical text that parses back to an equal
/// `Query`.
impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.query_type {
            QueryType::Unknown => return Ok(()),
            QueryType::Select => {
                f.write_str("SELECT ")?;
                for (i, (field, alias)) in self.projection().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    f.write_str(field)?;
                    if let Some(alias) = alias {
                        write!(f, " AS {alias}")?;
                    }
                }
                if !self.table_name.is_empty() {
                    f.write_str(" FROM ")?;
                    write_quoted(f, &self.table_name)?;
                }
            }
            QueryType::Insert => {
                f.write_str("INSERT INTO ")?;
                write_quoted(f, &self.table_name)?;
                write!(f, " ({}) VALUES ", self.fields.join(", "))?;
                for (i, row) in self.inserts.iter().enumerate() {
                    f.write_str(if i == 0 { "(" } else { ", (" })?;
                    for (j, value) in row.iter().enumerate() {
                        if j > 0 {
                            f.write_str(", ")?;
                        }
                        write_quoted(f, value)?;
                    }
                    f.write_str(")")?;
                }
            }
            QueryType::Update => {
                f.write_str("UPDATE ")?;
                write_quoted(f, &self.table_name)?;
                f.write_str(" SET ")?;
                for (i, (field, value)) in self.updates.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{field} = ")?;
                    write_quoted(f, value)?;
                }
            }
            QueryType::Delete => {
                f.write_str("DELETE FROM ")?;
                write_quoted(f, &self.table_name)?;
            }
        }
        self.write_conditions(f)
    }
}
