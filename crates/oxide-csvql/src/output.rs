//! Rendering of parsed statements and tokens.

use clap::ValueEnum;
use oxide_csvql_core::{Query, Token};

use crate::error::Result;

/// How parsed statements are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Format {
    /// One JSON object per line.
    Json,
    /// Indented JSON.
    #[default]
    Pretty,
    /// Canonical statement text.
    Sql,
    /// Rust debug representation.
    Debug,
}

/// Renders one query in the given format.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn render(query: &Query, format: Format) -> Result<String> {
    let rendered = match format {
        Format::Json => serde_json::to_string(query)?,
        Format::Pretty => serde_json::to_string_pretty(query)?,
        Format::Sql => query.to_string(),
        Format::Debug => format!("{query:#?}"),
    };
    Ok(rendered)
}

/// Renders one token as `start..end  kind  text`.
#[must_use]
pub fn render_token(token: &Token, sql: &str) -> String {
    let Token { kind, span } = token;
    let kind = format!("{kind:?}");
    let text = token.text(sql);
    format!("{:>4}..{:<4} {kind:<24} {text}", span.start, span.end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxide_csvql_core::{Cursor, parse};

    #[test]
    fn test_render_sql() {
        let query = parse("select a as b from 't' where a = 1").unwrap();
        assert_eq!(
            render(&query, Format::Sql).unwrap(),
            "SELECT a AS b FROM 't' WHERE a = 1"
        );
    }

    #[test]
    fn test_render_json() {
        let query = parse("DELETE FROM 't' WHERE id = '3'").unwrap();
        let json = render(&query, Format::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["type"], "delete");
        assert_eq!(value["table_name"], "t");
        assert!(!json.contains('\n'));
    }

    #[test]
    fn test_render_pretty_is_multiline() {
        let query = parse("SELECT a FROM 't'").unwrap();
        assert!(render(&query, Format::Pretty).unwrap().contains('\n'));
    }

    #[test]
    fn test_render_token() {
        let sql = "SELECT a";
        let tokens = Cursor::new(sql).tokenize();
        let line = render_token(&tokens[1], sql);
        assert!(line.trim_start().starts_with("7..8"));
        assert!(line.ends_with(" a"));
    }
}
