//! Format and filter expressions (`--format`, `--filter`).
//!
//! Expressions are evaluated by the rename engine. Binding only checks that
//! `{...}` blocks are balanced so a typo fails before any file is touched.

use std::fmt;

use serde::Serialize;

use crate::error::IllegalValue;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Expression {
    source: String,
}

impl Expression {
    pub fn parse(field: &'static str, raw: &str) -> Result<Self, IllegalValue> {
        if !braces_balanced(raw) {
            return Err(IllegalValue::new(
                field,
                raw,
                vec!["expression with balanced {...} blocks"],
            ));
        }
        Ok(Self {
            source: raw.to_string(),
        })
    }

    pub fn from_option(field: &'static str, raw: Option<&str>) -> Result<Option<Self>, IllegalValue> {
        raw.map(|raw| Self::parse(field, raw)).transpose()
    }

    pub fn source(&self) -> &str {
        &self.source
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

fn braces_balanced(source: &str) -> bool {
    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    let mut escaped = false;

    for ch in source.chars() {
        if escaped {
            escaped = false;
            continue;
        }
        match (quote, ch) {
            (_, '\\') => escaped = true,
            (Some(open), c) if c == open => quote = None,
            (Some(_), _) => {}
            (None, '\'' | '"') if depth > 0 => quote = Some(ch),
            (None, '{') => depth += 1,
            (None, '}') => {
                if depth == 0 {
                    return false;
                }
                depth -= 1;
            }
            (None, _) => {}
        }
    }

    depth == 0 && quote.is_none()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_templates_and_plain_names() {
        let expr = Expression::parse("--format", "{n} - {s00e00} - {t}").unwrap();
        assert_eq!(expr.source(), "{n} - {s00e00} - {t}");
        assert_eq!(Expression::parse("--format", "MD5").unwrap().source(), "MD5");
    }

    #[test]
    fn quoted_braces_do_not_count() {
        assert!(Expression::parse("--format", "{n.replace('}', '')}").is_ok());
        assert!(Expression::parse("--filter", r#"{n =~ "\{"}"#).is_ok());
    }

    #[test]
    fn unbalanced_blocks_are_illegal() {
        for raw in ["{n} - {t", "n}", "{n.replace('x}"] {
            let err = Expression::parse("--format", raw).unwrap_err();
            assert_eq!(err.field, "--format");
            assert_eq!(err.value, raw);
        }
    }

    #[test]
    fn absent_expression_is_none() {
        assert_eq!(Expression::from_option("--filter", None), Ok(None));
    }
}
