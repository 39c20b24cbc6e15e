//! Core parsing loop: binds tokens against the option table.

use tracing::trace;

use super::helpers::{
    looks_like_binding, parse_binding, parse_explicit_bool, suggest_similar_option,
};
use crate::cli::raw::{RawConfiguration, RawValue};
use crate::cli::schema::{OptionKind, OptionSpec, find_option};
use crate::error::ParseError;

/// A token is treated as an option when it starts with `-` and is not a lone `-`.
fn looks_like_option(token: &str) -> bool {
    token.len() > 1 && token.starts_with('-')
}

/// Split `--name=value` into name and inline value.
fn split_inline(token: &str) -> (&str, Option<&str>) {
    match token.split_once('=') {
        Some((name, value)) => (name, Some(value)),
        None => (token, None),
    }
}

/// Value for an option: the inline `=value`, or the next token.
///
/// The next token is taken even when it starts with `-`. Returns the value
/// and the number of extra tokens consumed.
fn take_value<'a>(
    spec: &'static OptionSpec,
    inline: Option<&'a str>,
    tokens: &'a [String],
    index: usize,
) -> Result<(&'a str, usize), ParseError> {
    if let Some(value) = inline {
        return Ok((value, 0));
    }
    tokens
        .get(index + 1)
        .map(|value| (value.as_str(), 1))
        .ok_or(ParseError::MissingValue { option: spec.name })
}

/// Bind `tokens` on top of `raw` (the defaults) and return the result.
///
/// Binding rules:
/// - unknown options fail with a suggestion when one is close enough
/// - `--name value` and `--name=value` are equivalent; repeated values keep the last
/// - `--def` takes one `key=value` entry plus any directly following entries
/// - `--` ends option parsing; a lone `-` is positional
/// - positional arguments keep their order
pub fn parse_tokens(tokens: &[String], mut raw: RawConfiguration) -> Result<RawConfiguration, ParseError> {
    let mut options_done = false;
    let mut i = 0;

    while i < tokens.len() {
        let token = &tokens[i];

        if options_done || !looks_like_option(token) {
            raw.push_argument(token.clone());
            i += 1;
            continue;
        }

        if token == "--" {
            options_done = true;
            i += 1;
            continue;
        }

        let (name, inline) = split_inline(token);
        let spec = find_option(name).ok_or_else(|| ParseError::UnknownOption {
            token: token.clone(),
            suggestion: suggest_similar_option(name),
        })?;

        match spec.kind {
            OptionKind::Flag => {
                if let Some(value) = inline {
                    return Err(ParseError::InvalidValue {
                        option: spec.name,
                        value: value.to_string(),
                        reason: "option does not take a value".to_string(),
                    });
                }
                raw.set(spec, RawValue::Flag(true));
                i += 1;
            }
            OptionKind::Value => {
                let (value, consumed) = take_value(spec, inline, tokens, i)?;
                raw.set(spec, RawValue::Value(Some(value.to_string())));
                i += 1 + consumed;
            }
            OptionKind::ExplicitBool => {
                let (value, consumed) = take_value(spec, inline, tokens, i)?;
                raw.set(spec, RawValue::Bool(parse_explicit_bool(spec.name, value)?));
                i += 1 + consumed;
            }
            OptionKind::Bindings => {
                let (entry, consumed) = take_value(spec, inline, tokens, i)?;
                let (key, value) = parse_binding(spec.name, entry)?;
                raw.bind_entry(spec, key, value);
                i += 1 + consumed;

                while let Some(next) = tokens.get(i).filter(|next| looks_like_binding(next)) {
                    let (key, value) = parse_binding(spec.name, next)?;
                    raw.bind_entry(spec, key, value);
                    i += 1;
                }
            }
        }

        trace!(option = spec.name, "bound option");
    }

    Ok(raw)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::schema::names;

    fn args(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|s| s.to_string()).collect()
    }

    fn parse(tokens: &[&str]) -> Result<RawConfiguration, ParseError> {
        parse_tokens(&args(tokens), RawConfiguration::default())
    }

    #[test]
    fn test_empty_input_keeps_defaults() {
        let raw = parse(&[]).unwrap();
        assert_eq!(raw, RawConfiguration::default());
    }

    #[test]
    fn test_flags_values_and_positionals() {
        let raw = parse(&[
            "-rename",
            "/media/tv",
            "--db",
            "TheTVDB",
            "--format={n} - {s00e00}",
            "-r",
            "movie.mkv",
        ])
        .unwrap();
        assert!(raw.flag(names::RENAME));
        assert!(raw.flag(names::RECURSIVE));
        assert_eq!(raw.value(names::DB), Some("TheTVDB"));
        assert_eq!(raw.value(names::FORMAT), Some("{n} - {s00e00}"));
        assert_eq!(raw.arguments(), &args(&["/media/tv", "movie.mkv"])[..]);
    }

    #[test]
    fn test_unknown_option_names_token() {
        let err = parse(&["-rename", "--colour", "red"]).unwrap_err();
        assert_eq!(
            err,
            ParseError::UnknownOption {
                token: "--colour".to_string(),
                suggestion: None,
            }
        );

        let err = parse(&["--rename"]).unwrap_err();
        assert!(matches!(
            err,
            ParseError::UnknownOption { suggestion: Some("-rename"), .. }
        ));
    }

    #[test]
    fn test_option_names_are_case_sensitive() {
        assert!(parse(&["-Rename"]).is_err());
        assert!(parse(&["--LANG", "de"]).is_err());
    }

    #[test]
    fn test_missing_value() {
        let err = parse(&["-rename", "--action"]).unwrap_err();
        assert_eq!(err, ParseError::MissingValue { option: "--action" });
        assert!(matches!(
            parse(&["--def"]).unwrap_err(),
            ParseError::MissingValue { option: "--def" }
        ));
    }

    #[test]
    fn test_value_may_start_with_dash() {
        let raw = parse(&["--q", "-foo-"]).unwrap();
        assert_eq!(raw.value(names::QUERY), Some("-foo-"));
    }

    #[test]
    fn test_last_value_wins() {
        let raw = parse(&["--lang", "de", "--lang", "fr"]).unwrap();
        assert_eq!(raw.value(names::LANG), Some("fr"));
    }

    #[test]
    fn test_flag_rejects_inline_value() {
        let err = parse(&["-rename=yes"]).unwrap_err();
        assert!(matches!(err, ParseError::InvalidValue { option: "-rename", .. }));
    }

    #[test]
    fn test_explicit_boolean_requires_literal() {
        assert!(!parse(&["--log-lock", "no"]).unwrap().explicit_bool(names::LOG_LOCK));
        assert!(parse(&["--log-lock=YES"]).unwrap().explicit_bool(names::LOG_LOCK));
        assert!(matches!(
            parse(&["--log-lock", "file.mkv"]).unwrap_err(),
            ParseError::InvalidValue { option: "--log-lock", .. }
        ));
        assert!(matches!(
            parse(&["--log-lock"]).unwrap_err(),
            ParseError::MissingValue { option: "--log-lock" }
        ));
    }

    #[test]
    fn test_def_collects_following_bindings() {
        let raw = parse(&[
            "--def",
            "movieFormat={n}",
            "seriesFormat={n} {s00e00}",
            "-rename",
            "--def=clean=y",
            "a.mkv",
        ])
        .unwrap();
        let defs: Vec<_> = raw.bindings(names::DEF).unwrap().iter().collect();
        assert_eq!(
            defs,
            vec![
                ("movieFormat", "{n}"),
                ("seriesFormat", "{n} {s00e00}"),
                ("clean", "y")
            ]
        );
        assert_eq!(raw.arguments(), &args(&["a.mkv"])[..]);
    }

    #[test]
    fn test_def_rejects_missing_equals() {
        let err = parse(&["--def", "movieFormat"]).unwrap_err();
        assert_eq!(err.token(), "--def");
        assert!(matches!(err, ParseError::InvalidValue { option: "--def", .. }));
    }

    #[test]
    fn test_double_dash_ends_options() {
        let raw = parse(&["-check", "--", "-rename", "--lang", "-"]).unwrap();
        assert!(raw.flag(names::CHECK));
        assert!(!raw.flag(names::RENAME));
        assert_eq!(raw.arguments(), &args(&["-rename", "--lang", "-"])[..]);
    }

    #[test]
    fn test_lone_dash_is_positional() {
        let raw = parse(&["-", "-list"]).unwrap();
        assert_eq!(raw.arguments(), &args(&["-"])[..]);
        assert!(raw.flag(names::LIST));
    }
}
