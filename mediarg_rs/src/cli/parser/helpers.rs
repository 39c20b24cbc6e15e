//! Helper functions for option parsing.
//!
//! - Option suggestion via Levenshtein distance
//! - Explicit boolean literals (`--log-lock yes`)
//! - `key=value` binding entries (`--def name=value`)

use strsim::levenshtein;

use crate::cli::schema::OPTIONS;
use crate::error::ParseError;

/// Suggest a similar option name using Levenshtein distance.
/// Returns Some(suggestion) if a close match is found (distance <= 2).
pub(super) fn suggest_similar_option(input: &str) -> Option<&'static str> {
    let mut best_match: Option<(&'static str, usize)> = None;

    for spec in OPTIONS {
        let distance = levenshtein(input, spec.name);
        if distance > 2 {
            continue;
        }
        match best_match {
            Some((_, best_dist)) if best_dist <= distance => {}
            _ => best_match = Some((spec.name, distance)),
        }
    }

    best_match.map(|(name, _)| name)
}

/// Parse a boolean literal: yes/no, true/false, on/off, 1/0 (any case).
pub(crate) fn parse_bool_literal(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "yes" | "true" | "on" | "1" => Some(true),
        "no" | "false" | "off" | "0" => Some(false),
        _ => None,
    }
}

pub(super) fn parse_explicit_bool(option: &'static str, raw: &str) -> Result<bool, ParseError> {
    parse_bool_literal(raw).ok_or_else(|| ParseError::InvalidValue {
        option,
        value: raw.to_string(),
        reason: "expected yes or no".to_string(),
    })
}

/// Script variable names: a letter or underscore followed by letters,
/// digits or underscores.
pub(super) fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_alphabetic() || first == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || c == '_')
}

/// Split a `key=value` entry. Whitespace around the key and value is trimmed.
pub(super) fn parse_binding(option: &'static str, raw: &str) -> Result<(String, String), ParseError> {
    let invalid = |reason: &str| ParseError::InvalidValue {
        option,
        value: raw.to_string(),
        reason: reason.to_string(),
    };

    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| invalid("expected name=value"))?;
    let key = key.trim();
    if !is_identifier(key) {
        return Err(invalid("name is not a valid identifier"));
    }
    Ok((key.to_string(), value.trim().to_string()))
}

/// Whether a token following a `--def` entry continues the same binding list.
pub(super) fn looks_like_binding(token: &str) -> bool {
    !token.starts_with('-')
        && token
            .split_once('=')
            .is_some_and(|(key, _)| is_identifier(key.trim()))
}

// ============================================================================
// Tests
// ============================================================================
