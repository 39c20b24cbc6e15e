//! Raw option storage produced by the parser.

use std::collections::BTreeMap;

use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};

use super::schema::{OPTIONS, OptionKind, OptionSpec};

/// Ordered `key=value` pairs from `--def`.
///
/// Keys keep their first-insertion position; a repeated key overwrites the
/// earlier value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bindings {
    entries: Vec<(String, String)>,
}

impl Bindings {
    pub fn insert(&mut self, key: String, value: String) {
        match self.entries.iter_mut().find(|(existing, _)| *existing == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for Bindings {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// Value stored for one option, shaped by its [`OptionKind`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawValue {
    Flag(bool),
    Value(Option<String>),
    Bool(bool),
    Bindings(Bindings),
}

impl RawValue {
    /// Initial value for an option before any token is bound.
    pub fn initial(spec: &OptionSpec) -> Self {
        match spec.kind {
            OptionKind::Flag => RawValue::Flag(false),
            OptionKind::Value => RawValue::Value(spec.default.map(str::to_string)),
            OptionKind::ExplicitBool => RawValue::Bool(
                spec.default
                    .and_then(super::parser::parse_bool_literal)
                    .unwrap_or(false),
            ),
            OptionKind::Bindings => RawValue::Bindings(Bindings::default()),
        }
    }
}

/// Every recognized option with its bound value, plus positional arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawConfiguration {
    values: BTreeMap<&'static str, RawValue>,
    arguments: Vec<String>,
}

impl Default for RawConfiguration {
    fn default() -> Self {
        Self {
            values: OPTIONS
                .iter()
                .map(|spec| (spec.name, RawValue::initial(spec)))
                .collect(),
            arguments: Vec::new(),
        }
    }
}

impl RawConfiguration {
    pub fn get(&self, name: &str) -> Option<&RawValue> {
        self.values.get(name)
    }

    pub fn flag(&self, name: &str) -> bool {
        matches!(self.values.get(name), Some(RawValue::Flag(true)))
    }

    pub fn value(&self, name: &str) -> Option<&str> {
        match self.values.get(name) {
            Some(RawValue::Value(value)) => value.as_deref(),
            _ => None,
        }
    }

    pub fn explicit_bool(&self, name: &str) -> bool {
        matches!(self.values.get(name), Some(RawValue::Bool(true)))
    }

    pub fn bindings(&self, name: &str) -> Option<&Bindings> {
        match self.values.get(name) {
            Some(RawValue::Bindings(bindings)) => Some(bindings),
            _ => None,
        }
    }

    /// Positional arguments in command-line order.
    pub fn arguments(&self) -> &[String] {
        &self.arguments
    }

    pub(crate) fn set(&mut self, spec: &'static OptionSpec, value: RawValue) {
        self.values.insert(spec.name, value);
    }

    pub(crate) fn bind_entry(&mut self, spec: &'static OptionSpec, key: String, value: String) {
        let entry = self
            .values
            .entry(spec.name)
            .or_insert_with(|| RawValue::Bindings(Bindings::default()));
        if let RawValue::Bindings(bindings) = entry {
            bindings.insert(key, value);
        }
    }

    pub(crate) fn push_argument(&mut self, argument: String) {
        self.arguments.push(argument);
    }

    /// Render the configuration back into tokens that bind to an equal value.
    ///
    /// Value options are written whenever they are set, so the result does
    /// not depend on which defaults the re-parse starts from. Positional
    /// arguments follow a `--` separator.
    pub fn to_tokens(&self) -> Vec<String> {
        let mut tokens = Vec::new();

        for spec in OPTIONS {
            match self.values.get(spec.name) {
                Some(RawValue::Flag(true)) => tokens.push(spec.name.to_string()),
                Some(RawValue::Value(Some(value))) => {
                    tokens.push(spec.name.to_string());
                    tokens.push(value.clone());
                }
                Some(RawValue::Bool(value)) => {
                    tokens.push(spec.name.to_string());
                    tokens.push(if *value { "yes" } else { "no" }.to_string());
                }
                Some(RawValue::Bindings(bindings)) => {
                    for (key, value) in bindings.iter() {
                        tokens.push(spec.name.to_string());
                        tokens.push(format!("{}={}", key, value));
                    }
                }
                Some(RawValue::Flag(false)) | Some(RawValue::Value(None)) | None => {}
            }
        }

        if !self.arguments.is_empty() {
            tokens.push("--".to_string());
            tokens.extend(self.arguments.iter().cloned());
        }

        tokens
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::schema::names;

    #[test]
    fn defaults_cover_every_option() {
        let raw = RawConfiguration::default();
        for spec in OPTIONS {
            assert!(raw.get(spec.name).is_some(), "{} has no value", spec.name);
        }
        assert_eq!(raw.value(names::ACTION), Some("move"));
        assert_eq!(raw.value(names::LANG), Some("en"));
        assert_eq!(raw.value(names::FORMAT), None);
        assert!(raw.explicit_bool(names::LOG_LOCK));
        assert!(!raw.flag(names::RENAME));
        assert!(raw.arguments().is_empty());
    }

    #[test]
    fn bindings_overwrite_in_place() {
        let mut bindings = Bindings::default();
        bindings.insert("a".into(), "1".into());
        bindings.insert("b".into(), "2".into());
        bindings.insert("a".into(), "3".into());
        let pairs: Vec<_> = bindings.iter().collect();
        assert_eq!(pairs, vec![("a", "3"), ("b", "2")]);
        assert_eq!(bindings.get("b"), Some("2"));
        assert_eq!(bindings.len(), 2);
    }

    #[test]
    fn bindings_serialize_as_json_object() {
        let mut bindings = Bindings::default();
        bindings.insert("seriesFormat".into(), "{n}".into());
        let json = serde_json::to_string(&bindings).unwrap();
        assert_eq!(json, r#"{"seriesFormat":"{n}"}"#);
    }

    #[test]
    fn default_configuration_serializes_value_options_only() {
        let tokens = RawConfiguration::default().to_tokens();
        assert!(tokens.contains(&"--action".to_string()));
        assert!(tokens.contains(&"--log-lock".to_string()));
        assert!(!tokens.contains(&"-rename".to_string()));
        assert!(!tokens.contains(&"--".to_string()));
    }
}
