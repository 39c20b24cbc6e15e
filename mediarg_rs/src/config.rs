//! Configuration file support for mediarg.
//!
//! Loads an optional `config.toml` from the user config directory, or from
//! the path in `MEDIARG_CONFIG`. Its `[defaults]` table replaces the built-in
//! defaults of value options before the command line is bound:
//!
//! ```toml
//! [defaults]
//! lang = "de"
//! "--conflict" = "auto"
//! log-lock = false
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, warn};

use crate::cli::parser::parse_bool_literal;
use crate::cli::raw::{RawConfiguration, RawValue};
use crate::cli::schema::{OPTIONS, OptionKind, OptionSpec};
use crate::error::ConfigError;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "MEDIARG_CONFIG";

#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct MediargConfig {
    /// Option name (with or without leading dashes) to default value.
    pub defaults: BTreeMap<String, toml::Value>,
    /// File the config was read from; `None` for built-in defaults.
    #[serde(skip)]
    pub source: Option<PathBuf>,
}

/// A `[defaults]` entry that cannot be applied.
#[derive(Debug, Clone, PartialEq)]
pub struct RejectedDefault {
    pub key: String,
    pub reason: &'static str,
}

impl MediargConfig {
    /// `<config dir>/mediarg/config.toml`, when the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("mediarg").join("config.toml"))
    }

    /// Load from `MEDIARG_CONFIG` if set, else from [`Self::default_path`].
    pub fn load() -> Result<Self, ConfigError> {
        let path = std::env::var_os(CONFIG_ENV)
            .filter(|value| !value.is_empty())
            .map(PathBuf::from)
            .or_else(Self::default_path);

        match path {
            Some(path) => Self::load_from_path(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load config from a specific path. A missing file is not an error.
    ///
    /// Nothing is logged here; see [`Self::report`].
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config: Self = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.source = Some(path.to_path_buf());
        Ok(config)
    }

    /// Built-in defaults with this config's overrides applied.
    ///
    /// Entries naming an unknown option, a flag, or `--def`, and values of
    /// the wrong shape, are skipped; [`Self::rejected`] lists them.
    pub fn seed(&self) -> RawConfiguration {
        let mut raw = RawConfiguration::default();
        for (key, value) in &self.defaults {
            let Some(spec) = lookup(key) else { continue };
            if let Some(raw_value) = default_value(spec, value) {
                raw.set(spec, raw_value);
            }
        }
        raw
    }

    /// Entries [`Self::seed`] skips, in key order.
    pub fn rejected(&self) -> Vec<RejectedDefault> {
        self.defaults
            .iter()
            .filter_map(|(key, value)| {
                let reason = match lookup(key) {
                    None => "unknown option",
                    Some(spec) if default_value(spec, value).is_none() => {
                        "value does not fit the option"
                    }
                    Some(_) => return None,
                };
                Some(RejectedDefault {
                    key: key.clone(),
                    reason,
                })
            })
            .collect()
    }

    /// Log where the config came from and every ignored entry.
    ///
    /// Call once logging is set up.
    pub fn report(&self) {
        match &self.source {
            Some(path) => {
                debug!(path = %path.display(), overrides = self.defaults.len(), "loaded config")
            }
            None => debug!("no config file, using built-in defaults"),
        }
        for rejected in self.rejected() {
            warn!(
                option = %rejected.key,
                reason = rejected.reason,
                "ignoring config default"
            );
        }
    }
}

/// Match `lang`, `-lang` and `--lang` alike.
fn lookup(key: &str) -> Option<&'static OptionSpec> {
    let bare = key.trim_start_matches('-');
    OPTIONS
        .iter()
        .find(|spec| spec.name.trim_start_matches('-') == bare)
}

fn default_value(spec: &OptionSpec, value: &toml::Value) -> Option<RawValue> {
    match (spec.kind, value) {
        (OptionKind::Value, toml::Value::String(text)) => Some(RawValue::Value(Some(text.clone()))),
        (OptionKind::Value, toml::Value::Integer(number)) => {
            Some(RawValue::Value(Some(number.to_string())))
        }
        (OptionKind::ExplicitBool, toml::Value::Boolean(flag)) => Some(RawValue::Bool(*flag)),
        (OptionKind::ExplicitBool, toml::Value::String(text)) => {
            parse_bool_literal(text).map(RawValue::Bool)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::schema::names;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, body: &str) -> PathBuf {
        let path = dir.path().join("config.toml");
        let mut file = std::fs::File::create(&path).expect("create config");
        writeln!(file, "{}", body).expect("write config");
        path
    }

    #[test]
    fn test_load_missing_file() {
        let temp = TempDir::new().expect("temp dir");
        let config = MediargConfig::load_from_path(&temp.path().join("absent.toml"))
            .expect("missing file is fine");
        assert_eq!(config, MediargConfig::default());
        assert_eq!(config.seed(), RawConfiguration::default());
    }

    #[test]
    fn test_defaults_override_builtins() {
        let temp = TempDir::new().expect("temp dir");
        let path = write_config(
            &temp,
            r#"
[defaults]
lang = "de"
"--conflict" = "auto"
log-lock = false
"#,
        );

        let config = MediargConfig::load_from_path(&path).expect("load");
        assert!(config.rejected().is_empty());
        let raw = config.seed();
        assert_eq!(raw.value(names::LANG), Some("de"));
        assert_eq!(raw.value(names::CONFLICT), Some("auto"));
        assert!(!raw.explicit_bool(names::LOG_LOCK));
        assert_eq!(raw.value(names::ACTION), Some("move"));
    }

    #[test]
    fn test_bad_entries_are_ignored() {
        let temp = TempDir::new().expect("temp dir");
        let path = write_config(
            &temp,
            r#"
[defaults]
colour = "red"
rename = true
log-lock = "maybe"
order = ["DVD"]
"#,
        );

        let config = MediargConfig::load_from_path(&path).expect("load");
        assert_eq!(config.seed(), RawConfiguration::default());
        let rejected: Vec<_> = config
            .rejected()
            .into_iter()
            .map(|entry| (entry.key, entry.reason))
            .collect();
        assert_eq!(
            rejected,
            vec![
                ("colour".to_string(), "unknown option"),
                ("log-lock".to_string(), "value does not fit the option"),
                ("order".to_string(), "value does not fit the option"),
                ("rename".to_string(), "value does not fit the option"),
            ]
        );
        assert_eq!(config.source.as_deref(), Some(path.as_path()));
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let temp = TempDir::new().expect("temp dir");
        let path = write_config(&temp, "[defaults\nlang = ");
        let err = MediargConfig::load_from_path(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_command_line_beats_config() {
        let temp = TempDir::new().expect("temp dir");
        let path = write_config(&temp, "[defaults]\nlang = \"de\"\n");
        let config = MediargConfig::load_from_path(&path).expect("load");

        let args = crate::cli::Arguments::parse_with(["--lang", "fr"], &config).expect("parse");
        assert_eq!(args.raw().value(names::LANG), Some("fr"));
        let args = crate::cli::Arguments::parse_with(Vec::<String>::new(), &config).expect("parse");
        assert_eq!(args.raw().value(names::LANG), Some("de"));
    }
}
