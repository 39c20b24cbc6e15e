//! Error types for argument binding, value mapping and file resolution.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Failure while binding tokens against the option table.
///
/// Parse errors abort binding before any typed value is derived.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown option '{token}'{}", suggestion_suffix(.suggestion))]
    UnknownOption {
        token: String,
        suggestion: Option<&'static str>,
    },

    #[error("option '{option}' requires a value")]
    MissingValue { option: &'static str },

    #[error("invalid value '{value}' for option '{option}': {reason}")]
    InvalidValue {
        option: &'static str,
        value: String,
        reason: String,
    },
}

impl ParseError {
    /// The command-line token (or option name) the error refers to.
    pub fn token(&self) -> &str {
        match self {
            ParseError::UnknownOption { token, .. } => token,
            ParseError::MissingValue { option } => option,
            ParseError::InvalidValue { option, .. } => option,
        }
    }
}

fn suggestion_suffix(suggestion: &Option<&'static str>) -> String {
    match suggestion {
        Some(name) => format!(" (did you mean '{}'?)", name),
        None => String::new(),
    }
}

/// A raw option value that does not name any known domain value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("illegal value for {field}: '{value}' (expected one of: {})", .expected.join(", "))]
pub struct IllegalValue {
    /// Option the value was given for, e.g. `--conflict`.
    pub field: &'static str,
    /// The offending raw string, untrimmed.
    pub value: String,
    /// Accepted names, for the error message.
    pub expected: Vec<&'static str>,
}

impl IllegalValue {
    pub fn new(field: &'static str, value: &str, expected: Vec<&'static str>) -> Self {
        Self {
            field,
            value: value.to_string(),
            expected,
        }
    }
}

/// Directory expansion failure. Never downgraded to a warning.
#[derive(Debug, Error)]
pub enum FileError {
    #[error("cannot list directory {}: {source}", .path.display())]
    ListDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot walk directory {}: {source}", .path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },
}

/// Errors collected by an eager resolution pass.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("{}", IllegalList(.0))]
    Illegal(Vec<IllegalValue>),

    #[error(transparent)]
    Files(#[from] FileError),
}

struct IllegalList<'a>(&'a [IllegalValue]);

impl fmt::Display for IllegalList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, err) in self.0.iter().enumerate() {
            if idx > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", err)?;
        }
        Ok(())
    }
}

/// Failure loading the optional configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
