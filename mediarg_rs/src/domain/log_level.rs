//! Log severity ladder accepted by `--log`.

use serde::Serialize;
use tracing::level_filters::LevelFilter;

use super::lookup::{NamedValue, find_exact};
use crate::error::IllegalValue;

/// Severity threshold, ordered from quietest to most verbose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Off,
    Severe,
    Warning,
    Info,
    Config,
    Fine,
    Finer,
    Finest,
    All,
}

impl LogLevel {
    pub const DEFAULT: LogLevel = LogLevel::All;

    /// Resolve `--log`. Names are matched exactly; `fin` would be ambiguous.
    pub fn from_option(raw: Option<&str>) -> Result<Self, IllegalValue> {
        match raw {
            Some(raw) => find_exact("--log", raw),
            None => Ok(Self::DEFAULT),
        }
    }

    /// Equivalent threshold for the tracing subscriber.
    pub fn level_filter(self) -> LevelFilter {
        match self {
            LogLevel::Off => LevelFilter::OFF,
            LogLevel::Severe => LevelFilter::ERROR,
            LogLevel::Warning => LevelFilter::WARN,
            LogLevel::Info | LogLevel::Config => LevelFilter::INFO,
            LogLevel::Fine | LogLevel::Finer => LevelFilter::DEBUG,
            LogLevel::Finest | LogLevel::All => LevelFilter::TRACE,
        }
    }
}

impl NamedValue for LogLevel {
    const ALL: &'static [Self] = &[
        LogLevel::Off,
        LogLevel::Severe,
        LogLevel::Warning,
        LogLevel::Info,
        LogLevel::Config,
        LogLevel::Fine,
        LogLevel::Finer,
        LogLevel::Finest,
        LogLevel::All,
    ];

    fn name(self) -> &'static str {
        match self {
            LogLevel::Off => "off",
            LogLevel::Severe => "severe",
            LogLevel::Warning => "warning",
            LogLevel::Info => "info",
            LogLevel::Config => "config",
            LogLevel::Fine => "fine",
            LogLevel::Finer => "finer",
            LogLevel::Finest => "finest",
            LogLevel::All => "all",
        }
    }

    fn aliases(self) -> &'static [&'static str] {
        match self {
            LogLevel::Severe => &["error"],
            LogLevel::Warning => &["warn"],
            LogLevel::Fine => &["debug"],
            LogLevel::Finest => &["trace"],
            _ => &[],
        }
    }
}
