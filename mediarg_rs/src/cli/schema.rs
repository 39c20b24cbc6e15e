//! Declarative option table.
//!
//! Every recognized option is listed once in [`OPTIONS`] with its storage kind
//! and default. The parser loop, the usage text, config defaults and token
//! serialization are all driven from this table.

/// Option names as they appear on the command line (case-sensitive).
pub mod names {
    pub const MODE: &str = "--mode";
    pub const RENAME: &str = "-rename";
    pub const DB: &str = "--db";
    pub const ORDER: &str = "--order";
    pub const ACTION: &str = "--action";
    pub const CONFLICT: &str = "--conflict";
    pub const FILTER: &str = "--filter";
    pub const FORMAT: &str = "--format";
    pub const NON_STRICT: &str = "-non-strict";
    pub const GET_SUBTITLES: &str = "-get-subtitles";
    pub const QUERY: &str = "--q";
    pub const LANG: &str = "--lang";
    pub const CHECK: &str = "-check";
    pub const OUTPUT: &str = "--output";
    pub const ENCODING: &str = "--encoding";
    pub const LIST: &str = "-list";
    pub const MEDIA_INFO: &str = "-mediainfo";
    pub const REVERT: &str = "-revert";
    pub const EXTRACT: &str = "-extract";
    pub const SCRIPT: &str = "-script";
    pub const LOG: &str = "--log";
    pub const LOG_FILE: &str = "--log-file";
    pub const LOG_LOCK: &str = "--log-lock";
    pub const RECURSIVE: &str = "-r";
    pub const CLEAR_CACHE: &str = "-clear-cache";
    pub const CLEAR_PREFS: &str = "-clear-prefs";
    pub const UNIXFS: &str = "-unixfs";
    pub const NO_XATTR: &str = "-no-xattr";
    pub const VERSION: &str = "-version";
    pub const HELP: &str = "-help";
    pub const DEF: &str = "--def";
}

/// How an option consumes tokens and stores its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionKind {
    /// Present or absent; never takes a value.
    Flag,
    /// Takes exactly one string value.
    Value,
    /// Takes a required `yes`/`no` style value.
    ExplicitBool,
    /// Takes one or more `key=value` entries, repeatable.
    Bindings,
}

#[derive(Debug, Clone, Copy)]
pub struct OptionSpec {
    pub name: &'static str,
    pub kind: OptionKind,
    /// Default raw value. Only meaningful for `Value` (string) and
    /// `ExplicitBool` (`"yes"`/`"no"`) options.
    pub default: Option<&'static str>,
    pub meta_var: Option<&'static str>,
    pub usage: &'static str,
}

impl OptionSpec {
    const fn flag(name: &'static str, usage: &'static str) -> Self {
        Self {
            name,
            kind: OptionKind::Flag,
            default: None,
            meta_var: None,
            usage,
        }
    }

    const fn value(
        name: &'static str,
        default: Option<&'static str>,
        meta_var: &'static str,
        usage: &'static str,
    ) -> Self {
        Self {
            name,
            kind: OptionKind::Value,
            default,
            meta_var: Some(meta_var),
            usage,
        }
    }
}

use names::*;

pub const OPTIONS: &[OptionSpec] = &[
    OptionSpec::value(
        MODE,
        None,
        "[Rename, Subtitles, SFV] or [interactive]",
        "Open GUI in single panel mode / Enable CLI interactive mode",
    ),
    OptionSpec::flag(RENAME, "Rename media files"),
    OptionSpec::value(
        DB,
        None,
        "[TheTVDB, AniDB] or [TheMovieDB] or [AcoustID, ID3] or [xattr]",
        "Database",
    ),
    OptionSpec::value(ORDER, Some("Airdate"), "[Airdate, Absolute, DVD]", "Episode order"),
    OptionSpec::value(
        ACTION,
        Some("move"),
        "[move, copy, keeplink, symlink, hardlink, reflink, test]",
        "Rename action",
    ),
    OptionSpec::value(
        CONFLICT,
        Some("skip"),
        "[skip, override, auto, index, fail]",
        "Conflict resolution",
    ),
    OptionSpec::value(FILTER, None, "expression", "Filter expression"),
    OptionSpec::value(FORMAT, None, "expression", "Format expression"),
    OptionSpec::flag(NON_STRICT, "Enable advanced matching and more aggressive guessing"),
    OptionSpec::flag(GET_SUBTITLES, "Fetch subtitles"),
    OptionSpec::value(QUERY, None, "series/movie title", "Force lookup query"),
    OptionSpec::value(LANG, Some("en"), "3-letter language code", "Language"),
    OptionSpec::flag(CHECK, "Create/Check verification files"),
    OptionSpec::value(OUTPUT, None, "/path", "Output path"),
    OptionSpec::value(
        ENCODING,
        None,
        "[UTF-8, Windows-1252]",
        "Output character encoding",
    ),
    OptionSpec::flag(LIST, "Fetch episode list"),
    OptionSpec::flag(MEDIA_INFO, "Get media info"),
    OptionSpec::flag(REVERT, "Revert files"),
    OptionSpec::flag(EXTRACT, "Extract archives"),
    OptionSpec::value(
        SCRIPT,
        None,
        "[fn:name] or [dev:name] or [/path/to/script.groovy]",
        "Run script",
    ),
    OptionSpec::value(LOG, Some("all"), "[all, fine, info, warning]", "Log level"),
    OptionSpec::value(LOG_FILE, None, "/path/to/log.txt", "Log file"),
    OptionSpec {
        name: LOG_LOCK,
        kind: OptionKind::ExplicitBool,
        default: Some("yes"),
        meta_var: Some("[yes, no]"),
        usage: "Lock log file",
    },
    OptionSpec::flag(RECURSIVE, "Recursively process folders"),
    OptionSpec::flag(CLEAR_CACHE, "Clear cached and temporary data"),
    OptionSpec::flag(CLEAR_PREFS, "Clear application settings"),
    OptionSpec::flag(UNIXFS, "Do not strip invalid characters from file paths"),
    OptionSpec::flag(NO_XATTR, "Disable extended attributes"),
    OptionSpec::flag(VERSION, "Print version identifier"),
    OptionSpec::flag(HELP, "Print this help message"),
    OptionSpec {
        name: DEF,
        kind: OptionKind::Bindings,
        default: None,
        meta_var: Some("name=value"),
        usage: "Define script variables",
    },
];

/// Look up an option by its exact command-line name.
pub fn find_option(name: &str) -> Option<&'static OptionSpec> {
    OPTIONS.iter().find(|spec| spec.name == name)
}
