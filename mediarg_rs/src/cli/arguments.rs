//! `Arguments` - the bound command line and its typed accessors.

use std::path::{Path, PathBuf};

use super::mode::{CommandKind, ConsoleProbe, ExecutionMode, TerminalProbe, is_interactive};
use super::parser::parse_tokens;
use super::raw::{Bindings, RawConfiguration};
use super::resolved::ResolvedOptions;
use super::schema::names;
use crate::config::MediargConfig;
use crate::domain::{
    ConflictAction, Datasource, Encoding, Expression, HashType, Language, LogLevel,
    RenameAction, SortOrder, SubtitleFormat, SubtitleNaming,
};
use crate::error::{FileError, IllegalValue, ParseError, ResolveError};
use crate::files::{ResolvedFile, resolve_files, resolve_path};

/// Result of binding a command line.
///
/// Owns the original tokens and the raw option values. Nothing is mutated
/// after construction; typed values are derived on request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Arguments {
    tokens: Vec<String>,
    raw: RawConfiguration,
}

impl Arguments {
    /// Bind tokens against the built-in defaults.
    pub fn parse<I, S>(tokens: I) -> Result<Self, ParseError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::bind(tokens, RawConfiguration::default())
    }

    /// Bind tokens on top of defaults adjusted by a config file.
    pub fn parse_with<I, S>(tokens: I, config: &MediargConfig) -> Result<Self, ParseError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::bind(tokens, config.seed())
    }

    fn bind<I, S>(tokens: I, defaults: RawConfiguration) -> Result<Self, ParseError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tokens: Vec<String> = tokens.into_iter().map(Into::into).collect();
        let raw = parse_tokens(&tokens, defaults)?;
        Ok(Self { tokens, raw })
    }

    /// The command line exactly as given.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn raw(&self) -> &RawConfiguration {
        &self.raw
    }

    pub fn arguments(&self) -> &[String] {
        self.raw.arguments()
    }

    // ------------------------------------------------------------------
    // Run mode queries
    // ------------------------------------------------------------------

    /// True when any sub-command (rename, check, script, ...) was requested.
    pub fn run_cli(&self) -> bool {
        self.execution_mode_with(&ConsoleProbe).commands().is_some()
    }

    pub fn is_interactive(&self) -> bool {
        self.is_interactive_with(&ConsoleProbe)
    }

    pub fn is_interactive_with(&self, terminal: &dyn TerminalProbe) -> bool {
        is_interactive(&self.raw, terminal)
    }

    pub fn execution_mode(&self) -> ExecutionMode {
        self.execution_mode_with(&ConsoleProbe)
    }

    pub fn execution_mode_with(&self, terminal: &dyn TerminalProbe) -> ExecutionMode {
        ExecutionMode::resolve(&self.raw, terminal)
    }

    pub fn print_version(&self) -> bool {
        self.raw.flag(names::VERSION)
    }

    pub fn print_help(&self) -> bool {
        self.raw.flag(names::HELP)
    }

    pub fn clear_cache(&self) -> bool {
        self.raw.flag(names::CLEAR_CACHE)
    }

    pub fn clear_user_data(&self) -> bool {
        self.raw.flag(names::CLEAR_PREFS)
    }

    // ------------------------------------------------------------------
    // Plain values
    // ------------------------------------------------------------------

    pub fn is_strict(&self) -> bool {
        !self.raw.flag(names::NON_STRICT)
    }

    pub fn is_recursive(&self) -> bool {
        self.raw.flag(names::RECURSIVE)
    }

    /// `-unixfs`: keep characters that are invalid on other platforms.
    pub fn unix_filesystem(&self) -> bool {
        self.raw.flag(names::UNIXFS)
    }

    pub fn extended_attributes(&self) -> bool {
        !self.raw.flag(names::NO_XATTR)
    }

    pub fn mode(&self) -> Option<&str> {
        self.raw.value(names::MODE)
    }

    /// Forced lookup query; an empty `--q` counts as absent.
    pub fn search_query(&self) -> Option<&str> {
        self.raw.value(names::QUERY).filter(|query| !query.is_empty())
    }

    pub fn script(&self) -> Option<&str> {
        self.raw.value(names::SCRIPT)
    }

    pub fn output_path(&self) -> Option<PathBuf> {
        self.raw.value(names::OUTPUT).map(PathBuf::from)
    }

    /// `--output` made absolute, canonical where the path exists.
    pub fn absolute_output_folder(&self) -> Option<PathBuf> {
        self.raw
            .value(names::OUTPUT)
            .map(|output| resolve_path(Path::new(output)).into_path())
    }

    pub fn log_file(&self) -> Option<PathBuf> {
        self.raw.value(names::LOG_FILE).map(PathBuf::from)
    }

    pub fn log_lock(&self) -> bool {
        self.raw.explicit_bool(names::LOG_LOCK)
    }

    /// Script variables from `--def`.
    pub fn defines(&self) -> Bindings {
        self.raw.bindings(names::DEF).cloned().unwrap_or_default()
    }

    // ------------------------------------------------------------------
    // Typed values
    // ------------------------------------------------------------------

    pub fn rename_action(&self) -> Result<RenameAction, IllegalValue> {
        RenameAction::from_option(self.raw.value(names::ACTION))
    }

    pub fn conflict_action(&self) -> Result<ConflictAction, IllegalValue> {
        ConflictAction::from_option(self.raw.value(names::CONFLICT))
    }

    pub fn sort_order(&self) -> Result<SortOrder, IllegalValue> {
        SortOrder::from_option(self.raw.value(names::ORDER))
    }

    pub fn language(&self) -> Result<Language, IllegalValue> {
        Language::from_option(self.raw.value(names::LANG))
    }

    pub fn log_level(&self) -> Result<LogLevel, IllegalValue> {
        LogLevel::from_option(self.raw.value(names::LOG))
    }

    pub fn encoding(&self) -> Result<Option<Encoding>, IllegalValue> {
        Encoding::from_option(self.raw.value(names::ENCODING))
    }

    pub fn datasource(&self) -> Result<Option<Datasource>, IllegalValue> {
        Datasource::from_option(self.raw.value(names::DB))
    }

    pub fn output_hash_type(&self) -> Result<HashType, IllegalValue> {
        HashType::from_options(self.raw.value(names::OUTPUT), self.raw.value(names::FORMAT))
    }

    pub fn subtitle_naming(&self) -> Result<SubtitleNaming, IllegalValue> {
        SubtitleNaming::from_option(self.raw.value(names::FORMAT))
    }

    pub fn subtitle_output_format(&self) -> Result<Option<SubtitleFormat>, IllegalValue> {
        SubtitleFormat::from_option(self.raw.value(names::OUTPUT))
    }

    pub fn expression_format(&self) -> Result<Option<Expression>, IllegalValue> {
        Expression::from_option(names::FORMAT, self.raw.value(names::FORMAT))
    }

    pub fn expression_filter(&self) -> Result<Option<Expression>, IllegalValue> {
        Expression::from_option(names::FILTER, self.raw.value(names::FILTER))
    }

    /// Files named on the command line; see [`resolve_files`].
    pub fn files(&self, expand_folders: bool) -> Result<Vec<ResolvedFile>, FileError> {
        resolve_files(self.raw.arguments(), self.is_recursive(), expand_folders)
    }

    // ------------------------------------------------------------------
    // Eager resolution
    // ------------------------------------------------------------------

    pub fn resolve(&self) -> Result<ResolvedOptions, ResolveError> {
        self.resolve_with(&ConsoleProbe)
    }

    /// Derive every typed value at once.
    ///
    /// All illegal values are collected before failing. `--format` and
    /// `--output` double as hash type, subtitle naming and subtitle format,
    /// so those readings are only resolved when `-check` or `-get-subtitles`
    /// asks for them. File resolution runs last and only when every value
    /// mapped cleanly.
    pub fn resolve_with(&self, terminal: &dyn TerminalProbe) -> Result<ResolvedOptions, ResolveError> {
        let mut errors: Vec<IllegalValue> = Vec::new();
        let mode = self.execution_mode_with(terminal);

        let action = collect(self.rename_action(), &mut errors);
        let conflict = collect(self.conflict_action(), &mut errors);
        let order = collect(self.sort_order(), &mut errors);
        let language = collect(self.language(), &mut errors);
        let log_level = collect(self.log_level(), &mut errors);
        let encoding = collect(self.encoding(), &mut errors).flatten();
        let datasource = collect(self.datasource(), &mut errors).flatten();
        let format = collect(self.expression_format(), &mut errors).flatten();
        let filter = collect(self.expression_filter(), &mut errors).flatten();

        let hash_type = if mode.is_active(CommandKind::Check) {
            collect(self.output_hash_type(), &mut errors)
        } else {
            None
        };
        let (subtitle_naming, subtitle_format) = if mode.is_active(CommandKind::Subtitles) {
            (
                collect(self.subtitle_naming(), &mut errors),
                collect(self.subtitle_output_format(), &mut errors).flatten(),
            )
        } else {
            (None, None)
        };

        let (Some(action), Some(conflict), Some(order), Some(language), Some(log_level)) =
            (action, conflict, order, language, log_level)
        else {
            return Err(ResolveError::Illegal(errors));
        };
        if !errors.is_empty() {
            return Err(ResolveError::Illegal(errors));
        }

        let files = self.files(true)?;

        Ok(ResolvedOptions {
            mode,
            interactive: self.is_interactive_with(terminal),
            action,
            conflict,
            order,
            language,
            log_level,
            encoding,
            datasource,
            format,
            filter,
            hash_type,
            subtitle_naming,
            subtitle_format,
            query: self.search_query().map(str::to_string),
            output: self.output_path(),
            strict: self.is_strict(),
            recursive: self.is_recursive(),
            unix_filesystem: self.unix_filesystem(),
            extended_attributes: self.extended_attributes(),
            log_file: self.log_file(),
            log_lock: self.log_lock(),
            defines: self.defines(),
            files,
        })
    }
}

fn collect<T>(result: Result<T, IllegalValue>, errors: &mut Vec<IllegalValue>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            errors.push(err);
            None
        }
    }
}
