//! Snapshot of every typed value derived from one command line.

use std::path::PathBuf;

use serde::Serialize;

use super::mode::ExecutionMode;
use super::raw::Bindings;
use crate::domain::{
    ConflictAction, Datasource, Encoding, Expression, HashType, Language, LogLevel,
    RenameAction, SortOrder, SubtitleFormat, SubtitleNaming,
};
use crate::files::ResolvedFile;

/// Produced by [`Arguments::resolve`](super::Arguments::resolve).
///
/// `hash_type` is only filled when `-check` is requested; the subtitle fields
/// only when `-get-subtitles` is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedOptions {
    pub mode: ExecutionMode,
    pub interactive: bool,
    pub action: RenameAction,
    pub conflict: ConflictAction,
    pub order: SortOrder,
    pub language: Language,
    pub log_level: LogLevel,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encoding: Option<Encoding>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub datasource: Option<Datasource>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<Expression>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<Expression>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hash_type: Option<HashType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle_naming: Option<SubtitleNaming>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle_format: Option<SubtitleFormat>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,
    pub strict: bool,
    pub recursive: bool,
    pub unix_filesystem: bool,
    pub extended_attributes: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
    pub log_lock: bool,
    pub defines: Bindings,
    pub files: Vec<ResolvedFile>,
}
