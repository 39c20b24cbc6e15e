//! Rename actions and conflict strategies.

use serde::Serialize;

use super::lookup::{NamedValue, find_by_name};
use crate::error::IllegalValue;

/// How a matched file is moved into its new name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RenameAction {
    Move,
    Copy,
    Keeplink,
    Symlink,
    Hardlink,
    Reflink,
    Duplicate,
    Test,
}

impl RenameAction {
    pub const DEFAULT: RenameAction = RenameAction::Move;

    /// Resolve `--action`. Absence selects `move`; an unknown name is an error.
    pub fn from_option(raw: Option<&str>) -> Result<Self, IllegalValue> {
        match raw {
            Some(raw) => find_by_name("--action", raw),
            None => Ok(Self::DEFAULT),
        }
    }
}

impl NamedValue for RenameAction {
    const ALL: &'static [Self] = &[
        RenameAction::Move,
        RenameAction::Copy,
        RenameAction::Keeplink,
        RenameAction::Symlink,
        RenameAction::Hardlink,
        RenameAction::Reflink,
        RenameAction::Duplicate,
        RenameAction::Test,
    ];

    fn name(self) -> &'static str {
        match self {
            RenameAction::Move => "move",
            RenameAction::Copy => "copy",
            RenameAction::Keeplink => "keeplink",
            RenameAction::Symlink => "symlink",
            RenameAction::Hardlink => "hardlink",
            RenameAction::Reflink => "reflink",
            RenameAction::Duplicate => "duplicate",
            RenameAction::Test => "test",
        }
    }

    fn aliases(self) -> &'static [&'static str] {
        match self {
            RenameAction::Move => &["rename"],
            RenameAction::Reflink => &["clone"],
            _ => &[],
        }
    }
}

/// What to do when the destination of a rename already exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConflictAction {
    Skip,
    Override,
    Auto,
    Index,
    Fail,
}

impl ConflictAction {
    pub const DEFAULT: ConflictAction = ConflictAction::Skip;

    /// Resolve `--conflict`. Absence selects `skip`; an unknown name is an error.
    pub fn from_option(raw: Option<&str>) -> Result<Self, IllegalValue> {
        match raw {
            Some(raw) => find_by_name("--conflict", raw),
            None => Ok(Self::DEFAULT),
        }
    }
}

impl NamedValue for ConflictAction {
    const ALL: &'static [Self] = &[
        ConflictAction::Skip,
        ConflictAction::Override,
        ConflictAction::Auto,
        ConflictAction::Index,
        ConflictAction::Fail,
    ];

    fn name(self) -> &'static str {
        match self {
            ConflictAction::Skip => "skip",
            ConflictAction::Override => "override",
            ConflictAction::Auto => "auto",
            ConflictAction::Index => "index",
            ConflictAction::Fail => "fail",
        }
    }
}
