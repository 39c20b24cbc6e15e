//! Execution mode: what kind of run the bound flags ask for.
//!
//! The mode is derived fresh from a [`RawConfiguration`] on every call and is
//! never stored.

use std::io::IsTerminal;

use serde::Serialize;

use super::raw::RawConfiguration;
use super::schema::names;

/// Source of truth for "is a user sitting at a terminal".
///
/// Interactive mode depends on it, but detecting a terminal is not this
/// crate's business; tests substitute a fixed answer.
pub trait TerminalProbe {
    fn is_interactive(&self) -> bool;
}

/// Checks that both stdin and stdout are attached to a terminal.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleProbe;

impl TerminalProbe for ConsoleProbe {
    fn is_interactive(&self) -> bool {
        std::io::stdin().is_terminal() && console::Term::stdout().is_term()
    }
}

/// A sub-operation requested on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CommandKind {
    Rename,
    Subtitles,
    Check,
    List,
    MediaInfo,
    Revert,
    Extract,
    Script,
}

const COMMAND_FLAGS: &[(&str, CommandKind)] = &[
    (names::RENAME, CommandKind::Rename),
    (names::GET_SUBTITLES, CommandKind::Subtitles),
    (names::CHECK, CommandKind::Check),
    (names::LIST, CommandKind::List),
    (names::MEDIA_INFO, CommandKind::MediaInfo),
    (names::REVERT, CommandKind::Revert),
    (names::EXTRACT, CommandKind::Extract),
];

/// All sub-operations requested at once, in a fixed order.
///
/// No mutual exclusion is enforced here; rejecting combinations is up to the
/// command runner.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CommandSet(Vec<CommandKind>);

impl CommandSet {
    pub fn from_raw(raw: &RawConfiguration) -> Self {
        let mut commands: Vec<CommandKind> = COMMAND_FLAGS
            .iter()
            .filter(|(flag, _)| raw.flag(flag))
            .map(|(_, kind)| *kind)
            .collect();

        if raw.value(names::SCRIPT).is_some_and(|script| !script.trim().is_empty()) {
            commands.push(CommandKind::Script);
        }

        Self(commands)
    }

    pub fn contains(&self, kind: CommandKind) -> bool {
        self.0.contains(&kind)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

/// Classification of the run, by priority: `Command`, then `Interactive`,
/// then `NoOp`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "commands", rename_all = "kebab-case")]
pub enum ExecutionMode {
    NoOp,
    Interactive,
    Command(CommandSet),
}

impl ExecutionMode {
    pub fn resolve(raw: &RawConfiguration, terminal: &dyn TerminalProbe) -> Self {
        let commands = CommandSet::from_raw(raw);
        if !commands.is_empty() {
            ExecutionMode::Command(commands)
        } else if is_interactive(raw, terminal) {
            ExecutionMode::Interactive
        } else {
            ExecutionMode::NoOp
        }
    }

    pub fn commands(&self) -> Option<&CommandSet> {
        match self {
            ExecutionMode::Command(commands) => Some(commands),
            _ => None,
        }
    }

    pub fn is_active(&self, kind: CommandKind) -> bool {
        self.commands().is_some_and(|commands| commands.contains(kind))
    }
}

/// `--mode interactive` (any case) with a terminal attached.
pub fn is_interactive(raw: &RawConfiguration, terminal: &dyn TerminalProbe) -> bool {
    raw.value(names::MODE)
        .is_some_and(|mode| mode.eq_ignore_ascii_case("interactive"))
        && terminal.is_interactive()
}
