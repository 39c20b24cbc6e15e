//! Command-line binding.
//!
//! # Module Structure
//!
//! - [`schema`] - the option table: names, kinds, defaults, help text
//! - [`parser`] - token binding into a [`RawConfiguration`]
//! - [`raw`] - raw option storage and re-serialization
//! - [`mode`] - execution mode resolution
//! - [`arguments`] - [`Arguments`], typed accessors over a bound command line
//! - [`resolved`] - eager resolution result
//! - [`help`] - usage text

pub mod arguments;
pub mod help;
pub mod mode;
pub mod parser;
pub mod raw;
pub mod resolved;
pub mod schema;

pub use arguments::Arguments;
pub use help::usage;
pub use mode::{CommandKind, CommandSet, ConsoleProbe, ExecutionMode, TerminalProbe};
pub use parser::parse_tokens;
pub use raw::{Bindings, RawConfiguration, RawValue};
pub use resolved::ResolvedOptions;
pub use schema::{OPTIONS, OptionKind, OptionSpec, find_option};
