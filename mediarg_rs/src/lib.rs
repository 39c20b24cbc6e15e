//! # mediarg
//!
//! Argument binding for media file tooling (renaming, subtitles, checksum
//! verification, listings).
//!
//! A command line is bound against a fixed option table into raw values;
//! typed values are derived from those on request, and positional arguments
//! are resolved into an ordered list of files.
//!
//! ## Quick Start
//!
//! ```no_run
//! use mediarg::Arguments;
//!
//! let args = Arguments::parse(["-rename", "--db", "TheTVDB", "/media/tv"])?;
//! let resolved = args.resolve()?;
//! println!("{:?} {:?}", resolved.action, resolved.files);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Modules
//!
//! - [`cli`] - option table, token parser, [`Arguments`]
//! - [`domain`] - typed values (actions, languages, hash types, ...)
//! - [`files`] - positional arguments to files
//! - [`config`] - optional TOML defaults
//! - [`logging`] - tracing subscriber setup
//! - [`error`] - error types

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod files;
pub mod logging;

pub use cli::{Arguments, CommandKind, ExecutionMode, ResolvedOptions, usage};
pub use config::MediargConfig;
pub use error::{ConfigError, FileError, IllegalValue, ParseError, ResolveError};
pub use files::{ResolvedFile, resolve_files};
