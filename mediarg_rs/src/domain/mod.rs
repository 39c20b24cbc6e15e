//! Typed values derived from raw option strings.
//!
//! Every mapper is a pure function of the raw string (or its absence).
//! Defaults apply only when an option is absent; a present value that names
//! nothing known is reported as [`IllegalValue`](crate::error::IllegalValue),
//! never replaced by the default.
//!
//! - [`action`] - rename actions and conflict strategies
//! - [`sort_order`] - episode ordering
//! - [`language`] - language codes and names
//! - [`log_level`] - log severity ladder
//! - [`hash`] - verification file checksum types
//! - [`subtitle`] - subtitle naming schemes and output formats
//! - [`encoding`] - output character sets
//! - [`datasource`] - metadata source names
//! - [`expression`] - format/filter expression syntax check

pub mod action;
pub mod datasource;
pub mod encoding;
pub mod expression;
pub mod hash;
pub mod language;
pub mod log_level;
pub mod lookup;
pub mod sort_order;
pub mod subtitle;

pub use action::{ConflictAction, RenameAction};
pub use datasource::Datasource;
pub use encoding::Encoding;
pub use expression::Expression;
pub use hash::HashType;
pub use language::Language;
pub use log_level::LogLevel;
pub use lookup::NamedValue;
pub use sort_order::SortOrder;
pub use subtitle::{SubtitleFormat, SubtitleNaming};
