//! Command-line token parser.
//!
//! A single imperative pass over the tokens, driven by the option table in
//! [`crate::cli::schema`]. Parsing never derives typed values; it only fills
//! a [`RawConfiguration`](crate::cli::raw::RawConfiguration).
//!
//! # Module Structure
//!
//! - `core` - the binding loop
//! - `helpers` - suggestions, boolean literals, `key=value` entries

mod core;
mod helpers;

pub use self::core::parse_tokens;
pub(crate) use self::helpers::parse_bool_literal;
