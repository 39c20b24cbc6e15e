//! Episode ordering used when matching against episode lists.

use serde::Serialize;

use super::lookup::{NamedValue, find_by_name};
use crate::error::IllegalValue;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SortOrder {
    Airdate,
    #[serde(rename = "DVD")]
    Dvd,
    Absolute,
    AbsoluteAirdate,
}

impl SortOrder {
    pub const DEFAULT: SortOrder = SortOrder::Airdate;

    /// Resolve `--order`. Absence selects `Airdate`.
    pub fn from_option(raw: Option<&str>) -> Result<Self, IllegalValue> {
        match raw {
            Some(raw) => find_by_name("--order", raw),
            None => Ok(Self::DEFAULT),
        }
    }
}

impl NamedValue for SortOrder {
    const ALL: &'static [Self] = &[
        SortOrder::Airdate,
        SortOrder::Dvd,
        SortOrder::Absolute,
        SortOrder::AbsoluteAirdate,
    ];

    fn name(self) -> &'static str {
        match self {
            SortOrder::Airdate => "Airdate",
            SortOrder::Dvd => "DVD",
            SortOrder::Absolute => "Absolute",
            SortOrder::AbsoluteAirdate => "AbsoluteAirdate",
        }
    }

    fn aliases(self) -> &'static [&'static str] {
        match self {
            SortOrder::Airdate => &["Aired"],
            _ => &[],
        }
    }
}
