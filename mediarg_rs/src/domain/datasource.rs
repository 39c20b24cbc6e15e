//! Metadata sources selectable with `--db`.
//!
//! Only the identity of the source is resolved here; talking to it is left to
//! the commands that consume the configuration.

use serde::Serialize;

use super::lookup::{NamedValue, find_exact};
use crate::error::IllegalValue;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Datasource {
    TheTVDB,
    AniDB,
    TheMovieDB,
    #[serde(rename = "TheMovieDB::TV")]
    TheMovieDBTv,
    OMDb,
    TVmaze,
    AcoustID,
    #[serde(rename = "ID3")]
    Id3,
    #[serde(rename = "xattr")]
    ExtendedAttributes,
    #[serde(rename = "exif")]
    Exif,
    #[serde(rename = "file")]
    FileName,
}

impl Datasource {
    /// Resolve `--db`. Names must match exactly (ignoring case) since several
    /// sources share a prefix.
    pub fn from_option(raw: Option<&str>) -> Result<Option<Self>, IllegalValue> {
        raw.map(|raw| find_exact("--db", raw)).transpose()
    }
}

impl NamedValue for Datasource {
    const ALL: &'static [Self] = &[
        Datasource::TheTVDB,
        Datasource::AniDB,
        Datasource::TheMovieDB,
        Datasource::TheMovieDBTv,
        Datasource::OMDb,
        Datasource::TVmaze,
        Datasource::AcoustID,
        Datasource::Id3,
        Datasource::ExtendedAttributes,
        Datasource::Exif,
        Datasource::FileName,
    ];

    fn name(self) -> &'static str {
        match self {
            Datasource::TheTVDB => "TheTVDB",
            Datasource::AniDB => "AniDB",
            Datasource::TheMovieDB => "TheMovieDB",
            Datasource::TheMovieDBTv => "TheMovieDB::TV",
            Datasource::OMDb => "OMDb",
            Datasource::TVmaze => "TVmaze",
            Datasource::AcoustID => "AcoustID",
            Datasource::Id3 => "ID3",
            Datasource::ExtendedAttributes => "xattr",
            Datasource::Exif => "exif",
            Datasource::FileName => "file",
        }
    }

    fn aliases(self) -> &'static [&'static str] {
        match self {
            Datasource::TheTVDB => &["TVDB"],
            Datasource::TheMovieDB => &["TMDb"],
            Datasource::TheMovieDBTv => &["TMDb::TV"],
            Datasource::OMDb => &["IMDb"],
            _ => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_names_and_aliases() {
        assert_eq!(Datasource::from_option(None), Ok(None));
        assert_eq!(
            Datasource::from_option(Some("thetvdb")),
            Ok(Some(Datasource::TheTVDB))
        );
        assert_eq!(
            Datasource::from_option(Some("TheMovieDB::TV")),
            Ok(Some(Datasource::TheMovieDBTv))
        );
        assert_eq!(Datasource::from_option(Some("tmdb")), Ok(Some(Datasource::TheMovieDB)));
    }

    #[test]
    fn prefix_is_not_enough() {
        assert!(Datasource::from_option(Some("TheMovie")).is_err());
        assert!(Datasource::from_option(Some("Netflix")).is_err());
    }
}
